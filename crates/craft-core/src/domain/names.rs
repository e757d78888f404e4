//! Derived naming bundle shared by every artifact in a resource.

use serde::Serialize;

use crate::domain::naming::{capitalize, pluralize, table_name, to_camel_case, to_snake_case};

/// The naming forms derived once from a base name.
///
/// A **Value Object**: computed at the start of a generation call and
/// reused by every artifact in that call, so a resource's model,
/// controller, and table all agree on spelling. Derivation is
/// deterministic: the same base always yields the same set.
///
/// | Field                 | For `"playlistTeam"` |
/// |-----------------------|----------------------|
/// | `singular`            | `playlistTeam`       |
/// | `plural`              | `playlistTeams`      |
/// | `capitalized_singular`| `PlaylistTeam`       |
/// | `capitalized_plural`  | `PlaylistTeams`      |
/// | `table_name`          | `playlist_teams`     |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameSet {
    pub singular: String,
    pub plural: String,
    pub capitalized_singular: String,
    pub capitalized_plural: String,
    pub table_name: String,
}

impl NameSet {
    /// Derive all naming forms from a free-form base name.
    ///
    /// The base is normalised through snake_case first so that
    /// `"PlaylistTeam"`, `"playlistTeam"`, and `"playlist_team"` all
    /// produce the same set.
    pub fn derive(base: &str) -> Self {
        let snake = to_snake_case(base.trim());
        let singular = to_camel_case(&snake);
        let plural = pluralize(&singular);

        Self {
            capitalized_singular: capitalize(&singular),
            capitalized_plural: capitalize(&plural),
            table_name: table_name(&singular),
            singular,
            plural,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_all_forms_from_pascal_case() {
        let names = NameSet::derive("PlaylistTeam");
        assert_eq!(names.singular, "playlistTeam");
        assert_eq!(names.plural, "playlistTeams");
        assert_eq!(names.capitalized_singular, "PlaylistTeam");
        assert_eq!(names.capitalized_plural, "PlaylistTeams");
        assert_eq!(names.table_name, "playlist_teams");
    }

    #[test]
    fn spelling_variants_normalise_to_same_set() {
        let a = NameSet::derive("PlaylistTeam");
        let b = NameSet::derive("playlistTeam");
        let c = NameSet::derive("playlist_team");
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn simple_name_pluralises() {
        let names = NameSet::derive("Song");
        assert_eq!(names.singular, "song");
        assert_eq!(names.plural, "songs");
        assert_eq!(names.capitalized_singular, "Song");
        assert_eq!(names.table_name, "songs");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(NameSet::derive("  Song "), NameSet::derive("Song"));
    }
}
