//! Placeholder substitution for template rendering.
//!
//! Rendering is **data-only**: a closed map of `key → value` pairs is
//! substituted into `{{KEY}}` tokens. There are no expressions and no
//! conditionals, so the output is fully predictable from the inputs.

use std::collections::HashMap;

use crate::domain::names::NameSet;

/// Variable map for template rendering.
///
/// ## Built-in keys
///
/// | Key                  | Source                                  |
/// |----------------------|-----------------------------------------|
/// | `NAME`               | canonical artifact name                 |
/// | `SINGULAR`           | `NameSet::singular`                     |
/// | `PLURAL`             | `NameSet::plural`                       |
/// | `CAPITALIZED_PLURAL` | `NameSet::capitalized_plural`           |
/// | `TABLE`              | `NameSet::table_name`                   |
/// | `MODEL_NAME`         | set by the composer for controllers     |
#[derive(Debug, Clone, Default)]
pub struct Placeholders {
    values: HashMap<String, String>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the standard placeholder set for an artifact.
    ///
    /// `canonical_name` is the final (suffix-carrying) artifact name; the
    /// rest come from the shared [`NameSet`].
    pub fn for_artifact(canonical_name: &str, names: &NameSet) -> Self {
        let mut values = HashMap::new();
        values.insert("NAME".to_string(), canonical_name.to_string());
        values.insert("SINGULAR".to_string(), names.singular.clone());
        values.insert("PLURAL".to_string(), names.plural.clone());
        values.insert(
            "CAPITALIZED_PLURAL".to_string(),
            names.capitalized_plural.clone(),
        );
        values.insert("TABLE".to_string(), names.table_name.clone());
        Self { values }
    }

    /// Add a key, consuming self and returning the updated map.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Get a value if the key is set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Render a template by replacing `{{KEY}}` tokens.
    ///
    /// Every occurrence of every known key is substituted in a single
    /// linear pass. Tokens whose key is absent from the map are left
    /// verbatim, which allows staged rendering (name substituted first,
    /// dependent fields by a later pass).
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        // Order doesn't matter for independent variables.
        for (key, value) in &self.values {
            let token = format!("{{{{{key}}}}}");
            result = result.replace(&token, value);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_every_occurrence() {
        let ph = Placeholders::new().with("NAME", "Song");
        assert_eq!(ph.render("{{NAME}} and {{NAME}}"), "Song and Song");
    }

    #[test]
    fn unknown_tokens_are_left_verbatim() {
        let ph = Placeholders::new().with("NAME", "Song");
        assert_eq!(ph.render("{{NAME}} {{LATER}}"), "Song {{LATER}}");
    }

    #[test]
    fn keys_absent_from_template_change_nothing() {
        let ph = Placeholders::new()
            .with("NAME", "Song")
            .with("UNUSED", "never");
        assert_eq!(ph.render("plain {{NAME}} text"), "plain Song text");
    }

    #[test]
    fn staged_rendering_composes() {
        let first = Placeholders::new().with("NAME", "Song");
        let second = Placeholders::new().with("TABLE", "songs");
        let stage_one = first.render("{{NAME}} -> {{TABLE}}");
        assert_eq!(second.render(&stage_one), "Song -> songs");
    }

    #[test]
    fn artifact_set_carries_name_forms() {
        let names = crate::domain::names::NameSet::derive("Song");
        let ph = Placeholders::for_artifact("SongController", &names);
        assert_eq!(ph.get("NAME"), Some("SongController"));
        assert_eq!(ph.get("PLURAL"), Some("songs"));
        assert_eq!(ph.get("TABLE"), Some("songs"));
    }
}
