//! Collision resolution: turn "target already exists" into a safe
//! alternate artifact without ever overwriting existing content.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::ports::Filesystem;

/// A resolved non-colliding name/path pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub name: String,
    pub path: PathBuf,
}

/// Resolves naming collisions by appending a deterministic suffix
/// sequence: `Copy`, `Copy2`, `Copy3`, …
pub struct CollisionResolver<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> CollisionResolver<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Find the first free name/path in the suffix sequence.
    ///
    /// Starting from counter 1, the candidate suffix is `Copy` and then
    /// `Copy2`, `Copy3`, … The candidate keeps the original directory and
    /// extension. Termination: each iteration strictly changes the
    /// candidate path, so the loop runs proportionally to the number of
    /// pre-existing `CopyN` files — operator-created, not adversarial.
    pub fn resolve(
        &self,
        original_name: &str,
        original_path: &Path,
        extension: &str,
    ) -> ResolvedArtifact {
        let dir = original_path.parent().unwrap_or_else(|| Path::new(""));
        let stem = original_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(original_name);

        let mut counter: u32 = 1;
        loop {
            let suffix = if counter == 1 {
                "Copy".to_string()
            } else {
                format!("Copy{counter}")
            };
            let candidate_name = format!("{original_name}{suffix}");
            let candidate_path = dir.join(format!("{stem}{suffix}.{extension}"));

            if !self.filesystem.exists(&candidate_path) {
                debug!(
                    original = original_name,
                    resolved = %candidate_name,
                    "collision resolved"
                );
                return ResolvedArtifact {
                    name: candidate_name,
                    path: candidate_path,
                };
            }
            counter += 1;
        }
    }
}

/// Rewrite every literal occurrence of `original_name` in rendered
/// template text to `resolved_name`, so an artifact that collided and was
/// renamed refers to itself consistently.
///
/// Known limitation: substitution is whole-string, not boundary-aware. A
/// name that is a substring of another identifier in the template is also
/// rewritten. Preserved as-is because existing templates may rely on
/// substring matches.
pub fn rewrite_self_references(rendered: &str, original_name: &str, resolved_name: &str) -> String {
    rendered.replace(original_name, resolved_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::testing::TestFilesystem;

    #[test]
    fn first_collision_gets_copy_suffix() {
        let fs = TestFilesystem::new();
        fs.seed_file("/p/models/Song.js", "x");

        let resolver = CollisionResolver::new(&fs);
        let resolved = resolver.resolve("Song", Path::new("/p/models/Song.js"), "js");

        assert_eq!(resolved.name, "SongCopy");
        assert_eq!(resolved.path, PathBuf::from("/p/models/SongCopy.js"));
    }

    #[test]
    fn suffix_counter_increments_past_existing_copies() {
        let fs = TestFilesystem::new();
        fs.seed_file("/p/models/Song.js", "x");
        fs.seed_file("/p/models/SongCopy.js", "x");
        fs.seed_file("/p/models/SongCopy2.js", "x");

        let resolver = CollisionResolver::new(&fs);
        let resolved = resolver.resolve("Song", Path::new("/p/models/Song.js"), "js");

        assert_eq!(resolved.name, "SongCopy3");
        assert_eq!(resolved.path, PathBuf::from("/p/models/SongCopy3.js"));
    }

    #[test]
    fn rewrite_replaces_every_occurrence() {
        let out = rewrite_self_references("class Song { Song() {} }", "Song", "SongCopy");
        assert_eq!(out, "class SongCopy { SongCopy() {} }");
    }

    #[test]
    fn rewrite_is_not_boundary_aware() {
        // Documented limitation: "Songbook" contains "Song" and is rewritten.
        let out = rewrite_self_references("Song Songbook", "Song", "SongCopy");
        assert_eq!(out, "SongCopy SongCopybook");
    }
}
