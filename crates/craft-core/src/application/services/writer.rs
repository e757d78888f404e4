//! Artifact writer: path composition and the single mutating primitive.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::ports::Filesystem;
use crate::error::CoreResult;

/// Writes rendered artifacts through the [`Filesystem`] port.
///
/// `write` is the only mutating primitive in the engine; every other
/// component funnels through it. Paths are always composed from an
/// explicit caller-supplied project root; the engine never reads the
/// process working directory.
pub struct ArtifactWriter<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> ArtifactWriter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Compose the target path for a named artifact. Pure — no I/O.
    pub fn resolve_target_path(
        root: &Path,
        subdir: &str,
        artifact_name: &str,
        extension: &str,
    ) -> PathBuf {
        root.join(subdir).join(format!("{artifact_name}.{extension}"))
    }

    /// Existence probe for collision detection.
    pub fn exists(&self, path: &Path) -> bool {
        self.filesystem.exists(path)
    }

    /// Write `content` to `path`, creating missing parent directories
    /// first. Creates or overwrites the file.
    pub fn write(&self, path: &Path, content: &str) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, content)?;
        debug!(path = %path.display(), bytes = content.len(), "artifact written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::testing::TestFilesystem;

    #[test]
    fn resolve_target_path_composes_under_root() {
        let path =
            ArtifactWriter::resolve_target_path(Path::new("/proj"), "models", "Song", "js");
        assert_eq!(path, PathBuf::from("/proj/models/Song.js"));
    }

    #[test]
    fn write_creates_parent_directories() {
        let fs = TestFilesystem::new();
        let writer = ArtifactWriter::new(&fs);

        writer
            .write(Path::new("/proj/models/Song.js"), "content")
            .unwrap();

        assert!(fs.exists(Path::new("/proj/models")));
        assert_eq!(
            fs.read(Path::new("/proj/models/Song.js")).as_deref(),
            Some("content")
        );
    }
}
