//! Template store backed by a directory of `.tpl` files.

use std::path::PathBuf;

use tracing::debug;

use craft_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::CoreResult,
};

/// Loads templates from `<root>/<name>.tpl`.
///
/// Files are read fresh on every `load` call, so edits to a template take
/// effect on the next generation without restarting anything.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateStore {
    root: PathBuf,
}

impl DirectoryTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl TemplateStore for DirectoryTemplateStore {
    fn load(&self, name: &str) -> CoreResult<String> {
        let path = self.root.join(format!("{name}.tpl"));
        debug!(template = name, path = %path.display(), "loading template");

        std::fs::read_to_string(&path).map_err(|_| {
            ApplicationError::MissingTemplate {
                name: name.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craft_core::error::CoreError;

    #[test]
    fn loads_named_template_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("model.tpl"), "class {{NAME}} {}").unwrap();

        let store = DirectoryTemplateStore::new(dir.path());
        assert_eq!(store.load("model").unwrap(), "class {{NAME}} {}");
    }

    #[test]
    fn missing_file_maps_to_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryTemplateStore::new(dir.path());

        let err = store.load("controller").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::MissingTemplate { .. })
        ));
    }

    #[test]
    fn edits_are_visible_on_next_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.tpl");
        std::fs::write(&path, "v1").unwrap();

        let store = DirectoryTemplateStore::new(dir.path());
        assert_eq!(store.load("model").unwrap(), "v1");

        std::fs::write(&path, "v2").unwrap();
        assert_eq!(store.load("model").unwrap(), "v2");
    }
}
