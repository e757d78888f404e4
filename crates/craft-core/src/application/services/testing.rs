//! In-memory filesystem double for service tests.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::application::ports::Filesystem;
use crate::error::CoreResult;

/// In-memory [`Filesystem`] backed by hash maps, for exercising the
/// services without touching disk.
#[derive(Default)]
pub struct TestFilesystem {
    files: RwLock<HashMap<PathBuf, String>>,
    directories: RwLock<HashSet<PathBuf>>,
}

impl TestFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a file, creating its ancestor directories.
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        self.record_ancestors(&path);
        self.files.write().unwrap().insert(path, content.into());
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        self.files.read().unwrap().get(path).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.files.read().unwrap().len()
    }

    fn record_ancestors(&self, path: &Path) {
        let mut dirs = self.directories.write().unwrap();
        let mut current = path.parent();
        while let Some(dir) = current {
            if dir.as_os_str().is_empty() {
                break;
            }
            dirs.insert(dir.to_path_buf());
            current = dir.parent();
        }
    }
}

impl Filesystem for TestFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.read().unwrap().contains_key(path)
            || self.directories.read().unwrap().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        let mut dirs = self.directories.write().unwrap();
        let mut current = Some(path);
        while let Some(dir) = current {
            if dir.as_os_str().is_empty() {
                break;
            }
            dirs.insert(dir.to_path_buf());
            current = dir.parent();
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        self.record_ancestors(path);
        self.files
            .write()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
