//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `craft-adapters` crate provides implementations.

use crate::error::CoreResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `craft_adapters::filesystem::LocalFilesystem` (production)
/// - `craft_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// No locking is performed around `exists` and a subsequent `write_file`:
/// a second process creating the same path in between is a lost collision
/// detection. Acceptable for a developer-invoked interactive tool; the
/// engine is not designed for concurrent multi-process invocation.
pub trait Filesystem: Send + Sync {
    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> CoreResult<()>;

    /// Write content to a file, creating or overwriting it.
    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()>;
}

/// Port for template storage and retrieval.
///
/// Implemented by:
/// - `craft_adapters::template_store::BuiltinTemplateStore` (compile-time templates)
/// - `craft_adapters::template_store::DirectoryTemplateStore` (user templates)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Load the text of the template with the given logical name.
    ///
    /// # Errors
    ///
    /// `ApplicationError::MissingTemplate` when no template has that name.
    fn load(&self, name: &str) -> CoreResult<String>;
}

impl std::fmt::Debug for dyn TemplateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn TemplateStore")
    }
}
