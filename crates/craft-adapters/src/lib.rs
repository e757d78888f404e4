//! Infrastructure adapters for Craft.
//!
//! This crate implements the ports defined in `craft-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_store::{BuiltinTemplateStore, DirectoryTemplateStore};
