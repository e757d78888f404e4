//! Template store adapters.

pub mod builtin;
pub mod directory;

pub use builtin::BuiltinTemplateStore;
pub use directory::DirectoryTemplateStore;
