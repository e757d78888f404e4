//! Application ports (hexagonal boundaries).

pub mod output;

pub use output::{Filesystem, TemplateStore};

#[cfg(test)]
pub use output::MockTemplateStore;
