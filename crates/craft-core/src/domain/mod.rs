//! Domain layer: pure logic, no I/O.

pub mod artifact;
pub mod error;
pub mod names;
pub mod naming;
pub mod placeholders;

pub use artifact::{ArtifactKind, ArtifactSpec, GenerationResult, ResourceResult};
pub use error::{DomainError, ErrorCategory};
pub use names::NameSet;
pub use placeholders::Placeholders;
