//! Application services: the engine's use cases.

pub mod collision;
pub mod composer;
pub mod generator;
pub mod writer;

#[cfg(test)]
pub mod testing;

pub use collision::{CollisionResolver, ResolvedArtifact, rewrite_self_references};
pub use composer::{ResourceComposer, ResourceError};
pub use generator::{ArtifactGenerator, CollisionPolicy, GenerateOptions};
pub use writer::ArtifactWriter;
