//! Craft Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Craft
//! code generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            craft-cli (CLI)              │
//! │      (Implements Driving Ports)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ArtifactGenerator, ResourceComposer)  │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: TemplateStore, Filesystem) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     craft-adapters (Infrastructure)     │
//! │ (DirectoryTemplateStore, LocalFs, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │   (NameSet, Placeholders, ArtifactKind) │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use craft_core::{
//!     application::services::{ArtifactGenerator, GenerateOptions},
//!     domain::ArtifactKind,
//! };
//!
//! // With injected adapters:
//! let generator = ArtifactGenerator::new(ArtifactKind::Model, &store, &filesystem);
//! let result = generator.generate("song", &GenerateOptions::new("./backend"))?;
//! println!("wrote {}", result.path.display());
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ports::{Filesystem, TemplateStore},
        services::{
            ArtifactGenerator, ArtifactWriter, CollisionPolicy, CollisionResolver,
            GenerateOptions, ResourceComposer, ResourceError,
        },
    };
    pub use crate::domain::{
        ArtifactKind, ArtifactSpec, GenerationResult, NameSet, Placeholders, ResourceResult,
    };
    pub use crate::error::{CoreError, CoreResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
