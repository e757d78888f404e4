//! Artifact domain types: kinds, per-request specs, and results.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::names::NameSet;
use crate::domain::placeholders::Placeholders;

// ── ArtifactKind ──────────────────────────────────────────────────────────────

/// The kind of source artifact being generated.
///
/// Each kind fixes its output subdirectory, its canonical-name suffix, and
/// the logical names of its templates. Adding a kind means adding a variant
/// and its arms here; nothing else changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Model,
    Controller,
    Service,
}

impl ArtifactKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Controller => "controller",
            Self::Service => "service",
        }
    }

    /// Conventional output subdirectory under the project root.
    pub const fn subdirectory(&self) -> &'static str {
        match self {
            Self::Model => "models",
            Self::Controller => "controllers",
            Self::Service => "services",
        }
    }

    /// Canonical-name suffix, applied idempotently via `ensure_suffix`.
    ///
    /// Models carry no suffix; controllers and services are named
    /// `FooController` / `FooService`.
    pub const fn suffix(&self) -> Option<&'static str> {
        match self {
            Self::Model => None,
            Self::Controller => Some("Controller"),
            Self::Service => Some("Service"),
        }
    }

    /// Logical template name for this kind.
    ///
    /// Resource mode selects the richer CRUD-shaped template; basic mode
    /// the minimal one.
    pub fn template_name(&self, resource: bool) -> String {
        if resource {
            format!("{}_resource", self.as_str())
        } else {
            self.as_str().to_string()
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "model" => Ok(Self::Model),
            "controller" => Ok(Self::Controller),
            "service" => Ok(Self::Service),
            other => Err(DomainError::InvalidName {
                name: other.to_string(),
                reason: "unknown artifact kind".into(),
            }),
        }
    }
}

// ── ArtifactSpec ──────────────────────────────────────────────────────────────

/// Everything needed to materialise one artifact.
///
/// Created per generation request and discarded after use. Owned
/// exclusively by the generation call that built it; no shared mutable
/// state crosses calls.
#[derive(Debug, Clone)]
pub struct ArtifactSpec {
    pub kind: ArtifactKind,
    pub base_name: String,
    pub target_directory: PathBuf,
    pub template_name: String,
    pub placeholders: Placeholders,
}

// ── Results ───────────────────────────────────────────────────────────────────

/// Outcome of one successful artifact generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    /// Where the artifact was written.
    pub path: PathBuf,
    /// The name the artifact ended up with (differs from the canonical
    /// name when a collision was renamed away).
    pub final_name: String,
    pub kind: ArtifactKind,
    /// Whether the CollisionResolver had to rename the artifact.
    pub collision_resolved: bool,
}

/// Outcome of a full resource generation: one result per member artifact
/// plus the shared derived names.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceResult {
    pub names: NameSet,
    pub model: GenerationResult,
    pub controller: GenerationResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_subdirectories_are_conventional() {
        assert_eq!(ArtifactKind::Model.subdirectory(), "models");
        assert_eq!(ArtifactKind::Controller.subdirectory(), "controllers");
        assert_eq!(ArtifactKind::Service.subdirectory(), "services");
    }

    #[test]
    fn only_model_has_no_suffix() {
        assert_eq!(ArtifactKind::Model.suffix(), None);
        assert_eq!(ArtifactKind::Controller.suffix(), Some("Controller"));
        assert_eq!(ArtifactKind::Service.suffix(), Some("Service"));
    }

    #[test]
    fn template_name_reflects_mode() {
        assert_eq!(ArtifactKind::Model.template_name(false), "model");
        assert_eq!(ArtifactKind::Model.template_name(true), "model_resource");
        assert_eq!(
            ArtifactKind::Controller.template_name(true),
            "controller_resource"
        );
    }

    #[test]
    fn kind_from_str_is_case_insensitive() {
        assert_eq!("Model".parse::<ArtifactKind>().unwrap(), ArtifactKind::Model);
        assert_eq!(
            "CONTROLLER".parse::<ArtifactKind>().unwrap(),
            ArtifactKind::Controller
        );
        assert!("widget".parse::<ArtifactKind>().is_err());
    }
}
