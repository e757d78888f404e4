//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The requested template name has no corresponding source. Fatal to
    /// the current generation call, never retried.
    #[error("template '{name}' not found")]
    MissingTemplate { name: String },

    /// The target artifact already exists (fail-fast collision policy).
    #[error("artifact '{name}' already exists at {path}")]
    ArtifactExists { name: String, path: PathBuf },

    /// Directory creation or file write failed. Propagated unchanged —
    /// retrying a permission or disk-space failure without operator
    /// intervention is pointless.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingTemplate { name } => vec![
                format!("No template named '{}' is available", name),
                "Check the template directory passed via --templates".into(),
                "Built-in templates: model, controller, service (+ _resource variants)".into(),
            ],
            Self::ArtifactExists { name, path } => vec![
                format!("'{}' already exists: {}", name, path.display()),
                "Pass --on-conflict rename to generate a Copy-suffixed artifact".into(),
                "Or choose a different name".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingTemplate { .. } => ErrorCategory::NotFound,
            Self::ArtifactExists { .. } => ErrorCategory::Conflict,
            Self::Filesystem { .. } => ErrorCategory::Internal,
        }
    }
}
