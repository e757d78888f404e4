//! Domain-layer errors (business-rule violations).

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may report and continue)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A name was empty, blank, or otherwise unusable where a real name is
    /// required. Surfaced immediately; no partial work is performed.
    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("Name '{}' was rejected: {}", name, reason),
                "Use a non-empty name like 'Song' or 'playlistTeam'".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Conflict,
    Internal,
}
