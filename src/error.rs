//! Error types.
//!
//! Recomputation itself has nothing recoverable to report: missing surfaces,
//! stale selections, and empty candidate sets all degrade to empty results.
//! What remains are caller mistakes caught at the boundary.

use crate::zone::ZoneId;

/// Errors returned by [`crate::view::ZoneView`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("zone view is bound to zone {expected}, got zone {actual}")]
    ZoneMismatch { expected: ZoneId, actual: ZoneId },
}

/// Errors raised while reading [`crate::config::ViewPolicy`] settings.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid boolean for {var}: '{value}'")]
    InvalidFlag { var: String, value: String },
}
