//! Error handling for RKCanvas
//!
//! Only recoverable conditions are modelled here:
//! - Not-found errors (detaching an unknown observer, removing an absent member)
//! - Invalid paint requests (a rectangle with neither fill nor border)
//! - Configuration errors (theme values out of range, malformed overrides)
//!
//! Precondition violations such as dragging an idle select box are programming
//! errors and panic instead of returning one of these types.

use thiserror::Error;

/// Theme/configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A numeric value is outside its permitted range
    #[error("Value out of range for '{key}': {value}")]
    ValueOutOfRange {
        /// The configuration key.
        key: String,
        /// The rejected value.
        value: String,
    },

    /// The override document could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main error type for RKCanvas
#[derive(Error, Debug)]
pub enum CanvasError {
    /// The requested item is not present
    #[error("Not found: {what}")]
    NotFound {
        /// Description of the missing item.
        what: String,
    },

    /// A draw call was issued with contradictory parameters
    #[error("Invalid paint request: {reason}")]
    InvalidPaint {
        /// Why the request was rejected.
        reason: String,
    },

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl CanvasError {
    /// Create a not-found error
    pub fn not_found(what: impl Into<String>) -> Self {
        CanvasError::NotFound { what: what.into() }
    }

    /// Create an invalid-paint error
    pub fn invalid_paint(reason: impl Into<String>) -> Self {
        CanvasError::InvalidPaint {
            reason: reason.into(),
        }
    }

    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, CanvasError::NotFound { .. })
    }
}

/// Result type using CanvasError
pub type Result<T> = std::result::Result<T, CanvasError>;
