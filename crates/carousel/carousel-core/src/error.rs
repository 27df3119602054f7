//! Error types for the carousel engine.

use serde::{Deserialize, Serialize};

/// Error type for carousel configuration and data handling.
///
/// Runtime navigation never returns an error: invalid indices and degenerate
/// configurations are clamped or ignored so the rendering collaborator always
/// stays in a renderable state. These variants surface only through the strict
/// validation entry points and serialization helpers.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CarouselError {
    /// Carousel was created with no items
    #[error("carousel has no items")]
    EmptyCarousel,

    /// Slide index outside the ring
    #[error("index {index} is out of range for {total} items")]
    IndexOutOfRange { index: usize, total: usize },

    /// Configuration failed strict validation
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Serialization error
    #[error("serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CarouselError {
    /// Create an invalid-configuration error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Get error category for logging/metrics
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::EmptyCarousel | Self::IndexOutOfRange { .. } => "data",
            Self::InvalidConfig { .. } => "validation",
            Self::SerializationError { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for CarouselError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            reason: err.to_string(),
        }
    }
}
