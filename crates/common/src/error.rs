//! Error types shared across Spotlight crates.

use spotlight_model::ColorParseError;

/// Top-level error type for Spotlight operations.
#[derive(Debug, thiserror::Error)]
pub enum SpotlightError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Drawing surface {id:?} unavailable: {message}")]
    SurfaceUnavailable { id: String, message: String },

    #[error("Input source error: {message}")]
    InputSource { message: String },

    #[error(transparent)]
    InvalidColor(#[from] ColorParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using SpotlightError.
pub type SpotResult<T> = Result<T, SpotlightError>;

impl SpotlightError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn surface_unavailable(id: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::SurfaceUnavailable {
            id: id.into(),
            message: msg.into(),
        }
    }

    pub fn input_source(msg: impl Into<String>) -> Self {
        Self::InputSource {
            message: msg.into(),
        }
    }
}
