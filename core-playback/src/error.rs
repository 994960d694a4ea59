//! # Playback Error Types
//!
//! The process-info setters and getters are total and never fail. Errors only
//! come from opt-in checks and from building a session out of a configuration.

use bridge_traits::InterlaceMethod;
use thiserror::Error;

/// Errors that can occur around playback state handling.
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// The default deinterlace method is not part of the advertised set.
    #[error("Deinterlace method '{method}' is not supported (supported: {supported:?})")]
    UnsupportedDeinterlaceMethod {
        method: InterlaceMethod,
        supported: Vec<InterlaceMethod>,
    },

    /// Session configuration could not be built.
    #[error("Runtime error: {0}")]
    Runtime(#[from] core_runtime::Error),
}

impl PlaybackError {
    /// Returns `true` if the error is a capability mismatch the caller can
    /// recover from by picking another method.
    pub fn is_capability_error(&self) -> bool {
        matches!(self, PlaybackError::UnsupportedDeinterlaceMethod { .. })
    }
}

/// Result type for playback operations.
pub type Result<T> = std::result::Result<T, PlaybackError>;
