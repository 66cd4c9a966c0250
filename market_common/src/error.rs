//! Error types shared across the workspace.
//!
//! The `EngineError` enum unifies the failure cases of the simulation engine:
//! invalid generator input, channel communication with a stopped updater, and
//! the I/O and JSON errors the rendering side can hit.
use std::io;

use thiserror::Error;

/// Unified error type shared by the engine and its consumers.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A series of zero length was requested.
    #[error("Series length must be at least 1")]
    EmptySeries,

    /// The series start value was NaN or infinite.
    #[error("Series start value must be finite, got {0}")]
    NonFiniteStart(f64),

    /// The volatility parameter was negative, NaN or infinite.
    #[error("Volatility must be finite and non-negative, got {0}")]
    InvalidVolatility(f64),

    /// Channel send failed (e.g., the updater thread is gone); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),

    /// Channel receive failed (e.g., sender closed); contains a short context string.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),

    /// I/O error while writing rendered output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding a snapshot via serde_json.
    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
