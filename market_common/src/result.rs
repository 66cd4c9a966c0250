//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `EngineError`, so functions can simply return `Result<T>`.
use crate::error::EngineError;

/// Workspace-wide `Result` alias with `EngineError` as the default error.
pub type Result<T, E = EngineError> = std::result::Result<T, E>;
