//!
//! Shared types and helpers for the market simulation workspace.
//!
//! This crate aggregates:
//! - `error` — unified error type `EngineError` used across the workspace.
//! - `result` — handy `Result<T, EngineError>` alias.
//! - `instrument` — the quoted-entity data model and the `Quoted` trait.
//! - `seed` — seed collections the updaters start from.
//! - `fmt` — numeric and display formatting helpers.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod instrument;
pub mod seed;
pub mod fmt;

pub use error::EngineError;
pub use result::Result;
pub use instrument::{AssetClass, Quoted, TickProfile};
