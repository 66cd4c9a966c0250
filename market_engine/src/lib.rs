//!
//! Synthetic market data engine.
//!
//! Two independent pieces:
//! - `series` — one-shot random-walk price series for chart backfill.
//! - `updater` — recurring, timer-driven mutation of a quoted-entity
//!   collection with snapshot broadcasting to subscribers.
//!
//! Both draw randomness through the `noise` abstraction so tests can inject
//! deterministic sample streams.
#![warn(missing_docs)]
pub mod noise;
pub mod series;
pub mod updater;

pub use noise::{FixedNoise, Noise, SeededNoise, ThreadNoise};
pub use series::{generate_series, generate_series_with};
pub use updater::{SnapshotEvent, Updater, UpdaterHandle};
