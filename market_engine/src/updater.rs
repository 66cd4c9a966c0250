//! Live entity updater: recurring perturbation of a quoted-entity collection
//! with snapshot broadcasting.
//!
//! [`Updater::start`] spawns a background thread that owns the collection
//! exclusively and multiplexes two channels with `crossbeam_channel::select!`:
//! a `tick` timer at the configured interval, and a control channel carrying
//! subscriptions, forced ticks and shutdown. Every tick perturbs each entity
//! independently under its [`TickProfile`] and pushes an owned snapshot to all
//! subscribers; a subscriber that dropped its receiver is pruned on the next
//! broadcast.
//!
//! Event model:
//! - `SnapshotEvent::Snapshot(Vec<Q>)` — the collection after a tick (and,
//!   immediately on subscription, its current state).
//! - `SnapshotEvent::Shutdown` — the updater is going away; consumers should
//!   terminate gracefully.
//!
//! Teardown is deterministic: [`UpdaterHandle::stop`] (or dropping the handle)
//! signals the thread, which broadcasts `Shutdown` and exits, and the handle
//! joins it before returning. No tick can fire after `stop` returns.

use chrono::{DateTime, Utc};
use crossbeam_channel::{Receiver, Sender, select, unbounded};
use log::{debug, info};
use std::thread;
use std::time::Duration;

use market_common::fmt::round_dp;
use market_common::{EngineError, Quoted, Result};

use crate::noise::{Noise, ThreadNoise};

/// Display precision of the derived percent change, for every class.
const PERCENT_DECIMALS: u32 = 2;

/// Message pushed by an updater to its subscribers.
#[derive(Debug, Clone)]
pub enum SnapshotEvent<Q> {
    /// The collection state after the latest tick.
    Snapshot(Vec<Q>),
    /// The updater has been torn down; no further snapshots will arrive.
    Shutdown,
}

enum Control<Q> {
    Subscribe(Sender<SnapshotEvent<Q>>),
    TickNow,
    Shutdown,
}

/// Advance one entity by one tick.
///
/// `unit` is a uniform sample in `[0, 1)`; `0.5` means no movement. The new
/// value is clamped to the class floor, the cumulative change absorbs the
/// same delta, and the percent change is recomputed against the pre-change
/// value reconstructed as `value - change`. When the cumulative change
/// catches up with the value that denominator crosses zero and the percent
/// becomes infinite; the result is stored as-is and carried into later ticks.
pub fn apply_tick<Q: Quoted>(entity: &mut Q, unit: f64, at: DateTime<Utc>) {
    let profile = entity.profile();
    let value = entity.value();

    let delta = (unit - 0.5) * value * profile.volatility_factor;
    let new_value = (value + delta).max(profile.floor);
    let new_change = entity.change() + delta;
    let percent = new_change / (new_value - new_change) * 100.0;

    entity.apply(
        round_dp(new_value, profile.decimals),
        round_dp(new_change, profile.decimals),
        round_dp(percent, PERCENT_DECIMALS),
        at,
    );
}

/// Background market updater that broadcasts snapshots to subscribers.
pub struct Updater;

impl Updater {
    /// Start an updater over `seed` ticking every `interval`, with the
    /// thread-local RNG as its randomness source.
    pub fn start<Q>(seed: Vec<Q>, interval: Duration) -> UpdaterHandle<Q>
    where
        Q: Quoted + Clone + Send + 'static,
    {
        Self::start_with_noise(seed, interval, ThreadNoise)
    }

    /// Start an updater with an explicit randomness source.
    ///
    /// The updater takes ownership of `seed`; it is the only writer for the
    /// lifetime of the instance, and subscribers only ever see owned clones.
    pub fn start_with_noise<Q, N>(seed: Vec<Q>, interval: Duration, mut noise: N) -> UpdaterHandle<Q>
    where
        Q: Quoted + Clone + Send + 'static,
        N: Noise + 'static,
    {
        let (control_tx, control_rx) = unbounded::<Control<Q>>();
        let ticker = crossbeam_channel::tick(interval);

        let thread = thread::spawn(move || {
            let mut entities = seed;
            let mut subscribers: Vec<Sender<SnapshotEvent<Q>>> = Vec::new();
            info!(
                "Updater started: {} entities, interval {:?}",
                entities.len(),
                interval
            );

            loop {
                select! {
                    recv(control_rx) -> msg => match msg {
                        Ok(Control::Subscribe(tx)) => {
                            // A late subscriber observes the current state immediately
                            // instead of waiting out one interval.
                            if tx.send(SnapshotEvent::Snapshot(entities.clone())).is_ok() {
                                subscribers.push(tx);
                                debug!("Updater: subscriber added, total {}", subscribers.len());
                            }
                        }
                        Ok(Control::TickNow) => {
                            run_tick(&mut entities, &mut noise, &mut subscribers);
                        }
                        Ok(Control::Shutdown) | Err(_) => break,
                    },
                    recv(ticker) -> _ => {
                        run_tick(&mut entities, &mut noise, &mut subscribers);
                    }
                }
            }

            for tx in &subscribers {
                let _ = tx.send(SnapshotEvent::Shutdown);
            }
            info!("Updater stopped");
        });

        UpdaterHandle {
            control_tx,
            thread: Some(thread),
        }
    }
}

/// Perturb every entity independently, then broadcast the new snapshot,
/// dropping subscribers whose receiver is gone.
fn run_tick<Q, N>(entities: &mut [Q], noise: &mut N, subscribers: &mut Vec<Sender<SnapshotEvent<Q>>>)
where
    Q: Quoted + Clone,
    N: Noise,
{
    let at = Utc::now();
    for entity in entities.iter_mut() {
        apply_tick(entity, noise.sample_unit(), at);
    }
    let snapshot = entities.to_vec();
    subscribers.retain(|tx| tx.send(SnapshotEvent::Snapshot(snapshot.clone())).is_ok());
}

/// Handle owning a running updater: subscription point and teardown switch.
pub struct UpdaterHandle<Q> {
    control_tx: Sender<Control<Q>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl<Q> UpdaterHandle<Q> {
    /// Register a new subscriber and return its event receiver.
    ///
    /// The first event is a snapshot of the current collection state.
    /// Dropping the receiver unsubscribes; the updater prunes it on the next
    /// broadcast.
    pub fn subscribe(&self) -> Result<Receiver<SnapshotEvent<Q>>> {
        let (tx, rx) = unbounded();
        self.control_tx
            .send(Control::Subscribe(tx))
            .map_err(|e| EngineError::ChannelSend(e.to_string()))?;
        Ok(rx)
    }

    /// Run one tick out of schedule. The regular cadence is unaffected.
    pub fn force_tick(&self) -> Result<()> {
        self.control_tx
            .send(Control::TickNow)
            .map_err(|e| EngineError::ChannelSend(e.to_string()))
    }

    /// Tear the updater down: no tick fires after this returns.
    ///
    /// Subscribers receive a final `SnapshotEvent::Shutdown`. Dropping the
    /// handle without calling `stop` performs the same teardown.
    pub fn stop(self) {
        // Drop runs the shutdown.
    }

    fn shutdown(&mut self) {
        let _ = self.control_tx.send(Control::Shutdown);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl<Q> Drop for UpdaterHandle<Q> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
