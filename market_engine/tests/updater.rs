//! Lifecycle tests for the live updater: subscription snapshots, forced-tick
//! algebra, determinism under injected noise, unsubscription and teardown.

use std::time::Duration;

use market_common::Quoted;
use market_common::instrument::Stock;
use market_common::seed;
use market_engine::{FixedNoise, SeededNoise, SnapshotEvent, Updater};

/// Interval long enough that no timer tick can fire during a test run.
const QUIET: Duration = Duration::from_secs(3600);

const RECV_WAIT: Duration = Duration::from_secs(5);

fn recv_snapshot<Q: Quoted>(rx: &crossbeam_channel::Receiver<SnapshotEvent<Q>>) -> Vec<Q> {
    match rx.recv_timeout(RECV_WAIT) {
        Ok(SnapshotEvent::Snapshot(entities)) => entities,
        other => panic!("expected a snapshot event, got {:?}", other.map(|_| "event")),
    }
}

#[test]
fn subscriber_receives_current_state_immediately() {
    let handle = Updater::start_with_noise(seed::stocks(), QUIET, FixedNoise(0.5));
    let rx = handle.subscribe().unwrap();

    let snapshot = recv_snapshot(&rx);
    assert_eq!(snapshot.len(), 8);
    assert_eq!(snapshot[0].symbol(), "AAPL");
    assert_eq!(snapshot[0].value(), 187.32);
}

#[test]
fn zero_perturbation_tick_only_recomputes_percent() {
    // FixedNoise(0.5) makes delta zero: price and change stay put and the
    // percent is recomputed from the reconstructed basis 187.32 - 1.28.
    let handle = Updater::start_with_noise(seed::stocks(), QUIET, FixedNoise(0.5));
    let rx = handle.subscribe().unwrap();
    let before = recv_snapshot(&rx);

    handle.force_tick().unwrap();
    let after = recv_snapshot(&rx);

    let aapl = &after[0];
    assert_eq!(aapl.value(), 187.32);
    assert_eq!(aapl.change(), 1.28);
    // 1.28 / 186.04 * 100 = 0.6880..., stored at two decimals.
    assert_eq!(aapl.change_percent(), 0.69);
    assert!(aapl.last_updated() >= before[0].last_updated());
}

#[test]
fn repeated_zero_perturbation_ticks_are_stable() {
    let handle = Updater::start_with_noise(seed::cryptos(), QUIET, FixedNoise(0.5));
    let rx = handle.subscribe().unwrap();
    let initial = recv_snapshot(&rx);

    let mut latest = initial.clone();
    for _ in 0..10 {
        handle.force_tick().unwrap();
        latest = recv_snapshot(&rx);
    }

    for (start, end) in initial.iter().zip(latest.iter()) {
        assert_eq!(start.symbol(), end.symbol());
        assert_eq!(start.value(), end.value());
        assert_eq!(start.change(), end.change());
        assert_eq!(start.change_percent(), end.change_percent());
    }
}

#[test]
fn infinite_percent_from_zero_basis_propagates_unclamped() {
    // A cumulative change equal to the value makes the reconstructed
    // pre-change basis zero, so the percent division blows up. The
    // infinite result is stored as-is and carried into later ticks.
    let seed = vec![Stock::new("ZRO", "Zero Basis Corp.", 1.0, 1.0, 0, 0)];
    let handle = Updater::start_with_noise(seed, QUIET, FixedNoise(0.5));
    let rx = handle.subscribe().unwrap();

    let initial = recv_snapshot(&rx);
    assert!(!initial[0].change_percent().is_finite());

    handle.force_tick().unwrap();
    let after_one = recv_snapshot(&rx);
    assert!(!after_one[0].change_percent().is_finite());
    assert_eq!(after_one[0].value(), 1.0);
    assert_eq!(after_one[0].change(), 1.0);

    handle.force_tick().unwrap();
    let after_two = recv_snapshot(&rx);
    assert!(!after_two[0].change_percent().is_finite());
}

#[test]
fn tick_delta_moves_value_and_change_together() {
    // The largest sample the `[0, 1)` contract allows pins the perturbation
    // to just under +0.5 * value * volatility.
    let handle = Updater::start_with_noise(seed::stocks(), QUIET, FixedNoise(1.0 - f64::EPSILON));
    let rx = handle.subscribe().unwrap();
    let before = recv_snapshot(&rx);

    handle.force_tick().unwrap();
    let after = recv_snapshot(&rx);

    for (old, new) in before.iter().zip(after.iter()) {
        let delta = 0.5 * old.value() * old.profile().volatility_factor;
        let tolerance = 0.01;
        assert!((new.value() - (old.value() + delta)).abs() < tolerance);
        assert!((new.change() - (old.change() + delta)).abs() < tolerance);
        // The pre-tick basis is reconstructible from the new pair.
        let basis_before = old.value() - old.change();
        let basis_after = new.value() - new.change();
        assert!((basis_after - basis_before).abs() < 2.0 * tolerance);
    }
}

#[test]
fn values_stay_above_the_class_floor() {
    let handle = Updater::start_with_noise(seed::currency_pairs(), QUIET, FixedNoise(0.0));
    let rx = handle.subscribe().unwrap();
    let _initial = recv_snapshot(&rx);

    for _ in 0..200 {
        handle.force_tick().unwrap();
        let snapshot = recv_snapshot(&rx);
        assert!(snapshot.iter().all(|pair| pair.value() > 0.0));
    }
}

#[test]
fn identical_seeds_produce_identical_runs() {
    let run = |noise_seed: u64| -> Vec<(f64, f64, f64)> {
        let handle =
            Updater::start_with_noise(seed::indices(), QUIET, SeededNoise::from_seed(noise_seed));
        let rx = handle.subscribe().unwrap();
        let _initial = recv_snapshot(&rx);
        let mut latest = Vec::new();
        for _ in 0..5 {
            handle.force_tick().unwrap();
            latest = recv_snapshot(&rx);
        }
        latest
            .iter()
            .map(|ix| (ix.value(), ix.change(), ix.change_percent()))
            .collect()
    };

    assert_eq!(run(99), run(99));
}

#[test]
fn dropped_receiver_is_pruned_without_disturbing_others() {
    let handle = Updater::start_with_noise(seed::stocks(), QUIET, FixedNoise(0.5));
    let first = handle.subscribe().unwrap();
    let second = handle.subscribe().unwrap();
    let _ = recv_snapshot(&first);
    let _ = recv_snapshot(&second);

    drop(first);
    handle.force_tick().unwrap();
    let snapshot = recv_snapshot(&second);
    assert_eq!(snapshot.len(), 8);

    // The pruned subscriber stays gone; the survivor keeps receiving.
    handle.force_tick().unwrap();
    let snapshot = recv_snapshot(&second);
    assert_eq!(snapshot.len(), 8);
}

#[test]
fn stop_emits_shutdown_and_halts_emissions() {
    let handle = Updater::start_with_noise(seed::stocks(), QUIET, FixedNoise(0.5));
    let rx = handle.subscribe().unwrap();
    let _ = recv_snapshot(&rx);

    handle.stop();

    match rx.recv_timeout(RECV_WAIT) {
        Ok(SnapshotEvent::Shutdown) => {}
        other => panic!("expected shutdown event, got {:?}", other.map(|_| "event")),
    }
    // The channel disconnects once the updater thread is gone.
    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
}

#[test]
fn timer_drives_ticks_at_the_configured_cadence() {
    let handle = Updater::start_with_noise(
        vec![Stock::new("AAPL", "Apple Inc.", 187.32, 1.28, 0, 0)],
        Duration::from_millis(20),
        SeededNoise::from_seed(1),
    );
    let rx = handle.subscribe().unwrap();
    let _initial = recv_snapshot(&rx);

    // Two scheduled ticks must arrive without any forced tick.
    let _ = recv_snapshot(&rx);
    let _ = recv_snapshot(&rx);
}
