//! Market board — a terminal consumer of the simulation engine.
//!
//! Starts one live updater per selected asset class at that class's cadence
//! (stocks 5 s, indices 8 s, currencies 10 s, cryptos 7 s), prints the news
//! feed and a random-walk backfill preview once at startup, then streams
//! snapshot tables (or JSON lines with `--json`) until Ctrl+C.
//!
//! Usage example:
//! ```bash
//! market_board --classes stocks,cryptos --seed 42 --history 10
//! ```
//!
//! Each updater owns its collection on its own background thread; this binary
//! only subscribes, renders, and tears the updaters down on shutdown.
#![warn(missing_docs)]
mod args;
mod view;

use std::io;
use std::thread;

use chrono::Utc;
use clap::Parser;
use crossbeam_channel::unbounded;
use log::{error, info};
use serde::Serialize;

use market_common::instrument::{Cryptocurrency, CurrencyPair, MarketIndex, Stock};
use market_common::{AssetClass, EngineError, Quoted, Result, seed};
use market_engine::{SeededNoise, SnapshotEvent, Updater, UpdaterHandle, generate_series, generate_series_with};

use crate::args::Args;

/// Volatility (in percent per step) of the startup backfill preview.
const PREVIEW_VOLATILITY: f64 = 2.0;

/// Start an updater for one class and a printer thread draining its snapshots.
///
/// The printer exits when the updater broadcasts `Shutdown` (or on a render
/// error); the returned handle keeps the updater alive and tears it down when
/// dropped.
fn launch<Q>(
    class: AssetClass,
    entities: Vec<Q>,
    noise_seed: Option<u64>,
    json: bool,
) -> Result<(UpdaterHandle<Q>, thread::JoinHandle<()>)>
where
    Q: Quoted + Serialize + Clone + Send + 'static,
{
    let interval = class.tick_interval();
    let handle = match noise_seed {
        // Offset the seed per class so the four walks differ.
        Some(seed) => Updater::start_with_noise(
            entities,
            interval,
            SeededNoise::from_seed(seed.wrapping_add(class as u64)),
        ),
        None => Updater::start(entities, interval),
    };
    let rx = handle.subscribe()?;

    let printer = thread::spawn(move || {
        let mut stdout = io::stdout();
        loop {
            match rx.recv() {
                Ok(SnapshotEvent::Snapshot(snapshot)) => {
                    if let Err(e) = view::render_snapshot(&mut stdout, class, &snapshot, json) {
                        error!("Failed to render {} snapshot: {}", class, e);
                        break;
                    }
                }
                Ok(SnapshotEvent::Shutdown) | Err(_) => break,
            }
        }
        info!("{} stream closed", class);
    });

    Ok((handle, printer))
}

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let (shutdown_tx, shutdown_rx) = unbounded::<()>();
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down board...");
        let _ = shutdown_tx.send(());
    })
    .expect("Error setting Ctrl+C handler");

    let mut stdout = io::stdout();

    // One-shot collateral: backfill preview and the news feed.
    let preview = match args.seed {
        Some(seed) => generate_series_with(
            args.history,
            187.32,
            PREVIEW_VOLATILITY,
            &mut SeededNoise::from_seed(seed),
        )?,
        None => generate_series(args.history, 187.32, PREVIEW_VOLATILITY)?,
    };
    view::render_series(&mut stdout, "AAPL", &preview)?;
    view::render_overview(&mut stdout, &seed::stocks())?;
    view::render_news(&mut stdout, &seed::news(Utc::now()))?;

    let mut stocks: Option<UpdaterHandle<Stock>> = None;
    let mut indices: Option<UpdaterHandle<MarketIndex>> = None;
    let mut currencies: Option<UpdaterHandle<CurrencyPair>> = None;
    let mut cryptos: Option<UpdaterHandle<Cryptocurrency>> = None;
    let mut printers = Vec::new();

    for class in args.selected_classes() {
        match class {
            AssetClass::Stocks => {
                let (handle, printer) = launch(class, seed::stocks(), args.seed, args.json)?;
                stocks = Some(handle);
                printers.push(printer);
            }
            AssetClass::Indices => {
                let (handle, printer) = launch(class, seed::indices(), args.seed, args.json)?;
                indices = Some(handle);
                printers.push(printer);
            }
            AssetClass::Currencies => {
                let (handle, printer) = launch(class, seed::currency_pairs(), args.seed, args.json)?;
                currencies = Some(handle);
                printers.push(printer);
            }
            AssetClass::Cryptos => {
                let (handle, printer) = launch(class, seed::cryptos(), args.seed, args.json)?;
                cryptos = Some(handle);
                printers.push(printer);
            }
        }
    }

    info!("Board is running. Press Ctrl+C to exit.");
    shutdown_rx
        .recv()
        .map_err(|e| EngineError::ChannelRecv(e.to_string()))?;

    // Stop every updater; each broadcasts Shutdown, letting its printer exit.
    drop(stocks);
    drop(indices);
    drop(currencies);
    drop(cryptos);
    for printer in printers {
        let _ = printer.join();
    }

    info!("Board stopped");
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
