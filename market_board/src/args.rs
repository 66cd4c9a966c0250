//! CLI arguments for the market board.

use clap::Parser;
use market_common::AssetClass;

/// Terminal market board streaming simulated quotes.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Asset classes to stream; defaults to all four.
    #[arg(long, value_enum, num_args = 1.., value_delimiter = ',')]
    pub classes: Option<Vec<AssetClass>>,

    /// Seed for a reproducible run; omitted means fresh randomness.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit snapshots as JSON lines instead of formatted rows.
    #[arg(long)]
    pub json: bool,

    /// Length of the historical series preview printed at startup.
    #[arg(long, default_value_t = 30)]
    pub history: usize,
}

impl Args {
    /// Selected classes in display order, deduplicated.
    pub fn selected_classes(&self) -> Vec<AssetClass> {
        match &self.classes {
            None => AssetClass::ALL.to_vec(),
            Some(picked) => AssetClass::ALL
                .into_iter()
                .filter(|class| picked.contains(class))
                .collect(),
        }
    }
}
