//! Quoted-entity data model shared by the engine and its consumers.
//!
//! Four instrument kinds carry a live quote: `Stock`, `MarketIndex`,
//! `CurrencyPair` and `Cryptocurrency`. All of them expose the same mutable
//! quote trio — current value, cumulative change, and percent change — through
//! the [`Quoted`] trait, plus immutable descriptive fields of their own.
//!
//! The quote trio is private on every struct; the only write path is
//! [`Quoted::apply`], which stamps all derived fields together, so the three
//! values can never get out of sync with each other.
//!
//! [`NewsItem`] is a plain immutable record; it never ticks.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use strum_macros::{Display, EnumString};

use crate::fmt::round_dp;

const STOCK_VOLATILITY: f64 = 0.01;
const INDEX_VOLATILITY: f64 = 0.0015;
const CURRENCY_VOLATILITY: f64 = 0.0008;
const LARGE_CAP_CRYPTO_VOLATILITY: f64 = 0.005;
const CRYPTO_VOLATILITY: f64 = 0.012;

const PRICE_FLOOR: f64 = 0.01;
const RATE_FLOOR: f64 = 0.0001;
const CRYPTO_FLOOR: f64 = 0.000001;

/// Per-class tick parameters: how hard an instrument moves, how low its value
/// may go, and how many decimals its value and change are stored with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickProfile {
    /// Scales the magnitude of the per-tick random perturbation.
    pub volatility_factor: f64,
    /// Strictly positive lower bound the value is clamped to.
    pub floor: f64,
    /// Decimal places the value and cumulative change are rounded to.
    pub decimals: u32,
}

/// Common interface of every live-priced instrument.
pub trait Quoted {
    /// Symbol identifier, unique within the instrument's own collection.
    fn symbol(&self) -> &str;
    /// Current quote (price, index level, exchange rate).
    fn value(&self) -> f64;
    /// Signed cumulative change since the session reference point.
    fn change(&self) -> f64;
    /// `change` as a percentage of the pre-change value.
    fn change_percent(&self) -> f64;
    /// Timestamp of the last mutation.
    fn last_updated(&self) -> DateTime<Utc>;
    /// Tick parameters for this instrument.
    fn profile(&self) -> TickProfile;
    /// Store a freshly derived quote trio and stamp `last_updated`.
    ///
    /// This is the single write path for the mutable fields; callers are
    /// expected to pass values derived together under the engine's tick rule.
    fn apply(&mut self, value: f64, change: f64, change_percent: f64, at: DateTime<Utc>);
}

/// Percent change of the seeded quote relative to its pre-change value.
fn initial_percent(value: f64, change: f64) -> f64 {
    round_dp(change / (value - change) * 100.0, 2)
}

/// Instrument class; each runs its own independent updater.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
pub enum AssetClass {
    Stocks,
    Indices,
    Currencies,
    Cryptos,
}

impl AssetClass {
    /// All classes, in display order.
    pub const ALL: [AssetClass; 4] = [
        AssetClass::Stocks,
        AssetClass::Indices,
        AssetClass::Currencies,
        AssetClass::Cryptos,
    ];

    /// Default cadence of the class's updater.
    pub fn tick_interval(self) -> Duration {
        match self {
            AssetClass::Stocks => Duration::from_secs(5),
            AssetClass::Indices => Duration::from_secs(8),
            AssetClass::Currencies => Duration::from_secs(10),
            AssetClass::Cryptos => Duration::from_secs(7),
        }
    }
}

/// Listed company share quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stock {
    /// Ticker symbol, e.g. `AAPL`.
    pub symbol: String,
    /// Company name.
    pub name: String,
    /// Session trade volume.
    pub volume: u64,
    /// Market capitalization in USD.
    pub market_cap: u64,
    price: f64,
    change: f64,
    change_percent: f64,
    last_updated: DateTime<Utc>,
}

impl Stock {
    /// Create a stock quote; the percent change is derived from `price` and `change`.
    pub fn new(
        symbol: &str,
        name: &str,
        price: f64,
        change: f64,
        volume: u64,
        market_cap: u64,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            volume,
            market_cap,
            price,
            change,
            change_percent: initial_percent(price, change),
            last_updated: Utc::now(),
        }
    }
}

impl Quoted for Stock {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn value(&self) -> f64 {
        self.price
    }

    fn change(&self) -> f64 {
        self.change
    }

    fn change_percent(&self) -> f64 {
        self.change_percent
    }

    fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    fn profile(&self) -> TickProfile {
        TickProfile {
            volatility_factor: STOCK_VOLATILITY,
            floor: PRICE_FLOOR,
            decimals: 2,
        }
    }

    fn apply(&mut self, value: f64, change: f64, change_percent: f64, at: DateTime<Utc>) {
        self.price = value;
        self.change = change;
        self.change_percent = change_percent;
        self.last_updated = at;
    }
}

/// Aggregate market index level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketIndex {
    /// Index symbol, e.g. `SPX`.
    pub symbol: String,
    /// Index name.
    pub name: String,
    /// Geographic region the index tracks.
    pub region: String,
    value: f64,
    change: f64,
    change_percent: f64,
    last_updated: DateTime<Utc>,
}

impl MarketIndex {
    /// Create an index quote; the percent change is derived from `value` and `change`.
    pub fn new(symbol: &str, name: &str, value: f64, change: f64, region: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            region: region.to_string(),
            value,
            change,
            change_percent: initial_percent(value, change),
            last_updated: Utc::now(),
        }
    }
}

impl Quoted for MarketIndex {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn change(&self) -> f64 {
        self.change
    }

    fn change_percent(&self) -> f64 {
        self.change_percent
    }

    fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    fn profile(&self) -> TickProfile {
        TickProfile {
            volatility_factor: INDEX_VOLATILITY,
            floor: PRICE_FLOOR,
            decimals: 2,
        }
    }

    fn apply(&mut self, value: f64, change: f64, change_percent: f64, at: DateTime<Utc>) {
        self.value = value;
        self.change = change;
        self.change_percent = change_percent;
        self.last_updated = at;
    }
}

/// Foreign-exchange rate for a currency pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Pair symbol, e.g. `EUR/USD`.
    pub symbol: String,
    /// Base currency code.
    pub from_currency: String,
    /// Quote currency code.
    pub to_currency: String,
    rate: f64,
    change: f64,
    change_percent: f64,
    last_updated: DateTime<Utc>,
}

impl CurrencyPair {
    /// Create a currency pair; the symbol is built as `FROM/TO`.
    pub fn new(from_currency: &str, to_currency: &str, rate: f64, change: f64) -> Self {
        Self {
            symbol: format!("{}/{}", from_currency, to_currency),
            from_currency: from_currency.to_string(),
            to_currency: to_currency.to_string(),
            rate,
            change,
            change_percent: initial_percent(rate, change),
            last_updated: Utc::now(),
        }
    }
}

impl Quoted for CurrencyPair {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn value(&self) -> f64 {
        self.rate
    }

    fn change(&self) -> f64 {
        self.change
    }

    fn change_percent(&self) -> f64 {
        self.change_percent
    }

    fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    fn profile(&self) -> TickProfile {
        TickProfile {
            volatility_factor: CURRENCY_VOLATILITY,
            floor: RATE_FLOOR,
            decimals: 4,
        }
    }

    fn apply(&mut self, value: f64, change: f64, change_percent: f64, at: DateTime<Utc>) {
        self.rate = value;
        self.change = change;
        self.change_percent = change_percent;
        self.last_updated = at;
    }
}

/// Cryptocurrency quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cryptocurrency {
    /// Coin symbol, e.g. `BTC`.
    pub symbol: String,
    /// Coin name.
    pub name: String,
    /// Market capitalization in USD.
    pub market_cap: u64,
    /// 24h trade volume in USD.
    pub volume: u64,
    /// Circulating supply in coins.
    pub supply: u64,
    price: f64,
    change: f64,
    change_percent: f64,
    last_updated: DateTime<Utc>,
}

impl Cryptocurrency {
    /// Create a crypto quote; the percent change is derived from `price` and `change`.
    pub fn new(
        symbol: &str,
        name: &str,
        price: f64,
        change: f64,
        market_cap: u64,
        volume: u64,
        supply: u64,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            market_cap,
            volume,
            supply,
            price,
            change,
            change_percent: initial_percent(price, change),
            last_updated: Utc::now(),
        }
    }
}

impl Quoted for Cryptocurrency {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn value(&self) -> f64 {
        self.price
    }

    fn change(&self) -> f64 {
        self.change
    }

    fn change_percent(&self) -> f64 {
        self.change_percent
    }

    fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    fn profile(&self) -> TickProfile {
        // Large caps move roughly half as hard as the long tail.
        let volatility_factor = match self.symbol.as_str() {
            "BTC" | "ETH" => LARGE_CAP_CRYPTO_VOLATILITY,
            _ => CRYPTO_VOLATILITY,
        };
        TickProfile {
            volatility_factor,
            floor: CRYPTO_FLOOR,
            decimals: if self.price < 1.0 { 4 } else { 2 },
        }
    }

    fn apply(&mut self, value: f64, change: f64, change_percent: f64, at: DateTime<Utc>) {
        self.price = value;
        self.change = change;
        self.change_percent = change_percent;
        self.last_updated = at;
    }
}

/// Market news headline. Immutable; never ticked by an updater.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    /// Stable identifier within the feed.
    pub id: String,
    /// Headline text.
    pub title: String,
    /// One-paragraph summary.
    pub summary: String,
    /// Publishing outlet.
    pub source: String,
    /// Link to the full story.
    pub url: String,
    /// Optional illustration URL.
    pub image_url: Option<String>,
    /// Publication timestamp.
    pub published_at: DateTime<Utc>,
    /// Symbols the story relates to (empty when none).
    pub related_symbols: Vec<String>,
}
