//! Seed collections the updaters start from.
//!
//! Each function builds a fresh owned collection, so callers get explicit
//! configuration instead of shared module-level state. Values are a fixed
//! snapshot of large-cap names; they only matter as plausible starting points
//! for the random walk.

use chrono::{DateTime, Duration, Utc};

use crate::instrument::{Cryptocurrency, CurrencyPair, MarketIndex, NewsItem, Stock};

/// Large-cap US equities.
pub fn stocks() -> Vec<Stock> {
    vec![
        Stock::new("AAPL", "Apple Inc.", 187.32, 1.28, 58_394_210, 2_920_000_000_000),
        Stock::new("MSFT", "Microsoft Corp.", 402.65, 3.71, 22_154_780, 2_990_000_000_000),
        Stock::new("GOOGL", "Alphabet Inc.", 157.95, -0.63, 18_729_340, 1_980_000_000_000),
        Stock::new("AMZN", "Amazon.com Inc.", 179.83, 1.02, 27_194_600, 1_870_000_000_000),
        Stock::new("NVDA", "NVIDIA Corp.", 950.02, 18.75, 42_638_210, 2_340_000_000_000),
        Stock::new("TSLA", "Tesla Inc.", 237.47, -3.25, 67_129_580, 756_000_000_000),
        Stock::new("META", "Meta Platforms Inc.", 474.99, 5.12, 15_283_940, 1_215_000_000_000),
        Stock::new("V", "Visa Inc.", 267.80, -1.05, 8_943_760, 548_000_000_000),
    ]
}

/// Major world market indices.
pub fn indices() -> Vec<MarketIndex> {
    vec![
        MarketIndex::new("SPX", "S&P 500", 5123.41, 34.85, "United States"),
        MarketIndex::new("DJI", "Dow Jones", 38239.98, 125.68, "United States"),
        MarketIndex::new("COMP", "NASDAQ", 16780.30, 183.05, "United States"),
        MarketIndex::new("N225", "Nikkei 225", 38400.00, -156.34, "Japan"),
        MarketIndex::new("FTSE", "FTSE 100", 8127.35, 54.32, "United Kingdom"),
        MarketIndex::new("DAX", "DAX", 17850.50, -23.45, "Germany"),
    ]
}

/// Most-traded currency pairs.
pub fn currency_pairs() -> Vec<CurrencyPair> {
    vec![
        CurrencyPair::new("EUR", "USD", 1.0834, 0.0023),
        CurrencyPair::new("USD", "JPY", 151.59, -0.43),
        CurrencyPair::new("GBP", "USD", 1.2718, 0.0035),
        CurrencyPair::new("USD", "CAD", 1.3642, -0.0015),
        CurrencyPair::new("USD", "CHF", 0.9037, -0.0028),
        CurrencyPair::new("AUD", "USD", 0.6628, 0.0014),
    ]
}

/// Top cryptocurrencies by market cap.
pub fn cryptos() -> Vec<Cryptocurrency> {
    vec![
        Cryptocurrency::new("BTC", "Bitcoin", 65841.25, 1203.45, 1_293_000_000_000, 28_740_000_000, 19_637_500),
        Cryptocurrency::new("ETH", "Ethereum", 3487.92, 62.34, 418_700_000_000, 14_280_000_000, 120_100_000),
        Cryptocurrency::new("BNB", "Binance Coin", 567.39, -12.86, 87_900_000_000, 2_945_000_000, 155_000_000),
        Cryptocurrency::new("SOL", "Solana", 143.28, 8.57, 61_500_000_000, 4_720_000_000, 429_700_000),
        Cryptocurrency::new("XRP", "XRP", 0.5483, -0.0132, 29_700_000_000, 1_830_000_000, 54_200_000_000),
        Cryptocurrency::new("DOGE", "Dogecoin", 0.1245, 0.0078, 17_800_000_000, 2_640_000_000, 143_200_000_000),
        Cryptocurrency::new("ADA", "Cardano", 0.4532, -0.0085, 16_100_000_000, 492_000_000, 35_500_000_000),
        Cryptocurrency::new("AVAX", "Avalanche", 35.27, 2.34, 13_300_000_000, 1_280_000_000, 378_000_000),
    ]
}

/// Market news feed, timestamped as offsets back from `now`.
pub fn news(now: DateTime<Utc>) -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: "1".to_string(),
            title: "Federal Reserve Signals Potential Rate Cuts Later This Year".to_string(),
            summary: "The Federal Reserve indicated it may begin cutting interest rates later \
                      this year if inflation continues to moderate, according to minutes from \
                      the recent FOMC meeting."
                .to_string(),
            source: "Financial Times".to_string(),
            url: "#".to_string(),
            image_url: None,
            published_at: now - Duration::hours(2),
            related_symbols: vec!["SPX".to_string(), "DJI".to_string()],
        },
        NewsItem {
            id: "2".to_string(),
            title: "Apple Announces New AI Features for iPhone".to_string(),
            summary: "Apple unveiled new AI capabilities for the upcoming iPhone models at its \
                      annual developer conference, highlighting privacy-focused on-device \
                      processing."
                .to_string(),
            source: "Tech Insider".to_string(),
            url: "#".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1611186871348-b1ce696e52c9?q=80&w=1470&auto=format&fit=crop"
                    .to_string(),
            ),
            published_at: now - Duration::hours(5),
            related_symbols: vec!["AAPL".to_string()],
        },
        NewsItem {
            id: "3".to_string(),
            title: "NVIDIA Surpasses $2 Trillion Market Cap on AI Chip Demand".to_string(),
            summary: "NVIDIA's stock reached new heights, pushing its market cap above $2 \
                      trillion as demand for AI chips continues to exceed expectations."
                .to_string(),
            source: "Market Watch".to_string(),
            url: "#".to_string(),
            image_url: None,
            published_at: now - Duration::hours(8),
            related_symbols: vec!["NVDA".to_string()],
        },
        NewsItem {
            id: "4".to_string(),
            title: "Oil Prices Drop Amid Concerns of Slowing Global Demand".to_string(),
            summary: "Crude oil prices fell more than 2% on Thursday as investors weighed \
                      reports suggesting slower-than-expected global economic growth."
                .to_string(),
            source: "Energy Report".to_string(),
            url: "#".to_string(),
            image_url: None,
            published_at: now - Duration::hours(10),
            related_symbols: Vec::new(),
        },
        NewsItem {
            id: "5".to_string(),
            title: "Tesla Deliveries Beat Estimates Despite EV Market Slowdown".to_string(),
            summary: "Tesla reported quarterly deliveries that exceeded analyst expectations, \
                      bucking the trend of a broader slowdown in electric vehicle sales."
                .to_string(),
            source: "Auto Insights".to_string(),
            url: "#".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1617788138017-80ad40651399?q=80&w=1632&auto=format&fit=crop"
                    .to_string(),
            ),
            published_at: now - Duration::hours(12),
            related_symbols: vec!["TSLA".to_string()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::Quoted;
    use std::collections::HashSet;

    fn symbols_unique<Q: Quoted>(collection: &[Q]) -> bool {
        let set: HashSet<&str> = collection.iter().map(Quoted::symbol).collect();
        set.len() == collection.len()
    }

    #[test]
    fn collections_have_expected_shape() {
        assert_eq!(stocks().len(), 8);
        assert_eq!(indices().len(), 6);
        assert_eq!(currency_pairs().len(), 6);
        assert_eq!(cryptos().len(), 8);
        assert_eq!(news(Utc::now()).len(), 5);
    }

    #[test]
    fn symbols_are_unique_within_each_collection() {
        assert!(symbols_unique(&stocks()));
        assert!(symbols_unique(&indices()));
        assert!(symbols_unique(&currency_pairs()));
        assert!(symbols_unique(&cryptos()));
    }

    #[test]
    fn news_timestamps_precede_now() {
        let now = Utc::now();
        assert!(news(now).iter().all(|item| item.published_at < now));
    }
}
