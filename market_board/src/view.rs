//! Snapshot and news rendering.
//!
//! Pure writers: every function renders into a `std::io::Write` target so the
//! output can be captured in tests. Formatting goes through the shared
//! helpers in `market_common::fmt`.

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use market_common::fmt::{format_abbrev, format_currency, format_percent, format_relative};
use market_common::instrument::{NewsItem, Stock};
use market_common::{AssetClass, Quoted, Result};

/// Render one snapshot, either as aligned rows or as a JSON line per entity.
pub fn render_snapshot<Q, W>(out: &mut W, class: AssetClass, entities: &[Q], json: bool) -> Result<()>
where
    Q: Quoted + Serialize,
    W: Write,
{
    if json {
        for entity in entities {
            writeln!(out, "{}", serde_json::to_string(entity)?)?;
        }
        return Ok(());
    }

    let now = Utc::now();
    writeln!(out, "--- {} ---", class)?;
    for entity in entities {
        let decimals = entity.profile().decimals as usize;
        writeln!(
            out,
            "{:<8} {:>14.dec$} {:>+12.dec$} {:>9}  {}",
            entity.symbol(),
            entity.value(),
            entity.change(),
            format_percent(entity.change_percent()),
            format_relative(entity.last_updated(), now),
            dec = decimals,
        )?;
    }
    Ok(())
}

/// Render the seeded stock overview: price, move, and size figures.
pub fn render_overview<W: Write>(out: &mut W, stocks: &[Stock]) -> Result<()> {
    writeln!(out, "--- Overview ---")?;
    for stock in stocks {
        writeln!(
            out,
            "{:<6} {:<20} {:>11} {:>9}  vol {:>8}  cap {:>8}",
            stock.symbol(),
            stock.name,
            format_currency(stock.value()),
            format_percent(stock.change_percent()),
            format_abbrev(stock.volume as f64),
            format_abbrev(stock.market_cap as f64),
        )?;
    }
    Ok(())
}

/// Render the news feed with relative publication ages.
pub fn render_news<W: Write>(out: &mut W, items: &[NewsItem]) -> Result<()> {
    let now = Utc::now();
    writeln!(out, "--- News ---")?;
    for item in items {
        let related = if item.related_symbols.is_empty() {
            String::new()
        } else {
            format!(" [{}]", item.related_symbols.join(", "))
        };
        writeln!(
            out,
            "{:>9}  {} — {}{}",
            format_relative(item.published_at, now),
            item.source,
            item.title,
            related,
        )?;
    }
    Ok(())
}

/// Render a historical series preview as a single oldest-first line.
pub fn render_series<W: Write>(out: &mut W, symbol: &str, series: &[f64]) -> Result<()> {
    let rendered: Vec<String> = series.iter().map(|p| format!("{:.2}", p)).collect();
    writeln!(out, "{} backfill ({} points): {}", symbol, series.len(), rendered.join(" "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_common::seed;

    #[test]
    fn table_rows_carry_symbol_and_signed_percent() {
        let mut buf = Vec::new();
        render_snapshot(&mut buf, AssetClass::Stocks, &seed::stocks(), false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("--- Stocks ---"));
        assert!(text.contains("AAPL"));
        assert!(text.contains("+0.69%"));
        assert!(text.contains("-1.35%"));
    }

    #[test]
    fn json_mode_emits_one_object_per_entity() {
        let mut buf = Vec::new();
        render_snapshot(&mut buf, AssetClass::Currencies, &seed::currency_pairs(), true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("symbol").is_some());
            assert!(value.get("change_percent").is_some());
        }
    }

    #[test]
    fn overview_abbreviates_size_figures() {
        let mut buf = Vec::new();
        render_overview(&mut buf, &seed::stocks()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Apple Inc."));
        assert!(text.contains("$187.32"));
        assert!(text.contains("$2.92T"));
        assert!(text.contains("$58.39M"));
    }

    #[test]
    fn news_rows_list_related_symbols() {
        let mut buf = Vec::new();
        render_news(&mut buf, &seed::news(Utc::now())).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Financial Times"));
        assert!(text.contains("[SPX, DJI]"));
    }

    #[test]
    fn series_line_reports_point_count() {
        let mut buf = Vec::new();
        render_series(&mut buf, "AAPL", &[187.32, 188.01, 187.56]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("AAPL backfill (3 points):"));
    }
}
