use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::Transaction;

/// Built-in demo feed: one income row, seven expense rows.
pub(crate) const SAMPLE_FEED: &str = "\
Date,Description,Category,Amount
2026-01-12,Starbucks,Coffee,-7.50
2026-01-12,Coinbase,Investment,-200.00
2026-01-13,Uber Eats,Dining,-45.20
2026-01-14,Shell Station,Gas,-50.00
2026-01-15,Netflix,Subscription,-18.99
2026-01-15,Direct Deposit,Income,+2500.00
2026-01-16,Apple Store,Tech,-1200.00
2026-01-16,Steam,Entertainment,-60.00";

pub(crate) struct CsvFeed;

impl CsvFeed {
    /// Parse raw feed text into transactions.
    ///
    /// The first record is the header row; header names are lowercased and
    /// matched to transaction fields by name, so column order is free. A
    /// header that is absent or misspelled is not an error: the field stays
    /// at its empty default for every row. Quoted fields (embedded commas)
    /// are handled by the reader.
    pub(crate) fn parse(raw: &str) -> Result<Vec<Transaction>> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(raw.trim().as_bytes());

        let headers: Vec<String> = rdr
            .headers()
            .context("Failed to read CSV header row")?
            .iter()
            .map(|h| h.to_ascii_lowercase())
            .collect();
        let column = |name: &str| headers.iter().position(|h| h == name);
        let date_col = column("date");
        let description_col = column("description");
        let category_col = column("category");
        let amount_col = column("amount");

        let mut transactions = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            let record = record.with_context(|| format!("Row {}: failed to read", i + 1))?;
            if record.iter().all(|field| field.is_empty()) {
                continue;
            }

            let field = |col: Option<usize>| {
                col.and_then(|c| record.get(c)).unwrap_or("").to_string()
            };
            let amount = match amount_col.and_then(|c| record.get(c)) {
                Some(raw_amount) => parse_amount(raw_amount)
                    .with_context(|| format!("Row {}: failed to parse amount", i + 1))?,
                None => Decimal::ZERO,
            };

            transactions.push(Transaction {
                date: field(date_col),
                description: field(description_col),
                category: field(category_col),
                amount,
            });
        }

        Ok(transactions)
    }
}

/// Parse a feed amount. Feeds encode inflows as `+2500.00`, so a leading
/// `+` is stripped before conversion. Currency symbols and thousands
/// separators are not handled.
fn parse_amount(raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let cleaned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    Decimal::from_str(cleaned).with_context(|| format!("'{raw}' is not a decimal amount"))
}

#[cfg(test)]
#[path = "csv_feed_tests.rs"]
mod tests;
