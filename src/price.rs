//! Price resolution for selection chunks
//!
//! Print selections carry a `US List:` line. Ebook selections instead list
//! every purchase option in a tab-separated table, and the price is the row
//! matching the chosen supplier and purchase option.

use crate::types::Price;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

static US_LIST_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"US List:\s*\$?(\d+\.\d{2})\s*USD").unwrap());

static TABLE_HEADER_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"Supplier\s+Purchase Option\s+List Price").unwrap()
});

static TABLE_PRICE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^(\d+\.\d{2})\s+USD$").unwrap());

/// Find the flat `US List: $12.34 USD` price in a chunk
#[must_use]
pub fn extract_us_list_price(chunk: &str) -> Option<String> {
    US_LIST_REGEX
        .captures(chunk)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// List prices keyed by supplier and purchase option
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceTable {
    entries: HashMap<(String, String), String>,
}

impl PriceTable {
    /// Parse the price table that follows the
    /// `Supplier  Purchase Option  List Price` header
    ///
    /// Rows with fewer than three tab-separated columns or a price not
    /// shaped like `12.34 USD` are ignored. A repeated key keeps the last row.
    #[must_use]
    pub fn parse(chunk: &str) -> Self {
        let mut table = Self::default();

        let Some(header) = TABLE_HEADER_REGEX.find(chunk) else {
            return table;
        };

        for line in chunk[header.end()..].trim().split('\n') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let columns: Vec<&str> = line.split('\t').collect();
            if columns.len() < 3 {
                continue;
            }

            let supplier = columns[0].trim().replace(['+', '-'], "");
            let purchase_option = columns[1]
                .trim()
                .split(" |")
                .next()
                .unwrap_or_default()
                .to_string();

            if let Some(caps) = TABLE_PRICE_REGEX.captures(columns[2].trim()) {
                table
                    .entries
                    .insert((supplier, purchase_option), caps[1].to_string());
            } else {
                debug!("Ignoring price table row with malformed price: {line}");
            }
        }

        table
    }

    #[must_use]
    pub fn get(&self, supplier: &str, purchase_option: &str) -> Option<&str> {
        self.entries
            .get(&(supplier.to_string(), purchase_option.to_string()))
            .map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve the price of one selection
///
/// The `US List:` price wins whenever present; otherwise the table row for
/// (`supplier`, `purchase_option`) is used.
#[must_use]
pub fn resolve_price(chunk: &str, supplier: &str, purchase_option: &str) -> Price {
    if let Some(price) = extract_us_list_price(chunk) {
        return Price::Flat(price);
    }

    PriceTable::parse(chunk)
        .get(supplier, purchase_option)
        .map_or(Price::Unresolved, |price| Price::Table(price.to_string()))
}
