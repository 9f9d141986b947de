//! Labeled field extraction from selection chunks

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A labeled field of a selection acknowledgement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Author,
    Binding,
    SeriesTitle,
    Supplier,
    PurchaseOption,
    Fund,
}

impl Field {
    pub const ALL: [Self; 7] = [
        Self::Title,
        Self::Author,
        Self::Binding,
        Self::SeriesTitle,
        Self::Supplier,
        Self::PurchaseOption,
        Self::Fund,
    ];

    /// Label text as it appears before the colon
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Binding => "Binding",
            Self::SeriesTitle => "Series Title",
            Self::Supplier => "Supplier",
            Self::PurchaseOption => "Purchase Option",
            Self::Fund => "Fund",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Build the `<label>: value` pattern; the value stops at the first newline or tab
fn label_pattern(label: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?s){}:\s*(.*?)\s*[\n\t]", regex::escape(label)))
}

// Compiled once per field, indexed by `Field::index`
static FIELD_PATTERNS: std::sync::LazyLock<Vec<Regex>> = std::sync::LazyLock::new(|| {
    Field::ALL
        .iter()
        .map(|field| label_pattern(field.label()).unwrap())
        .collect()
});

fn capture_value(pattern: &Regex, chunk: &str) -> String {
    pattern
        .captures(chunk)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Extract the value of a known field, or an empty string if absent
#[must_use]
pub fn extract_field(chunk: &str, field: Field) -> String {
    capture_value(&FIELD_PATTERNS[field.index()], chunk)
}

/// Extract the value following `<label>:` in `chunk`
///
/// Returns an empty string when the label is missing, when no newline or
/// tab follows the value, or when the label cannot form a valid pattern.
#[must_use]
pub fn extract_labeled(chunk: &str, label: &str) -> String {
    label_pattern(label)
        .map(|pattern| capture_value(&pattern, chunk))
        .unwrap_or_default()
}

/// Every labeled field of one selection chunk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub title: String,
    pub author: String,
    pub binding: String,
    pub series: String,
    pub supplier: String,
    pub purchase_option: String,
    pub fund: String,
}

impl ExtractedFields {
    /// Run every labeled-field pass over `chunk`
    #[must_use]
    pub fn extract(chunk: &str) -> Self {
        Self {
            title: extract_field(chunk, Field::Title),
            author: extract_field(chunk, Field::Author),
            binding: extract_field(chunk, Field::Binding),
            series: extract_field(chunk, Field::SeriesTitle),
            supplier: extract_field(chunk, Field::Supplier),
            purchase_option: extract_field(chunk, Field::PurchaseOption),
            fund: extract_field(chunk, Field::Fund),
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Binding => &self.binding,
            Field::SeriesTitle => &self.series,
            Field::Supplier => &self.supplier,
            Field::PurchaseOption => &self.purchase_option,
            Field::Fund => &self.fund,
        }
    }

    /// Check whether the chunk carries a title
    #[must_use]
    pub const fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}
