//! Core types for acknowledgement messages and book records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Column names of the CSV log, in output order
pub const CSV_COLUMNS: [&str; 9] = [
    "Date",
    "Title",
    "Author",
    "Binding",
    "Series",
    "Supplier",
    "Purchase Option",
    "Price",
    "Fund",
];

/// Serialized form of a price that could not be determined
pub const PRICE_UNRESOLVED: &str = "N/A";

/// An acknowledgement email as handed over by a mail source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckMessage {
    /// Unique, opaque message identifier
    pub id: MessageId,

    /// Sender address
    pub from: EmailAddress,

    /// Subject line as received
    pub subject: String,

    /// Day the message was received
    pub received: NaiveDate,

    /// Plain text body
    pub body: String,
}

/// Message ID wrapper type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MessageId(pub String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build a stable ID for a message that carries no Message-ID header
    #[must_use]
    pub fn synthetic(key: &str) -> Self {
        Self(format!("<synthetic-{key}@local>"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Email address with optional display name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailAddress {
    /// Display name (e.g., "GOBI Library Solutions")
    pub name: Option<String>,

    /// Email address (e.g., "DoNotReply@Ybp.com")
    pub address: String,
}

impl EmailAddress {
    /// Parse an email address from a string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        // Try to match "Name <email@domain.com>" format
        if let Some(start) = s.find('<')
            && let Some(end) = s.find('>')
            && start < end
        {
            let name_part = s[..start].trim().trim_matches('"');
            let address = s[start + 1..end].trim().to_string();

            if address.contains('@') {
                return Some(Self {
                    name: if name_part.is_empty() {
                        None
                    } else {
                        Some(name_part.to_string())
                    },
                    address,
                });
            }
        }

        if s.contains('@') && !s.contains(char::is_whitespace) {
            return Some(Self {
                name: None,
                address: s.to_string(),
            });
        }

        None
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} <{}>", name, self.address),
            None => write!(f, "{}", self.address),
        }
    }
}

/// Outcome of price resolution for one selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Price {
    /// Taken from the `US List:` line
    Flat(String),

    /// Looked up in the supplier / purchase option table
    Table(String),

    /// Neither strategy produced a price
    Unresolved,
}

impl Price {
    /// The decimal string, or `N/A` when unresolved
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Flat(value) | Self::Table(value) => value,
            Self::Unresolved => PRICE_UNRESOLVED,
        }
    }

    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One book order extracted from a selection chunk
///
/// Field order matches [`CSV_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,

    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Author")]
    pub author: String,

    #[serde(rename = "Binding")]
    pub binding: String,

    /// Value of the `Series Title` label
    #[serde(rename = "Series")]
    pub series: String,

    #[serde(rename = "Supplier")]
    pub supplier: String,

    #[serde(rename = "Purchase Option")]
    pub purchase_option: String,

    #[serde(rename = "Price")]
    pub price: Price,

    #[serde(rename = "Fund")]
    pub fund: String,
}

impl BookRecord {
    /// Row values in column order, as written to the CSV log
    #[must_use]
    pub fn to_row(&self) -> [String; 9] {
        [
            self.date.format("%Y-%m-%d").to_string(),
            self.title.clone(),
            self.author.clone(),
            self.binding.clone(),
            self.series.clone(),
            self.supplier.clone(),
            self.purchase_option.clone(),
            self.price.to_string(),
            self.fund.clone(),
        ]
    }
}
