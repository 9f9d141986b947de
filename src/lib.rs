// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! GOBI Acknowledgement Extractor
//!
//! Turns the plain text of GOBI "selection acknowledgement" emails into
//! book order records and appends them to a CSV log.
//!
//! # Layers
//!
//! - [`segment`] splits a body into one chunk per selection
//! - [`ExtractedFields`] and [`resolve_price`] read a chunk
//! - [`process_email_body`] assembles [`BookRecord`]s
//! - [`Pipeline`] drives a [`MailSource`] into a [`RecordSink`], skipping
//!   IDs already in a [`ProcessedIds`] store
//!
//! Extraction never fails: missing fields are empty, an unknown price is
//! `N/A`, and selections without a title are dropped.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use gobi_acks::process_email_body;
//!
//! let body = "Header\nSELECTION ACKNOWLEDGEMENT\nTitle: Foo\nUS List: $10.00 USD\n";
//! let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let records = process_email_body(body, date);
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].price.as_str(), "10.00");
//! ```

mod config;
mod error;
mod extracted;
mod parser;
mod pipeline;
mod price;
mod segment;
mod sink;
mod source;
mod store;
mod types;

pub use config::{AckConfig, DEFAULT_SENDER, DEFAULT_SUBJECT};
pub use error::{AckError, Result};
pub use extracted::{ExtractedFields, Field, extract_field, extract_labeled};
pub use parser::{extract_record, parse_message, process_email_body};
pub use pipeline::{Pipeline, RunSummary};
pub use price::{PriceTable, extract_us_list_price, resolve_price};
pub use segment::{SELECTION_DELIMITER, segment};
pub use sink::{CsvSink, RecordSink};
pub use source::{AckFilter, DirectorySource, MailSource, maildir_unique_name};
pub use store::{ProcessedIds, ProcessedLog};
pub use types::*;
