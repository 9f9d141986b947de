//! Record sinks: where extracted book records end up

use crate::error::Result;
use crate::types::{BookRecord, CSV_COLUMNS};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Consumes extracted records
pub trait RecordSink {
    fn write_record(&mut self, record: &BookRecord) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl RecordSink for Vec<BookRecord> {
    fn write_record(&mut self, record: &BookRecord) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

/// Writes records as CSV rows with the fixed nine-column layout
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    /// Open `path` for appending, writing the header row only if the file
    /// is new or empty
    pub fn append(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let is_empty = file.metadata()?.len() == 0;

        debug!(
            "Appending records to {} (header: {})",
            path.display(),
            is_empty
        );
        Self::new(file, is_empty)
    }
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W, write_header: bool) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        if write_header {
            writer.write_record(CSV_COLUMNS)?;
            writer.flush()?;
        }

        Ok(Self { writer })
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_record(&mut self, record: &BookRecord) -> Result<()> {
        self.writer.write_record(record.to_row())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
