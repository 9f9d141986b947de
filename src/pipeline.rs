//! Driver tying a mail source, the processed-ID store and a record sink together

use crate::error::Result;
use crate::parser::process_email_body;
use crate::sink::RecordSink;
use crate::source::{AckFilter, MailSource};
use crate::store::ProcessedIds;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Counts from one pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Messages supplied by the source
    pub seen: usize,

    /// Messages passing the sender and subject filter
    pub matched: usize,

    /// Matching messages skipped because their ID was already logged
    pub skipped_processed: usize,

    /// Messages extracted during this run
    pub processed: usize,

    /// Records written to the sink
    pub records: usize,
}

/// Processes acknowledgement messages one at a time
#[derive(Debug, Clone)]
pub struct Pipeline {
    filter: AckFilter,
}

impl Pipeline {
    #[must_use]
    pub const fn new(filter: AckFilter) -> Self {
        Self { filter }
    }

    /// Run every unseen acknowledgement from `source` into `sink`
    ///
    /// A message ID is only recorded after all of its records were written
    /// and the sink flushed, so a failed write leaves it eligible for the
    /// next run.
    pub fn run(
        &self,
        source: &mut impl MailSource,
        store: &mut impl ProcessedIds,
        sink: &mut impl RecordSink,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for message in source.messages()? {
            summary.seen += 1;

            if !self.filter.matches(&message) {
                debug!(
                    "Ignoring message {} from {} with subject {:?}",
                    message.id, message.from.address, message.subject
                );
                continue;
            }
            summary.matched += 1;

            info!(
                "Looking at message {} from {} on {}",
                message.id, message.from.address, message.received
            );

            if store.contains(message.id.as_str()) {
                debug!("Message {} already processed", message.id);
                summary.skipped_processed += 1;
                continue;
            }

            let records = process_email_body(&message.body, message.received);
            info!("Found {} book entries in {}", records.len(), message.id);

            for record in &records {
                sink.write_record(record)?;
                debug!("Wrote record for {:?}", record.title);
            }
            sink.flush()?;

            store.insert(message.id.as_str())?;
            summary.processed += 1;
            summary.records += records.len();
        }

        if summary.seen > 0 && summary.matched == 0 {
            warn!(
                "None of {} messages matched sender {:?} and subject {:?}",
                summary.seen, self.filter.sender, self.filter.subject
            );
        }

        info!(
            "Run complete: {} processed, {} records, {} already seen",
            summary.processed, summary.records, summary.skipped_processed
        );
        Ok(summary)
    }
}
