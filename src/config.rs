//! Pipeline configuration

use crate::error::{AckError, Result};
use crate::source::AckFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Sender address of GOBI acknowledgement emails
pub const DEFAULT_SENDER: &str = "DoNotReply@Ybp.com";

/// Subject prefix of GOBI acknowledgement emails
///
/// Real messages carry the recipient address after this prefix, and the
/// filter matches the subject exactly, so `subject` has to be configured
/// per account.
pub const DEFAULT_SUBJECT: &str = "GOBI Selection Acknowledgements";

/// Settings for one extraction run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AckConfig {
    /// Directory holding raw messages (plain or Maildir layout)
    pub mailbox: PathBuf,

    /// CSV log that records are appended to
    pub csv_path: PathBuf,

    /// Newline-delimited log of processed message IDs
    pub processed_log: PathBuf,

    /// Only messages from this exact address are processed
    pub sender: String,

    /// Only messages with this exact subject are processed, e.g.
    /// `GOBI Selection Acknowledgements selector@example.edu`
    pub subject: String,
}

impl Default for AckConfig {
    fn default() -> Self {
        Self {
            mailbox: PathBuf::from("mail"),
            csv_path: PathBuf::from("books_ordered.csv"),
            processed_log: PathBuf::from("processed_emails.log"),
            sender: DEFAULT_SENDER.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
        }
    }
}

impl AckConfig {
    /// Load configuration from a JSON file; missing keys take defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| AckError::Config(format!("{}: {e}", path.display())))
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| AckError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    #[must_use]
    pub fn filter(&self) -> AckFilter {
        AckFilter::new(&self.sender, &self.subject)
    }
}
