//! Mail sources and acknowledgement filtering

use crate::error::Result;
use crate::parser::parse_message;
use crate::types::AckMessage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Supplies messages to the pipeline
pub trait MailSource {
    /// Return every message currently available, oldest first where known
    fn messages(&mut self) -> Result<Vec<AckMessage>>;
}

impl MailSource for Vec<AckMessage> {
    fn messages(&mut self) -> Result<Vec<AckMessage>> {
        Ok(self.clone())
    }
}

/// Reads raw RFC 5322 files from a directory
///
/// Maildir layouts are supported: when `cur/` or `new/` exist their files
/// are read as well. Files that cannot be read or parsed are logged and
/// skipped.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Read and parse one message file
    ///
    /// Unreadable or unparseable files are logged and yield `None`; a mail
    /// client may move a file between listing and reading.
    #[must_use]
    pub fn read_message(path: &Path) -> Option<AckMessage> {
        let raw = match fs::read(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Skipping unreadable {}: {}", path.display(), e);
                return None;
            }
        };
        let key = path
            .file_name()
            .and_then(|name| name.to_str())
            .map_or_else(
                || "unnamed".to_string(),
                |name| maildir_unique_name(name).to_string(),
            );

        match parse_message(&raw, &key) {
            Ok(message) => Some(message),
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                None
            }
        }
    }

    fn message_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for dir in [
            self.root.clone(),
            self.root.join("cur"),
            self.root.join("new"),
        ] {
            if !dir.is_dir() {
                continue;
            }
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_file() {
                    files.push(path);
                }
            }
        }

        files.sort();
        Ok(files)
    }
}

impl MailSource for DirectorySource {
    fn messages(&mut self) -> Result<Vec<AckMessage>> {
        let messages: Vec<AckMessage> = self
            .message_files()?
            .iter()
            .filter_map(|path| Self::read_message(path))
            .collect();

        debug!(
            "Read {} messages from {}",
            messages.len(),
            self.root.display()
        );
        Ok(messages)
    }
}

/// Strip the Maildir info suffix (`:2,S` and friends) from a file name
///
/// Mail clients rewrite the suffix when flags change, so only the unique
/// part identifies the message across runs.
#[must_use]
pub fn maildir_unique_name(file_name: &str) -> &str {
    file_name.split(':').next().unwrap_or(file_name)
}

/// Selects the vendor's acknowledgement messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckFilter {
    /// Exact sender address
    pub sender: String,

    /// Exact subject line; GOBI appends the recipient address, so this
    /// has to be set per account
    pub subject: String,
}

impl AckFilter {
    pub fn new(sender: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            subject: subject.into(),
        }
    }

    #[must_use]
    pub fn matches(&self, message: &AckMessage) -> bool {
        message.from.address == self.sender && message.subject == self.subject
    }
}
