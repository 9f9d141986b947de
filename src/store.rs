//! Persistent record of already processed message IDs

use crate::error::Result;
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Set of message IDs that have already been turned into records
pub trait ProcessedIds {
    fn contains(&self, id: &str) -> bool;

    /// Remember `id`; persistent stores write it through immediately
    fn insert(&mut self, id: &str) -> Result<()>;
}

impl ProcessedIds for HashSet<String> {
    fn contains(&self, id: &str) -> bool {
        Self::contains(self, id)
    }

    fn insert(&mut self, id: &str) -> Result<()> {
        Self::insert(self, id.to_string());
        Ok(())
    }
}

/// Newline-delimited log file of processed message IDs
#[derive(Debug)]
pub struct ProcessedLog {
    path: PathBuf,
    ids: HashSet<String>,
}

impl ProcessedLog {
    /// Load the log at `path`; a missing file is an empty log
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let ids = match fs::read_to_string(&path) {
            Ok(content) => content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
            Err(e) if e.kind() == ErrorKind::NotFound => HashSet::new(),
            Err(e) => return Err(e.into()),
        };

        debug!("Loaded {} processed ids from {}", ids.len(), path.display());
        Ok(Self { path, ids })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl ProcessedIds for ProcessedLog {
    fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    fn insert(&mut self, id: &str) -> Result<()> {
        if !self.ids.insert(id.to_string()) {
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{id}")?;

        debug!("Added {} to processed log", id);
        Ok(())
    }
}
