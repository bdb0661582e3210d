use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::models::{AuditReport, HistoryEntry};

/// Most entries kept; recording a 51st evicts the oldest.
pub(crate) const HISTORY_CAP: usize = 50;

/// Capped, most-recent-first list of past audits, mirrored to one JSON
/// file. The store owns its list exclusively; `record`, `clear` (and the
/// load performed at open) are the only mutators, each persisting
/// synchronously before returning.
pub(crate) struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Open the store at `path`, loading whatever is persisted there. A
    /// missing file is an empty history. A file that cannot be read or
    /// parsed is discarded: the failure is logged, never surfaced.
    pub(crate) fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_entries(&path);
        Self { path, entries }
    }

    pub(crate) fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record one audit: fresh id and timestamp, newest first, truncated to
    /// the cap, then the whole list is rewritten to disk.
    pub(crate) fn record(&mut self, report: AuditReport, raw_csv: &str) -> Result<&HistoryEntry> {
        let entry = HistoryEntry::new(report, raw_csv.to_string());
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAP);
        self.persist()?;
        Ok(&self.entries[0])
    }

    /// Drop every entry and remove the file. Callers gate this behind an
    /// explicit user confirmation.
    pub(crate) fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        if self.path.exists() {
            std::fs::remove_file(&self.path).with_context(|| {
                format!("Failed to remove history file: {}", self.path.display())
            })?;
        }
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)
            .context("Failed to serialize history")?;
        std::fs::write(&self.path, json).with_context(|| {
            format!("Failed to write history file: {}", self.path.display())
        })?;
        Ok(())
    }
}

fn load_entries(path: &Path) -> Vec<HistoryEntry> {
    if !path.exists() {
        return Vec::new();
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "could not read history file, starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "history file is corrupt, starting empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests;
