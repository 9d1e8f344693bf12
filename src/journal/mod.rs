//! Session journal: append-only line-delimited JSON for the showcase's
//! state transitions.
//!
//! Each line is a self-contained JSON object, assembled in memory and
//! written atomically via `write_all` so a tailing process never sees a
//! partial line. Journaling is strictly best-effort: a write failure
//! flips the journal into discard mode and the showcase carries on —
//! the view-model must never crash for logging.

#![allow(missing_docs)]

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::DecorKind;
use crate::core::errors::{Result, ShowcaseError};

/// Journal event types matching the showcase transition model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JournalEvent {
    SessionStart,
    EraSelected,
    DetailOpened,
    DetailClosed,
    BatchRegenerated,
}

/// A single journal entry — all fields optional except `ts` and `event`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// ISO 8601 UTC timestamp.
    pub ts: String,
    /// Event type identifier.
    pub event: JournalEvent,
    /// Era involved in the transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub era_id: Option<usize>,
    /// Decorative kind for detail events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<DecorKind>,
    /// Fact index for card detail events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fact_index: Option<usize>,
    /// Batch size for regeneration events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Freeform details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl JournalEntry {
    /// Create a new entry stamped with the current UTC time.
    #[must_use]
    pub fn new(event: JournalEvent) -> Self {
        Self {
            ts: format_utc_now(),
            event,
            era_id: None,
            kind: None,
            fact_index: None,
            count: None,
            details: None,
        }
    }
}

/// Best-effort JSONL sink over any writer.
pub struct Journal {
    writer: Option<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for Journal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Journal")
            .field("discarding", &self.writer.is_none())
            .finish()
    }
}

impl Journal {
    /// Journal writing to an arbitrary sink.
    #[must_use]
    pub fn to_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Some(Box::new(writer)),
        }
    }

    /// Journal appending to a file, created if absent.
    pub fn to_file(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| ShowcaseError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::to_writer(file))
    }

    /// Whether writes are currently being discarded.
    #[must_use]
    pub fn is_discarding(&self) -> bool {
        self.writer.is_none()
    }

    /// Write one entry as one atomic JSONL line. Never fails; the first
    /// serialization or write error degrades the journal to discard.
    pub fn log(&mut self, entry: &JournalEntry) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        let Ok(mut line) = serde_json::to_string(entry) else {
            self.writer = None;
            return;
        };
        line.push('\n');
        if writer.write_all(line.as_bytes()).is_err() {
            self.writer = None;
        }
    }
}

fn format_utc_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
