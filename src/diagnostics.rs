//! Diagnostic record of every fetch failure.

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use tracing::warn;

const DEFAULT_CAPACITY: usize = 64;

/// A single diagnostic line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEntry {
    pub recorded_at: DateTime<Local>,
    pub message: String,
}

/// Bounded log of free-text diagnostic lines.
///
/// Every line is also emitted through `tracing` so it ends up in the log file.
#[derive(Debug, Clone)]
pub struct DiagnosticLog {
    entries: VecDeque<DiagnosticEntry>,
    capacity: usize,
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record a line, evicting the oldest one when full
    pub fn record(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{}", message);

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(DiagnosticEntry {
            recorded_at: Local::now(),
            message,
        });
    }

    pub fn entries(&self) -> impl Iterator<Item = &DiagnosticEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&DiagnosticEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
