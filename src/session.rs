//! In-memory session store
//!
//! Keeps the passwords generated during one session, in insertion order,
//! and derives aggregate statistics from them on demand. Nothing is
//! persisted: dropping the [`Session`] discards every entry.

use std::fmt::{self, Write};

use chrono::{DateTime, Local};
use secrecy::{ExposeSecret, SecretString};

use crate::config::{DATE_FORMAT, Settings};
use crate::evaluator::score;
use crate::types::StrengthResult;

/// Unique identifier of a stored entry.
///
/// Derived from the creation time in milliseconds, bumped when two entries
/// land in the same millisecond so ids stay strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for EntryId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A generated password and its metadata.
#[derive(Debug)]
pub struct PasswordEntry {
    pub id: EntryId,
    pub label: String,
    pub value: SecretString,
    pub strength: StrengthResult,
    pub created_at: String,
}

impl PasswordEntry {
    /// Length of the stored password in characters.
    pub fn char_count(&self) -> usize {
        self.value.expose_secret().chars().count()
    }
}

/// Aggregate figures over the current session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub total: usize,
    /// Entries scoring 70 or more.
    pub strong_or_better: usize,
    /// Mean password length, rounded; `0` when the session is empty.
    pub average_length: usize,
}

/// Ordered list of the passwords generated in this session.
#[derive(Debug)]
pub struct Session {
    entries: Vec<PasswordEntry>,
    last_id: Option<EntryId>,
    default_label: String,
    date_format: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_settings(&Settings::default())
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session using the placeholder label and date format
    /// from `settings`.
    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            entries: Vec::new(),
            last_id: None,
            default_label: settings.default_label.clone(),
            date_format: settings.date_format.clone(),
        }
    }

    /// Scores `password` and stores it under `label`.
    ///
    /// A missing or blank label is replaced by the placeholder. Returns the
    /// stored entry.
    pub fn append(&mut self, label: Option<&str>, password: SecretString) -> &PasswordEntry {
        self.append_at(label, password, Local::now())
    }

    /// Same as [`Session::append`] with an explicit creation time.
    pub fn append_at(
        &mut self,
        label: Option<&str>,
        password: SecretString,
        now: DateTime<Local>,
    ) -> &PasswordEntry {
        let id = self.next_id(now);
        let label = match label.map(str::trim) {
            Some(l) if !l.is_empty() => l.to_string(),
            _ => self.default_label.clone(),
        };
        let entry = PasswordEntry {
            id,
            label,
            strength: score(&password),
            value: password,
            created_at: self.format_date(now),
        };

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Stored entry {} ({}, score {})",
            entry.id,
            entry.label,
            entry.strength.score
        );

        let index = self.entries.len();
        self.entries.push(entry);
        &self.entries[index]
    }

    /// Formats `now` with the session's date format, falling back to
    /// [`DATE_FORMAT`] when the configured one is not a valid strftime string.
    fn format_date(&self, now: DateTime<Local>) -> String {
        let mut out = String::new();
        if write!(out, "{}", now.format(&self.date_format)).is_ok() {
            return out;
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(
            "Invalid date format {:?}, using {:?}",
            self.date_format,
            DATE_FORMAT
        );

        now.format(DATE_FORMAT).to_string()
    }

    fn next_id(&mut self, now: DateTime<Local>) -> EntryId {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = match self.last_id {
            Some(EntryId(last)) if millis <= last => EntryId(last + 1),
            _ => EntryId(millis),
        };
        self.last_id = Some(id);
        id
    }

    /// Removes the entry with `id`. Unknown ids are ignored.
    ///
    /// # Returns
    /// `true` if an entry was removed.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;

        #[cfg(feature = "tracing")]
        {
            if removed {
                tracing::info!("Removed entry {}", id);
            } else {
                tracing::debug!("Remove ignored: no entry {}", id);
            }
        }

        removed
    }

    /// Entries in insertion order.
    pub fn list(&self) -> &[PasswordEntry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&PasswordEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> SessionStats {
        let total = self.entries.len();
        if total == 0 {
            return SessionStats::default();
        }

        let strong_or_better = self
            .entries
            .iter()
            .filter(|e| e.strength.is_strong_or_better())
            .count();
        let total_length: usize = self.entries.iter().map(PasswordEntry::char_count).sum();
        let average_length = (total_length as f64 / total as f64).round() as usize;

        SessionStats {
            total,
            strong_or_better,
            average_length,
        }
    }
}
