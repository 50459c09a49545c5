//! Daily journal.
//!
//! One entry per calendar date; saving again on the same date replaces the
//! earlier entry. Each entry keeps its per-line styling (color and font) so
//! rendering surfaces can reproduce it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, DatabaseError, ValidationError};
use crate::storage::{KvBackend, Repository};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Excited,
    #[default]
    Neutral,
    Love,
    Worried,
    Sleepy,
}

impl Mood {
    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "\u{1F60A}",
            Mood::Sad => "\u{1F622}",
            Mood::Angry => "\u{1F620}",
            Mood::Excited => "\u{1F973}",
            Mood::Neutral => "\u{1F610}",
            Mood::Love => "\u{1F970}",
            Mood::Worried => "\u{1F61F}",
            Mood::Sleepy => "\u{1F634}",
        }
    }
}

impl std::str::FromStr for Mood {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "angry" => Ok(Mood::Angry),
            "excited" => Ok(Mood::Excited),
            "neutral" => Ok(Mood::Neutral),
            "love" => Ok(Mood::Love),
            "worried" => Ok(Mood::Worried),
            "sleepy" => Ok(Mood::Sleepy),
            other => Err(ValidationError::InvalidValue {
                field: "mood".to_string(),
                message: format!(
                    "'{other}' is not one of happy, sad, angry, excited, neutral, love, worried, sleepy"
                ),
            }),
        }
    }
}

/// A styled line of journal text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryLine {
    pub text: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_font")]
    pub font: String,
}

fn default_color() -> String {
    "#374151".to_string()
}

fn default_font() -> String {
    "font-sans".to_string()
}

impl EntryLine {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: default_color(),
            font: default_font(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    pub mood: Mood,
    pub lines: Vec<EntryLine>,
}

pub struct JournalStore<'a> {
    repo: Repository<'a, Vec<JournalEntry>>,
}

impl<'a> JournalStore<'a> {
    pub const KEY: &'static str = "journal_entries";

    pub fn new(backend: &'a dyn KvBackend) -> Self {
        Self {
            repo: Repository::new(backend, Self::KEY),
        }
    }

    /// Save the entry for a date, replacing any earlier one. Requires a
    /// title and at least one non-blank line.
    pub fn save(
        &self,
        date: NaiveDate,
        title: &str,
        mood: Mood,
        lines: Vec<EntryLine>,
    ) -> Result<JournalEntry, CoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::Empty { field: "title" }.into());
        }
        if !lines.iter().any(|l| !l.text.trim().is_empty()) {
            return Err(ValidationError::Empty { field: "lines" }.into());
        }

        let mut entries = self.repo.get()?;
        let entry = match entries.iter_mut().find(|e| e.date == date) {
            Some(existing) => {
                existing.title = title.to_string();
                existing.mood = mood;
                existing.lines = lines;
                existing.clone()
            }
            None => {
                let entry = JournalEntry {
                    id: Uuid::new_v4().to_string(),
                    date,
                    title: title.to_string(),
                    mood,
                    lines,
                };
                entries.push(entry.clone());
                entry
            }
        };
        self.repo.put(&entries)?;
        Ok(entry)
    }

    pub fn entry_for(&self, date: NaiveDate) -> Result<Option<JournalEntry>, DatabaseError> {
        Ok(self.repo.get()?.into_iter().find(|e| e.date == date))
    }

    /// Entries sorted newest-first, optionally capped.
    pub fn recent(&self, limit: Option<usize>) -> Result<Vec<JournalEntry>, DatabaseError> {
        let mut entries = self.repo.get()?;
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        Ok(entries)
    }

    pub fn remove(&self, id: &str) -> Result<bool, CoreError> {
        let mut entries = self.repo.get()?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Ok(false);
        }
        self.repo.put(&entries)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn save_upserts_by_date() {
        let backend = MemoryBackend::new();
        let store = JournalStore::new(&backend);
        let first = store
            .save(date("2025-04-01"), "Morning", Mood::Happy, vec![EntryLine::plain("slept well")])
            .unwrap();
        let second = store
            .save(date("2025-04-01"), "Evening", Mood::Sleepy, vec![EntryLine::plain("long day")])
            .unwrap();

        // Same slot, same id, new content.
        assert_eq!(first.id, second.id);
        let stored = store.entry_for(date("2025-04-01")).unwrap().unwrap();
        assert_eq!(stored.title, "Evening");
        assert_eq!(store.recent(None).unwrap().len(), 1);
    }

    #[test]
    fn save_requires_title_and_a_non_blank_line() {
        let backend = MemoryBackend::new();
        let store = JournalStore::new(&backend);
        assert!(store
            .save(date("2025-04-01"), "", Mood::Neutral, vec![EntryLine::plain("x")])
            .is_err());
        assert!(store
            .save(date("2025-04-01"), "Title", Mood::Neutral, vec![EntryLine::plain("  ")])
            .is_err());
    }

    #[test]
    fn recent_is_newest_first_and_capped() {
        let backend = MemoryBackend::new();
        let store = JournalStore::new(&backend);
        for day in ["2025-04-01", "2025-04-03", "2025-04-02"] {
            store
                .save(date(day), "t", Mood::Neutral, vec![EntryLine::plain("x")])
                .unwrap();
        }
        let recent = store.recent(Some(2)).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].date, date("2025-04-03"));
        assert_eq!(recent[1].date, date("2025-04-02"));
    }

    #[test]
    fn remove_by_id() {
        let backend = MemoryBackend::new();
        let store = JournalStore::new(&backend);
        let entry = store
            .save(date("2025-04-01"), "t", Mood::Neutral, vec![EntryLine::plain("x")])
            .unwrap();
        assert!(store.remove(&entry.id).unwrap());
        assert!(store.entry_for(date("2025-04-01")).unwrap().is_none());
    }

    #[test]
    fn mood_parses_and_maps_to_emoji() {
        let mood: Mood = "LOVE".parse().unwrap();
        assert_eq!(mood, Mood::Love);
        assert_eq!(mood.emoji(), "\u{1F970}");
        assert!("giddy".parse::<Mood>().is_err());
    }
}
