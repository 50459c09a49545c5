//! Study calendar: exams, assignments and study sessions.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, DatabaseError, ValidationError};
use crate::storage::{KvBackend, Repository};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Exam,
    Assignment,
    #[default]
    Study,
}

impl std::str::FromStr for EventKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exam" => Ok(EventKind::Exam),
            "assignment" => Ok(EventKind::Assignment),
            "study" => Ok(EventKind::Study),
            other => Err(ValidationError::InvalidValue {
                field: "kind".to_string(),
                message: format!("'{other}' is not one of exam, assignment, study"),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub kind: EventKind,
    #[serde(default)]
    pub description: String,
    pub at: DateTime<Utc>,
}

pub struct CalendarStore<'a> {
    repo: Repository<'a, Vec<CalendarEvent>>,
}

impl<'a> CalendarStore<'a> {
    pub const KEY: &'static str = "calendar_events";

    pub fn new(backend: &'a dyn KvBackend) -> Self {
        Self {
            repo: Repository::new(backend, Self::KEY),
        }
    }

    pub fn add(
        &self,
        title: &str,
        kind: EventKind,
        description: &str,
        at: DateTime<Utc>,
    ) -> Result<CalendarEvent, CoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::Empty { field: "title" }.into());
        }
        let event = CalendarEvent {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            kind,
            description: description.trim().to_string(),
            at,
        };
        let mut events = self.repo.get()?;
        events.push(event.clone());
        self.repo.put(&events)?;
        Ok(event)
    }

    /// Replace the mutable fields of an event. `None` leaves a field alone.
    pub fn update(
        &self,
        id: &str,
        title: Option<&str>,
        kind: Option<EventKind>,
        description: Option<&str>,
        at: Option<DateTime<Utc>>,
    ) -> Result<Option<CalendarEvent>, CoreError> {
        let mut events = self.repo.get()?;
        let Some(event) = events.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };
        if let Some(title) = title {
            let title = title.trim();
            if title.is_empty() {
                return Err(ValidationError::Empty { field: "title" }.into());
            }
            event.title = title.to_string();
        }
        if let Some(kind) = kind {
            event.kind = kind;
        }
        if let Some(description) = description {
            event.description = description.trim().to_string();
        }
        if let Some(at) = at {
            event.at = at;
        }
        let updated = event.clone();
        self.repo.put(&events)?;
        Ok(Some(updated))
    }

    pub fn remove(&self, id: &str) -> Result<bool, CoreError> {
        let mut events = self.repo.get()?;
        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            return Ok(false);
        }
        self.repo.put(&events)?;
        Ok(true)
    }

    /// All events, soonest first.
    pub fn all(&self) -> Result<Vec<CalendarEvent>, DatabaseError> {
        let mut events = self.repo.get()?;
        events.sort_by_key(|e| e.at);
        Ok(events)
    }

    pub fn events_on(&self, date: NaiveDate) -> Result<Vec<CalendarEvent>, DatabaseError> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|e| e.at.date_naive() == date)
            .collect())
    }

    /// Events in the Sunday-started week containing `date`.
    pub fn week_of(&self, date: NaiveDate) -> Result<Vec<CalendarEvent>, DatabaseError> {
        let start = date - Duration::days(i64::from(date.weekday().num_days_from_sunday()));
        let end = start + Duration::days(7);
        Ok(self
            .all()?
            .into_iter()
            .filter(|e| {
                let d = e.at.date_naive();
                d >= start && d < end
            })
            .collect())
    }

    /// The event furthest in the future (latest timestamp overall).
    pub fn latest(&self) -> Result<Option<CalendarEvent>, DatabaseError> {
        Ok(self.repo.get()?.into_iter().max_by_key(|e| e.at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    use crate::storage::MemoryBackend;

    fn at(s: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
            .unwrap_or_else(|_| panic!("bad test timestamp {s}"))
            .and_utc()
    }

    #[test]
    fn all_is_sorted_ascending() {
        let backend = MemoryBackend::new();
        let store = CalendarStore::new(&backend);
        store
            .add("later", EventKind::Study, "", at("2025-05-10 09:00"))
            .unwrap();
        store
            .add("sooner", EventKind::Exam, "", at("2025-05-01 09:00"))
            .unwrap();
        let all = store.all().unwrap();
        assert_eq!(all[0].title, "sooner");
        assert_eq!(all[1].title, "later");
    }

    #[test]
    fn events_on_matches_the_calendar_day() {
        let backend = MemoryBackend::new();
        let store = CalendarStore::new(&backend);
        store
            .add("morning", EventKind::Study, "", at("2025-05-01 09:00"))
            .unwrap();
        store
            .add("evening", EventKind::Assignment, "", at("2025-05-01 20:00"))
            .unwrap();
        store
            .add("other day", EventKind::Study, "", at("2025-05-02 09:00"))
            .unwrap();
        let day: NaiveDate = "2025-05-01".parse().unwrap();
        assert_eq!(store.events_on(day).unwrap().len(), 2);
    }

    #[test]
    fn week_of_spans_sunday_to_saturday() {
        let backend = MemoryBackend::new();
        let store = CalendarStore::new(&backend);
        // 2025-05-07 is a Wednesday; its week runs 2025-05-04..=2025-05-10.
        store
            .add("in week", EventKind::Study, "", at("2025-05-04 08:00"))
            .unwrap();
        store
            .add("also in week", EventKind::Study, "", at("2025-05-10 23:00"))
            .unwrap();
        store
            .add("next week", EventKind::Study, "", at("2025-05-11 00:30"))
            .unwrap();
        let week = store.week_of("2025-05-07".parse().unwrap()).unwrap();
        assert_eq!(week.len(), 2);
    }

    #[test]
    fn latest_picks_the_furthest_event() {
        let backend = MemoryBackend::new();
        let store = CalendarStore::new(&backend);
        assert!(store.latest().unwrap().is_none());
        store
            .add("near", EventKind::Study, "", at("2025-05-01 09:00"))
            .unwrap();
        let far = store
            .add("far", EventKind::Exam, "finals", at("2025-06-20 09:00"))
            .unwrap();
        assert_eq!(store.latest().unwrap().unwrap().id, far.id);
    }

    #[test]
    fn update_changes_only_provided_fields() {
        let backend = MemoryBackend::new();
        let store = CalendarStore::new(&backend);
        let event = store
            .add("draft", EventKind::Study, "tbd", at("2025-05-01 09:00"))
            .unwrap();
        let updated = store
            .update(&event.id, Some("final"), Some(EventKind::Exam), None, None)
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "final");
        assert_eq!(updated.kind, EventKind::Exam);
        assert_eq!(updated.description, "tbd");
        assert_eq!(updated.at, event.at);
    }

    #[test]
    fn update_unknown_id_is_none() {
        let backend = MemoryBackend::new();
        let store = CalendarStore::new(&backend);
        assert!(store.update("nope", None, None, None, None).unwrap().is_none());
    }
}
