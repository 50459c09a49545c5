//! Habit tracker.
//!
//! Habits live as an ordered list under a single persistence key. Completion
//! is tracked per calendar date; the streak counts completed dates.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, DatabaseError, ValidationError};
use crate::storage::{KvBackend, Repository};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub streak: u32,
    #[serde(default)]
    pub completed_dates: Vec<NaiveDate>,
}

/// Typed store for habits.
pub struct HabitStore<'a> {
    repo: Repository<'a, Vec<Habit>>,
}

impl<'a> HabitStore<'a> {
    pub const KEY: &'static str = "habits";

    pub fn new(backend: &'a dyn KvBackend) -> Self {
        Self {
            repo: Repository::new(backend, Self::KEY),
        }
    }

    pub fn list(&self) -> Result<Vec<Habit>, DatabaseError> {
        self.repo.get()
    }

    /// Add a habit. Blank names are rejected.
    pub fn add(&self, name: &str) -> Result<Habit, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::Empty { field: "name" }.into());
        }
        let habit = Habit {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            streak: 0,
            completed_dates: Vec::new(),
        };
        let mut habits = self.repo.get()?;
        habits.push(habit.clone());
        self.repo.put(&habits)?;
        Ok(habit)
    }

    /// Toggle completion of a habit for a date. Returns the updated habit,
    /// or `None` when the id is unknown.
    pub fn toggle(&self, id: &str, date: NaiveDate) -> Result<Option<Habit>, CoreError> {
        let mut habits = self.repo.get()?;
        let Some(habit) = habits.iter_mut().find(|h| h.id == id) else {
            return Ok(None);
        };
        if let Some(pos) = habit.completed_dates.iter().position(|d| *d == date) {
            habit.completed_dates.remove(pos);
        } else {
            habit.completed_dates.push(date);
        }
        // Streak counts completed dates, not consecutive days.
        habit.streak = habit.completed_dates.len() as u32;
        let updated = habit.clone();
        self.repo.put(&habits)?;
        Ok(Some(updated))
    }

    /// Delete a habit. Returns whether anything was removed.
    pub fn remove(&self, id: &str) -> Result<bool, CoreError> {
        let mut habits = self.repo.get()?;
        let before = habits.len();
        habits.retain(|h| h.id != id);
        if habits.len() == before {
            return Ok(false);
        }
        self.repo.put(&habits)?;
        Ok(true)
    }
}

/// The Sunday-started week containing `today`, for the weekly grid.
pub fn week_days(today: NaiveDate) -> [NaiveDate; 7] {
    let start = today - Duration::days(i64::from(today.weekday().num_days_from_sunday()));
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn add_and_list() {
        let backend = MemoryBackend::new();
        let store = HabitStore::new(&backend);
        let habit = store.add("Read 30 minutes").unwrap();
        assert_eq!(habit.streak, 0);
        let habits = store.list().unwrap();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].name, "Read 30 minutes");
    }

    #[test]
    fn blank_name_is_rejected() {
        let backend = MemoryBackend::new();
        let store = HabitStore::new(&backend);
        assert!(store.add("   ").is_err());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn toggle_flips_completion_and_recounts_streak() {
        let backend = MemoryBackend::new();
        let store = HabitStore::new(&backend);
        let habit = store.add("Stretch").unwrap();

        let updated = store.toggle(&habit.id, date("2025-03-03")).unwrap().unwrap();
        assert_eq!(updated.streak, 1);
        let updated = store.toggle(&habit.id, date("2025-03-04")).unwrap().unwrap();
        assert_eq!(updated.streak, 2);

        // Toggling the same date again removes it.
        let updated = store.toggle(&habit.id, date("2025-03-03")).unwrap().unwrap();
        assert_eq!(updated.streak, 1);
        assert_eq!(updated.completed_dates, vec![date("2025-03-04")]);
    }

    #[test]
    fn toggle_unknown_id_is_none() {
        let backend = MemoryBackend::new();
        let store = HabitStore::new(&backend);
        assert!(store.toggle("nope", date("2025-03-03")).unwrap().is_none());
    }

    #[test]
    fn remove_reports_whether_anything_changed() {
        let backend = MemoryBackend::new();
        let store = HabitStore::new(&backend);
        let habit = store.add("Hydrate").unwrap();
        assert!(store.remove(&habit.id).unwrap());
        assert!(!store.remove(&habit.id).unwrap());
    }

    #[test]
    fn week_starts_on_sunday() {
        // 2025-03-05 is a Wednesday.
        let week = week_days(date("2025-03-05"));
        assert_eq!(week[0], date("2025-03-02"));
        assert_eq!(week[6], date("2025-03-08"));
    }

    #[test]
    fn malformed_slot_rehydrates_empty() {
        let backend = MemoryBackend::new();
        backend.seed_raw(HabitStore::KEY, "not json at all");
        let store = HabitStore::new(&backend);
        assert!(store.list().unwrap().is_empty());
    }
}
