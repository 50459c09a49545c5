//! To-do list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, DatabaseError, ValidationError};
use crate::storage::{KvBackend, Repository};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl std::str::FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(ValidationError::InvalidValue {
                field: "priority".to_string(),
                message: format!("'{other}' is not one of low, medium, high"),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
    pub priority: Priority,
    pub due_date: NaiveDate,
}

/// Typed store for todos.
pub struct TodoStore<'a> {
    repo: Repository<'a, Vec<Todo>>,
}

impl<'a> TodoStore<'a> {
    pub const KEY: &'static str = "todos";

    pub fn new(backend: &'a dyn KvBackend) -> Self {
        Self {
            repo: Repository::new(backend, Self::KEY),
        }
    }

    /// Add a todo. A title and a due date are both required; the title must
    /// not be blank.
    pub fn add(
        &self,
        title: &str,
        description: &str,
        priority: Priority,
        due_date: NaiveDate,
    ) -> Result<Todo, CoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::Empty { field: "title" }.into());
        }
        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.trim().to_string(),
            completed: false,
            priority,
            due_date,
        };
        let mut todos = self.repo.get()?;
        todos.push(todo.clone());
        self.repo.put(&todos)?;
        Ok(todo)
    }

    pub fn list(&self) -> Result<Vec<Todo>, DatabaseError> {
        self.repo.get()
    }

    /// All todos, incomplete before complete, then by due date ascending.
    pub fn sorted(&self) -> Result<Vec<Todo>, DatabaseError> {
        let mut todos = self.repo.get()?;
        todos.sort_by(|a, b| {
            a.completed
                .cmp(&b.completed)
                .then(a.due_date.cmp(&b.due_date))
        });
        Ok(todos)
    }

    pub fn get(&self, id: &str) -> Result<Option<Todo>, DatabaseError> {
        Ok(self.repo.get()?.into_iter().find(|t| t.id == id))
    }

    /// Flip completion. Returns the updated todo, or `None` for unknown ids.
    pub fn toggle(&self, id: &str) -> Result<Option<Todo>, CoreError> {
        let mut todos = self.repo.get()?;
        let Some(todo) = todos.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        todo.completed = !todo.completed;
        let updated = todo.clone();
        self.repo.put(&todos)?;
        Ok(Some(updated))
    }

    /// Delete a todo. Returns whether anything was removed.
    pub fn remove(&self, id: &str) -> Result<bool, CoreError> {
        let mut todos = self.repo.get()?;
        let before = todos.len();
        todos.retain(|t| t.id != id);
        if todos.len() == before {
            return Ok(false);
        }
        self.repo.put(&todos)?;
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
    fn add_requires_a_title() {
        let backend = MemoryBackend::new();
        let store = TodoStore::new(&backend);
        assert!(store
            .add("", "desc", Priority::Low, date("2025-06-01"))
            .is_err());
    }

    #[test]
    fn sorted_puts_incomplete_first_then_due_date() {
        let backend = MemoryBackend::new();
        let store = TodoStore::new(&backend);
        let late = store
            .add("late", "", Priority::Low, date("2025-06-20"))
            .unwrap();
        let early = store
            .add("early", "", Priority::High, date("2025-06-01"))
            .unwrap();
        let done = store
            .add("done", "", Priority::Low, date("2025-01-01"))
            .unwrap();
        store.toggle(&done.id).unwrap();

        let sorted = store.sorted().unwrap();
        assert_eq!(sorted[0].id, early.id);
        assert_eq!(sorted[1].id, late.id);
        assert_eq!(sorted[2].id, done.id);
    }

    #[test]
    fn toggle_roundtrips() {
        let backend = MemoryBackend::new();
        let store = TodoStore::new(&backend);
        let todo = store
            .add("write notes", "", Priority::Medium, date("2025-06-01"))
            .unwrap();
        assert!(store.toggle(&todo.id).unwrap().unwrap().completed);
        assert!(!store.toggle(&todo.id).unwrap().unwrap().completed);
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn remove_unknown_id_is_false() {
        let backend = MemoryBackend::new();
        let store = TodoStore::new(&backend);
        assert!(!store.remove("nope").unwrap());
    }
}
