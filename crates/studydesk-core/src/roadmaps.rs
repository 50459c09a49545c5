//! Learning roadmaps with completable steps.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, DatabaseError, ValidationError};
use crate::storage::{KvBackend, Repository};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub steps: Vec<RoadmapStep>,
}

impl Roadmap {
    /// (completed, total) step counts.
    pub fn progress(&self) -> (usize, usize) {
        let done = self.steps.iter().filter(|s| s.completed).count();
        (done, self.steps.len())
    }
}

pub struct RoadmapStore<'a> {
    repo: Repository<'a, Vec<Roadmap>>,
}

impl<'a> RoadmapStore<'a> {
    pub const KEY: &'static str = "roadmaps";

    pub fn new(backend: &'a dyn KvBackend) -> Self {
        Self {
            repo: Repository::new(backend, Self::KEY),
        }
    }

    pub fn list(&self) -> Result<Vec<Roadmap>, DatabaseError> {
        self.repo.get()
    }

    pub fn add(
        &self,
        title: &str,
        description: &str,
        url: Option<&str>,
    ) -> Result<Roadmap, CoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::Empty { field: "title" }.into());
        }
        let roadmap = Roadmap {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.trim().to_string(),
            url: url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()),
            steps: Vec::new(),
        };
        let mut roadmaps = self.repo.get()?;
        roadmaps.push(roadmap.clone());
        self.repo.put(&roadmaps)?;
        Ok(roadmap)
    }

    /// Replace title/description/url; `None` leaves a field alone. Steps
    /// are untouched.
    pub fn update(
        &self,
        id: &str,
        title: Option<&str>,
        description: Option<&str>,
        url: Option<&str>,
    ) -> Result<Option<Roadmap>, CoreError> {
        let mut roadmaps = self.repo.get()?;
        let Some(roadmap) = roadmaps.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        if let Some(title) = title {
            let title = title.trim();
            if title.is_empty() {
                return Err(ValidationError::Empty { field: "title" }.into());
            }
            roadmap.title = title.to_string();
        }
        if let Some(description) = description {
            roadmap.description = description.trim().to_string();
        }
        if let Some(url) = url {
            let url = url.trim();
            roadmap.url = (!url.is_empty()).then(|| url.to_string());
        }
        let updated = roadmap.clone();
        self.repo.put(&roadmaps)?;
        Ok(Some(updated))
    }

    pub fn remove(&self, id: &str) -> Result<bool, CoreError> {
        let mut roadmaps = self.repo.get()?;
        let before = roadmaps.len();
        roadmaps.retain(|r| r.id != id);
        if roadmaps.len() == before {
            return Ok(false);
        }
        self.repo.put(&roadmaps)?;
        Ok(true)
    }

    /// Append a step to a roadmap. `None` when the roadmap is unknown.
    pub fn add_step(&self, roadmap_id: &str, title: &str) -> Result<Option<Roadmap>, CoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::Empty { field: "title" }.into());
        }
        let mut roadmaps = self.repo.get()?;
        let Some(roadmap) = roadmaps.iter_mut().find(|r| r.id == roadmap_id) else {
            return Ok(None);
        };
        roadmap.steps.push(RoadmapStep {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            completed: false,
        });
        let updated = roadmap.clone();
        self.repo.put(&roadmaps)?;
        Ok(Some(updated))
    }

    /// Flip the completion of one step. `None` when roadmap or step is
    /// unknown.
    pub fn toggle_step(
        &self,
        roadmap_id: &str,
        step_id: &str,
    ) -> Result<Option<Roadmap>, CoreError> {
        let mut roadmaps = self.repo.get()?;
        let Some(roadmap) = roadmaps.iter_mut().find(|r| r.id == roadmap_id) else {
            return Ok(None);
        };
        let Some(step) = roadmap.steps.iter_mut().find(|s| s.id == step_id) else {
            return Ok(None);
        };
        step.completed = !step.completed;
        let updated = roadmap.clone();
        self.repo.put(&roadmaps)?;
        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    #[test]
    fn add_starts_with_no_steps() {
        let backend = MemoryBackend::new();
        let store = RoadmapStore::new(&backend);
        let roadmap = store.add("Learn Rust", "ownership first", None).unwrap();
        assert!(roadmap.steps.is_empty());
        assert_eq!(roadmap.progress(), (0, 0));
    }

    #[test]
    fn blank_url_is_stored_as_none() {
        let backend = MemoryBackend::new();
        let store = RoadmapStore::new(&backend);
        let roadmap = store.add("Algorithms", "", Some("  ")).unwrap();
        assert!(roadmap.url.is_none());
    }

    #[test]
    fn steps_accumulate_and_toggle() {
        let backend = MemoryBackend::new();
        let store = RoadmapStore::new(&backend);
        let roadmap = store.add("Learn Rust", "", None).unwrap();
        store.add_step(&roadmap.id, "read the book").unwrap();
        let with_steps = store.add_step(&roadmap.id, "build a CLI").unwrap().unwrap();
        assert_eq!(with_steps.progress(), (0, 2));

        let step_id = with_steps.steps[0].id.clone();
        let toggled = store.toggle_step(&roadmap.id, &step_id).unwrap().unwrap();
        assert_eq!(toggled.progress(), (1, 2));
        let toggled = store.toggle_step(&roadmap.id, &step_id).unwrap().unwrap();
        assert_eq!(toggled.progress(), (0, 2));
    }

    #[test]
    fn update_preserves_steps() {
        let backend = MemoryBackend::new();
        let store = RoadmapStore::new(&backend);
        let roadmap = store.add("Old title", "", None).unwrap();
        store.add_step(&roadmap.id, "step one").unwrap();
        let updated = store
            .update(&roadmap.id, Some("New title"), None, Some("https://example.com"))
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "New title");
        assert_eq!(updated.steps.len(), 1);
        assert_eq!(updated.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn unknown_ids_yield_none() {
        let backend = MemoryBackend::new();
        let store = RoadmapStore::new(&backend);
        assert!(store.add_step("nope", "x").unwrap().is_none());
        let roadmap = store.add("Real", "", None).unwrap();
        assert!(store.toggle_step(&roadmap.id, "nope").unwrap().is_none());
    }
}
