//! Study resource library with user-defined categories.
//!
//! Resources and the category list live under separate keys. "General" is
//! the built-in category: it always exists, it cannot be deleted, and
//! resources orphaned by a category deletion fall back to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, DatabaseError, ValidationError};
use crate::storage::{KvBackend, Repository};
use crate::todos::Priority;

pub const GENERAL: &str = "General";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub url: String,
    pub category: String,
    pub priority: Priority,
    pub added_at: DateTime<Utc>,
}

pub struct ResourceStore<'a> {
    resources: Repository<'a, Vec<Resource>>,
    categories: Repository<'a, Vec<String>>,
}

impl<'a> ResourceStore<'a> {
    pub const RESOURCES_KEY: &'static str = "resources";
    pub const CATEGORIES_KEY: &'static str = "resource_categories";

    pub fn new(backend: &'a dyn KvBackend) -> Self {
        Self {
            resources: Repository::new(backend, Self::RESOURCES_KEY),
            categories: Repository::new(backend, Self::CATEGORIES_KEY),
        }
    }

    /// Add a resource. Title and url are required; a blank category falls
    /// back to "General". An unseen category is registered on the fly.
    pub fn add(
        &self,
        title: &str,
        url: &str,
        category: &str,
        priority: Priority,
    ) -> Result<Resource, CoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::Empty { field: "title" }.into());
        }
        let url = url.trim();
        if url.is_empty() {
            return Err(ValidationError::Empty { field: "url" }.into());
        }
        let category = category.trim();
        let category = if category.is_empty() { GENERAL } else { category };
        self.add_category(category)?;

        let resource = Resource {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            url: url.to_string(),
            category: category.to_string(),
            priority,
            added_at: Utc::now(),
        };
        let mut resources = self.resources.get()?;
        resources.push(resource.clone());
        self.resources.put(&resources)?;
        Ok(resource)
    }

    /// All resources, optionally filtered by category.
    pub fn list(&self, category: Option<&str>) -> Result<Vec<Resource>, DatabaseError> {
        let resources = self.resources.get()?;
        Ok(match category {
            Some(cat) => resources.into_iter().filter(|r| r.category == cat).collect(),
            None => resources,
        })
    }

    pub fn remove(&self, id: &str) -> Result<bool, CoreError> {
        let mut resources = self.resources.get()?;
        let before = resources.len();
        resources.retain(|r| r.id != id);
        if resources.len() == before {
            return Ok(false);
        }
        self.resources.put(&resources)?;
        Ok(true)
    }

    /// Category list; "General" is always first.
    pub fn categories(&self) -> Result<Vec<String>, DatabaseError> {
        let mut categories = self.categories.get()?;
        if !categories.iter().any(|c| c == GENERAL) {
            categories.insert(0, GENERAL.to_string());
        }
        Ok(categories)
    }

    /// Register a category, deduplicating. Blank names are rejected.
    pub fn add_category(&self, name: &str) -> Result<(), CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::Empty { field: "category" }.into());
        }
        let mut categories = self.categories()?;
        if !categories.iter().any(|c| c == name) {
            categories.push(name.to_string());
            self.categories.put(&categories)?;
        }
        Ok(())
    }

    /// Rename a category, moving its resources along. The new name must be
    /// non-blank and not already taken; "General" cannot be renamed.
    pub fn rename_category(&self, old: &str, new: &str) -> Result<(), CoreError> {
        let new = new.trim();
        if new.is_empty() {
            return Err(ValidationError::Empty { field: "category" }.into());
        }
        if old == GENERAL {
            return Err(ValidationError::InvalidValue {
                field: "category".to_string(),
                message: format!("the {GENERAL} category cannot be renamed"),
            }
            .into());
        }
        let mut categories = self.categories()?;
        if categories.iter().any(|c| c == new) {
            return Err(ValidationError::InvalidValue {
                field: "category".to_string(),
                message: format!("category '{new}' already exists"),
            }
            .into());
        }
        let Some(slot) = categories.iter_mut().find(|c| *c == old) else {
            return Err(ValidationError::InvalidValue {
                field: "category".to_string(),
                message: format!("category '{old}' does not exist"),
            }
            .into());
        };
        *slot = new.to_string();
        self.categories.put(&categories)?;

        let mut resources = self.resources.get()?;
        let mut touched = false;
        for r in resources.iter_mut().filter(|r| r.category == old) {
            r.category = new.to_string();
            touched = true;
        }
        if touched {
            self.resources.put(&resources)?;
        }
        Ok(())
    }

    /// Delete a category, reassigning its resources to "General".
    pub fn delete_category(&self, name: &str) -> Result<(), CoreError> {
        if name == GENERAL {
            return Err(ValidationError::InvalidValue {
                field: "category".to_string(),
                message: format!("the {GENERAL} category cannot be deleted"),
            }
            .into());
        }
        let mut categories = self.categories()?;
        let before = categories.len();
        categories.retain(|c| c != name);
        if categories.len() == before {
            return Err(ValidationError::InvalidValue {
                field: "category".to_string(),
                message: format!("category '{name}' does not exist"),
            }
            .into());
        }
        self.categories.put(&categories)?;

        let mut resources = self.resources.get()?;
        let mut touched = false;
        for r in resources.iter_mut().filter(|r| r.category == name) {
            r.category = GENERAL.to_string();
            touched = true;
        }
        if touched {
            self.resources.put(&resources)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    #[test]
    fn blank_category_falls_back_to_general() {
        let backend = MemoryBackend::new();
        let store = ResourceStore::new(&backend);
        let r = store
            .add("Rust book", "https://doc.rust-lang.org/book", "", Priority::High)
            .unwrap();
        assert_eq!(r.category, GENERAL);
    }

    #[test]
    fn unknown_category_is_registered_on_add() {
        let backend = MemoryBackend::new();
        let store = ResourceStore::new(&backend);
        store
            .add("SQL tutorial", "https://example.com/sql", "Databases", Priority::Low)
            .unwrap();
        assert_eq!(store.categories().unwrap(), vec!["General", "Databases"]);
    }

    #[test]
    fn url_is_required() {
        let backend = MemoryBackend::new();
        let store = ResourceStore::new(&backend);
        assert!(store.add("No link", " ", "", Priority::Low).is_err());
    }

    #[test]
    fn list_filters_by_category() {
        let backend = MemoryBackend::new();
        let store = ResourceStore::new(&backend);
        store.add("a", "https://a", "Math", Priority::Low).unwrap();
        store.add("b", "https://b", "", Priority::Low).unwrap();
        assert_eq!(store.list(Some("Math")).unwrap().len(), 1);
        assert_eq!(store.list(None).unwrap().len(), 2);
    }

    #[test]
    fn delete_category_reassigns_to_general() {
        let backend = MemoryBackend::new();
        let store = ResourceStore::new(&backend);
        store.add("a", "https://a", "Math", Priority::Low).unwrap();
        store.delete_category("Math").unwrap();
        assert_eq!(store.list(None).unwrap()[0].category, GENERAL);
        assert_eq!(store.categories().unwrap(), vec![GENERAL.to_string()]);
    }

    #[test]
    fn general_cannot_be_deleted_or_renamed() {
        let backend = MemoryBackend::new();
        let store = ResourceStore::new(&backend);
        assert!(store.delete_category(GENERAL).is_err());
        assert!(store.rename_category(GENERAL, "Misc").is_err());
    }

    #[test]
    fn rename_category_moves_resources() {
        let backend = MemoryBackend::new();
        let store = ResourceStore::new(&backend);
        store.add("a", "https://a", "Math", Priority::Low).unwrap();
        store.rename_category("Math", "Mathematics").unwrap();
        assert_eq!(store.list(None).unwrap()[0].category, "Mathematics");
        assert!(store.categories().unwrap().contains(&"Mathematics".to_string()));
    }

    #[test]
    fn rename_to_existing_category_is_rejected() {
        let backend = MemoryBackend::new();
        let store = ResourceStore::new(&backend);
        store.add_category("Math").unwrap();
        store.add_category("Physics").unwrap();
        assert!(store.rename_category("Math", "Physics").is_err());
    }
}
