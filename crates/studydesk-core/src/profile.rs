//! User profile.
//!
//! The profile autosaves as the user edits, so `put` never validates.
//! Submitting runs the full field validation and refuses an incomplete
//! profile, listing every failing field at once. Extra coding-platform
//! links and the picture path live under their own keys.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, DatabaseError, ValidationError};
use crate::storage::{KvBackend, Repository};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dob {
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub year: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub zip_code: String,
    pub dob: Dob,
    pub gender: String,
    pub linkedin: String,
    pub github: String,
    pub leetcode: String,
    pub bio: String,
}

impl Profile {
    /// Collect every validation failure. Empty means submittable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.username.trim().is_empty() {
            errors.push("username is required".to_string());
        }
        if self.password.is_empty() {
            errors.push("password is required".to_string());
        } else if self.password.chars().count() < 8 {
            errors.push("password must be at least 8 characters".to_string());
        }
        if self.first_name.trim().is_empty() {
            errors.push("first name is required".to_string());
        }
        if self.last_name.trim().is_empty() {
            errors.push("last name is required".to_string());
        }
        if self.phone_number.trim().is_empty() {
            errors.push("phone number is required".to_string());
        }
        if self.email.trim().is_empty() {
            errors.push("email is required".to_string());
        } else if !email_looks_valid(&self.email) {
            errors.push("invalid email format".to_string());
        }
        if self.country.trim().is_empty() {
            errors.push("please select a country".to_string());
        }
        if self.state.trim().is_empty() {
            errors.push("please select a state".to_string());
        }
        errors
    }
}

// Shape check only: non-space, '@', non-space, '.', non-space.
fn email_looks_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let has_space = |s: &str| s.chars().any(char::is_whitespace);
    !local.is_empty()
        && !host.is_empty()
        && !tld.is_empty()
        && !has_space(local)
        && !has_space(host)
        && !has_space(tld)
}

/// A link to an external coding-platform account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformLink {
    pub platform: String,
    pub url: String,
}

pub struct ProfileStore<'a> {
    profile: Repository<'a, Profile>,
    links: Repository<'a, Vec<PlatformLink>>,
    picture: Repository<'a, Option<String>>,
}

impl<'a> ProfileStore<'a> {
    pub const PROFILE_KEY: &'static str = "profile";
    pub const LINKS_KEY: &'static str = "profile_links";
    pub const PICTURE_KEY: &'static str = "profile_picture";

    pub fn new(backend: &'a dyn KvBackend) -> Self {
        Self {
            profile: Repository::new(backend, Self::PROFILE_KEY),
            links: Repository::new(backend, Self::LINKS_KEY),
            picture: Repository::new(backend, Self::PICTURE_KEY),
        }
    }

    pub fn get(&self) -> Result<Profile, DatabaseError> {
        self.profile.get()
    }

    /// Autosave: persist whatever state the profile is in, valid or not.
    pub fn put(&self, profile: &Profile) -> Result<(), DatabaseError> {
        self.profile.put(profile)
    }

    /// Validated save: refuse an incomplete profile with the full list of
    /// field errors.
    pub fn submit(&self, profile: &Profile) -> Result<(), CoreError> {
        let errors = profile.validate();
        if !errors.is_empty() {
            return Err(ValidationError::ProfileInvalid(errors).into());
        }
        self.profile.put(profile)?;
        Ok(())
    }

    pub fn links(&self) -> Result<Vec<PlatformLink>, DatabaseError> {
        self.links.get()
    }

    pub fn add_link(&self, platform: &str, url: &str) -> Result<(), CoreError> {
        let platform = platform.trim();
        if platform.is_empty() {
            return Err(ValidationError::Empty { field: "platform" }.into());
        }
        let url = url.trim();
        if url.is_empty() {
            return Err(ValidationError::Empty { field: "url" }.into());
        }
        let mut links = self.links.get()?;
        links.push(PlatformLink {
            platform: platform.to_string(),
            url: url.to_string(),
        });
        self.links.put(&links)?;
        Ok(())
    }

    /// Remove the link at `index`. Returns whether anything was removed.
    pub fn remove_link(&self, index: usize) -> Result<bool, CoreError> {
        let mut links = self.links.get()?;
        if index >= links.len() {
            return Ok(false);
        }
        links.remove(index);
        self.links.put(&links)?;
        Ok(true)
    }

    pub fn picture(&self) -> Result<Option<String>, DatabaseError> {
        self.picture.get()
    }

    pub fn set_picture(&self, path: &str) -> Result<(), CoreError> {
        let path = path.trim();
        if path.is_empty() {
            return Err(ValidationError::Empty { field: "path" }.into());
        }
        self.picture.put(&Some(path.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    fn complete_profile() -> Profile {
        Profile {
            username: "dana".to_string(),
            password: "hunter2hunter2".to_string(),
            first_name: "Dana".to_string(),
            last_name: "Kim".to_string(),
            phone_number: "555-0101".to_string(),
            email: "dana@example.com".to_string(),
            country: "Canada".to_string(),
            state: "Ontario".to_string(),
            ..Profile::default()
        }
    }

    #[test]
    fn autosave_accepts_an_incomplete_profile() {
        let backend = MemoryBackend::new();
        let store = ProfileStore::new(&backend);
        let partial = Profile {
            username: "dana".to_string(),
            ..Profile::default()
        };
        store.put(&partial).unwrap();
        assert_eq!(store.get().unwrap().username, "dana");
    }

    #[test]
    fn submit_refuses_an_incomplete_profile_listing_every_error() {
        let backend = MemoryBackend::new();
        let store = ProfileStore::new(&backend);
        let err = store.submit(&Profile::default()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("username is required"));
        assert!(msg.contains("please select a state"));
    }

    #[test]
    fn submit_accepts_a_complete_profile() {
        let backend = MemoryBackend::new();
        let store = ProfileStore::new(&backend);
        store.submit(&complete_profile()).unwrap();
        assert_eq!(store.get().unwrap().email, "dana@example.com");
    }

    #[test]
    fn short_password_and_bad_email_are_flagged() {
        let mut profile = complete_profile();
        profile.password = "short".to_string();
        profile.email = "not-an-email".to_string();
        let errors = profile.validate();
        assert!(errors.iter().any(|e| e.contains("at least 8")));
        assert!(errors.iter().any(|e| e.contains("email format")));
    }

    #[test]
    fn email_shape_check() {
        assert!(email_looks_valid("a@b.c"));
        assert!(email_looks_valid("first.last@sub.domain.org"));
        assert!(!email_looks_valid("a@b"));
        assert!(!email_looks_valid("a b@c.d"));
        assert!(!email_looks_valid("@b.c"));
    }

    #[test]
    fn links_append_and_remove_by_index() {
        let backend = MemoryBackend::new();
        let store = ProfileStore::new(&backend);
        store.add_link("LeetCode", "https://leetcode.com/dana").unwrap();
        store.add_link("Codeforces", "https://codeforces.com/profile/dana").unwrap();
        assert!(store.remove_link(0).unwrap());
        let links = store.links().unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].platform, "Codeforces");
        assert!(!store.remove_link(5).unwrap());
    }

    #[test]
    fn picture_roundtrip() {
        let backend = MemoryBackend::new();
        let store = ProfileStore::new(&backend);
        assert!(store.picture().unwrap().is_none());
        store.set_picture("/tmp/me.png").unwrap();
        assert_eq!(store.picture().unwrap().as_deref(), Some("/tmp/me.png"));
    }
}
