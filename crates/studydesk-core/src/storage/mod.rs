mod config;
pub mod database;
pub mod repository;

pub use config::Config;
pub use database::Database;
pub use repository::{KvBackend, MemoryBackend, Repository};

use std::path::PathBuf;

/// Returns the studydesk data directory.
///
/// `STUDYDESK_DATA_DIR` overrides the location outright (used by tests);
/// otherwise `~/.config/studydesk[-dev]` based on `STUDYDESK_ENV`.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let dir = match std::env::var("STUDYDESK_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("STUDYDESK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("studydesk-dev")
            } else {
                base_dir.join("studydesk")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
