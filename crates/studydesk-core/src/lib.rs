//! # Studydesk Core Library
//!
//! This library provides the core logic for Studydesk, a study-companion
//! dashboard. It implements a CLI-first philosophy where every operation is
//! available via a standalone CLI binary; any GUI would be a thin layer over
//! the same core library.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a tick-driven state machine for the pomodoro
//!   countdown. The driver delivers `tick()` once per second while the timer
//!   is running; the engine never owns a thread or a clock.
//! - **Storage**: a SQLite-backed key-value store with one typed repository
//!   per feature area, plus TOML-based configuration.
//! - **Feature stores**: habits, todos, resources, journal, calendar,
//!   roadmaps and profile, each a thin typed layer over its repository.
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: countdown state machine
//! - [`Database`]: durable key-value persistence
//! - [`Repository`]: one typed slot per feature area
//! - [`Config`]: application configuration

pub mod alarm;
pub mod calendar;
pub mod error;
pub mod events;
pub mod habits;
pub mod journal;
pub mod profile;
pub mod quotes;
pub mod resources;
pub mod roadmaps;
pub mod storage;
pub mod timer;
pub mod todos;

pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use events::Event;
pub use storage::{Config, Database, KvBackend, MemoryBackend, Repository};
pub use timer::{Phase, TimerEngine};
