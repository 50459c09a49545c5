pub mod calendar;
pub mod config;
pub mod dashboard;
pub mod habit;
pub mod journal;
pub mod profile;
pub mod resource;
pub mod roadmap;
pub mod timer;
pub mod todo;
