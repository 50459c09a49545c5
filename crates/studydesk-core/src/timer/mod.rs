mod engine;

pub use engine::{Phase, TimerEngine, BREAK_MINUTES_MAX, WORK_MINUTES_MAX};
