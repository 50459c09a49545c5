use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Phase;

/// Every timer state change produces an Event. The live run loop reacts to
/// `PhaseCompleted` by firing the alarm; `StateSnapshot` carries the full
/// display state for any surface that renders the countdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        phase: Phase,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    /// A phase ran to completion. The countdown auto-chains: `next` begins
    /// immediately with its full duration and the timer stays running.
    PhaseCompleted {
        completed: Phase,
        next: Phase,
        next_secs: u32,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: Phase,
        running: bool,
        remaining_secs: u32,
        total_secs: u32,
        progress_pct: f64,
        at: DateTime<Utc>,
    },
}
