//! Countdown timer engine.
//!
//! The timer engine is a tick-driven state machine. It does not use internal
//! threads or a clock - the caller delivers `tick()` once per second while
//! the timer is running, which lets tests advance virtual time
//! deterministically.
//!
//! ## State
//!
//! ```text
//! phase:    Work <-> Break   (flips when a countdown is exhausted)
//! activity: paused | running
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(25, 5);
//! engine.start();
//! // Once per second:
//! engine.tick(); // Returns Some(Event::PhaseCompleted) when a phase ends
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Which half of the work/break cycle the countdown is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    pub fn flipped(self) -> Phase {
        match self {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        }
    }
}

/// Upper bound for a configurable work phase, in minutes.
pub const WORK_MINUTES_MAX: u32 = 60;
/// Upper bound for a configurable break phase, in minutes.
pub const BREAK_MINUTES_MAX: u32 = 30;

const DEFAULT_WORK_MINUTES: u32 = 25;
const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Core countdown engine.
///
/// Timer state is ephemeral per process: it is never persisted, and a new
/// engine always begins a fresh work phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    phase: Phase,
    running: bool,
    /// Remaining seconds in the current phase. Always within
    /// `[0, current phase duration]`.
    remaining_secs: u32,
    work_minutes: u32,
    break_minutes: u32,
}

impl TimerEngine {
    /// Create a new engine in the work phase, paused, with a full countdown.
    ///
    /// Out-of-range durations fall back to the defaults (25/5) rather than
    /// erroring, matching the setter behavior.
    pub fn new(work_minutes: u32, break_minutes: u32) -> Self {
        let mut engine = Self {
            phase: Phase::Work,
            running: false,
            remaining_secs: DEFAULT_WORK_MINUTES * 60,
            work_minutes: DEFAULT_WORK_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
        };
        engine.set_work_minutes(work_minutes);
        engine.set_break_minutes(break_minutes);
        engine
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn work_minutes(&self) -> u32 {
        self.work_minutes
    }

    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Full duration of the current phase, in seconds.
    pub fn phase_secs(&self) -> u32 {
        match self.phase {
            Phase::Work => self.work_minutes * 60,
            Phase::Break => self.break_minutes * 60,
        }
    }

    /// 0.0 .. 100.0 progress within the current phase. Display only.
    pub fn progress_percent(&self) -> f64 {
        let total = self.phase_secs();
        if total == 0 {
            return 0.0;
        }
        f64::from(total - self.remaining_secs) / f64::from(total) * 100.0
    }

    /// `MM:SS` rendering of the remaining time.
    pub fn format_remaining(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_secs / 60,
            self.remaining_secs % 60
        )
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.phase,
            running: self.running,
            remaining_secs: self.remaining_secs,
            total_secs: self.phase_secs(),
            progress_pct: self.progress_percent(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin (or resume) the countdown. No-op if already running.
    pub fn start(&mut self) -> Option<Event> {
        if self.running {
            return None;
        }
        self.running = true;
        Some(Event::TimerStarted {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Stop the countdown. Ticks delivered while paused mutate nothing, so
    /// a tick that was already scheduled when pause took effect is harmless.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Return to a paused work phase with a full countdown.
    pub fn reset(&mut self) -> Event {
        self.running = false;
        self.phase = Phase::Work;
        self.remaining_secs = self.work_minutes * 60;
        Event::TimerReset { at: Utc::now() }
    }

    /// Set the work duration. Values outside 1..=60 are silently ignored.
    ///
    /// Changing the duration of the currently active phase re-seeds the
    /// countdown to the new full duration, discarding partial progress.
    pub fn set_work_minutes(&mut self, minutes: u32) {
        if !(1..=WORK_MINUTES_MAX).contains(&minutes) {
            return;
        }
        self.work_minutes = minutes;
        if self.phase == Phase::Work {
            self.remaining_secs = minutes * 60;
        }
    }

    /// Set the break duration. Values outside 1..=30 are silently ignored.
    pub fn set_break_minutes(&mut self, minutes: u32) {
        if !(1..=BREAK_MINUTES_MAX).contains(&minutes) {
            return;
        }
        self.break_minutes = minutes;
        if self.phase == Phase::Break {
            self.remaining_secs = minutes * 60;
        }
    }

    /// Deliver one one-second tick. No-op unless running.
    ///
    /// The tick that exhausts the countdown flips the phase directly to the
    /// other phase's full duration, so a work phase of `w` minutes completes
    /// after exactly `w * 60` ticks and the display never rests at 00:00.
    /// The timer stays running across the flip (auto-chaining).
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        if self.remaining_secs <= 1 {
            let completed = self.phase;
            self.phase = completed.flipped();
            self.remaining_secs = self.phase_secs();
            return Some(Event::PhaseCompleted {
                completed,
                next: self.phase,
                next_secs: self.remaining_secs,
                at: Utc::now(),
            });
        }
        self.remaining_secs -= 1;
        None
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(DEFAULT_WORK_MINUTES, DEFAULT_BREAK_MINUTES)
    }
}
