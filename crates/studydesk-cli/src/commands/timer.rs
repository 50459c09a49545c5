//! Foreground pomodoro countdown.
//!
//! The engine is tick-driven, so the loop here owns the clock: a one-second
//! tokio interval delivers ticks until Ctrl-C or the requested number of
//! work phases completes. Timer state lives only for the duration of the
//! process.

use std::io::Write;
use std::time::Duration;

use clap::Subcommand;
use studydesk_core::alarm;
use studydesk_core::events::Event;
use studydesk_core::storage::Config;
use studydesk_core::timer::{Phase, TimerEngine};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run the countdown in the foreground until interrupted
    Run {
        /// Work phase length in minutes (1-60, overrides config)
        #[arg(long)]
        work: Option<u32>,
        /// Break phase length in minutes (1-30, overrides config)
        #[arg(long = "break")]
        break_minutes: Option<u32>,
        /// Exit after this many completed work phases
        #[arg(long)]
        cycles: Option<u32>,
        /// Suppress the completion alarm
        #[arg(long)]
        silent: bool,
    },
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Run {
            work,
            break_minutes,
            cycles,
            silent,
        } => run_loop(work, break_minutes, cycles, silent),
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Work => "work",
        Phase::Break => "break",
    }
}

fn print_status(engine: &TimerEngine) {
    print!(
        "\r[{}] {}   ",
        phase_label(engine.phase()),
        engine.format_remaining()
    );
    let _ = std::io::stdout().flush();
}

fn run_loop(
    work: Option<u32>,
    break_minutes: Option<u32>,
    cycles: Option<u32>,
    silent: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut engine = config.engine();
    // Out-of-range overrides are ignored, same as everywhere else.
    if let Some(w) = work {
        engine.set_work_minutes(w);
    }
    if let Some(b) = break_minutes {
        engine.set_break_minutes(b);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        // The first tick fires immediately; consume it so ticks arrive at
        // one-second boundaries from here on.
        interval.tick().await;

        engine.start();
        print_status(&engine);
        let mut completed_work = 0u32;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Some(Event::PhaseCompleted { completed, next, .. }) = engine.tick() {
                        println!();
                        println!(
                            "{} phase complete, {} starting",
                            phase_label(completed),
                            phase_label(next)
                        );
                        if !silent && config.notifications.sound_enabled {
                            alarm::play(
                                config.notifications.custom_sound.clone().map(Into::into),
                            );
                        }
                        if completed == Phase::Work {
                            completed_work += 1;
                            if cycles.is_some_and(|c| completed_work >= c) {
                                break;
                            }
                        }
                    }
                    print_status(&engine);
                }
                _ = tokio::signal::ctrl_c() => {
                    println!();
                    break;
                }
            }
        }

        Ok::<(), std::io::Error>(())
    })?;
    Ok(())
}
