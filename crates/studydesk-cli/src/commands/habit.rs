//! Habit tracking commands.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use studydesk_core::habits::{week_days, HabitStore};
use studydesk_core::storage::Database;

#[derive(Subcommand)]
pub enum HabitAction {
    /// Add a habit
    Add {
        /// Habit name
        name: String,
    },
    /// List habits as JSON
    List,
    /// Toggle completion for a date
    Toggle {
        /// Habit ID
        id: String,
        /// Date to toggle (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Delete a habit
    Delete {
        /// Habit ID
        id: String,
    },
    /// Show this week's completion grid, Sunday first
    Week,
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let store = HabitStore::new(&db);

    match action {
        HabitAction::Add { name } => {
            let habit = store.add(&name)?;
            println!("Habit created: {}", habit.id);
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::List => {
            println!("{}", serde_json::to_string_pretty(&store.list()?)?);
        }
        HabitAction::Toggle { id, date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            match store.toggle(&id, date)? {
                Some(habit) => println!("{}", serde_json::to_string_pretty(&habit)?),
                None => println!("Habit not found: {id}"),
            }
        }
        HabitAction::Delete { id } => {
            if store.remove(&id)? {
                println!("Habit deleted: {id}");
            } else {
                println!("Habit not found: {id}");
            }
        }
        HabitAction::Week => {
            let days = week_days(Local::now().date_naive());
            for habit in store.list()? {
                let marks: String = days
                    .iter()
                    .map(|d| if habit.completed_dates.contains(d) { 'x' } else { '.' })
                    .collect();
                println!("{marks}  {} (streak {})", habit.name, habit.streak);
            }
        }
    }
    Ok(())
}
