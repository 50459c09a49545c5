//! Daily journal commands.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use studydesk_core::journal::{EntryLine, JournalStore, Mood};
use studydesk_core::storage::Database;

#[derive(Subcommand)]
pub enum JournalAction {
    /// Save the entry for a date, replacing any earlier one
    Save {
        /// Entry title
        title: String,
        /// Entry date (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Mood: happy, sad, angry, excited, neutral, love, worried, sleepy
        #[arg(long, default_value = "neutral")]
        mood: Mood,
        /// A line of text; repeat for multiple lines
        #[arg(long = "line", value_name = "TEXT")]
        lines: Vec<String>,
    },
    /// Show the entry for a date
    Show {
        /// Entry date (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List entries newest-first
    Recent {
        /// How many entries to show
        #[arg(long, default_value = "5")]
        limit: usize,
        /// Show every entry
        #[arg(long)]
        all: bool,
    },
    /// Delete an entry
    Delete {
        /// Entry ID
        id: String,
    },
}

pub fn run(action: JournalAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let store = JournalStore::new(&db);

    match action {
        JournalAction::Save {
            title,
            date,
            mood,
            lines,
        } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let lines = lines.into_iter().map(EntryLine::plain).collect();
            let entry = store.save(date, &title, mood, lines)?;
            println!("Entry saved: {}", entry.id);
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        JournalAction::Show { date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            match store.entry_for(date)? {
                Some(entry) => {
                    println!("{} {} {}", entry.date, entry.mood.emoji(), entry.title);
                    for line in &entry.lines {
                        println!("{}", line.text);
                    }
                }
                None => println!("No entry for {date}"),
            }
        }
        JournalAction::Recent { limit, all } => {
            let limit = if all { None } else { Some(limit) };
            println!("{}", serde_json::to_string_pretty(&store.recent(limit)?)?);
        }
        JournalAction::Delete { id } => {
            if store.remove(&id)? {
                println!("Entry deleted: {id}");
            } else {
                println!("Entry not found: {id}");
            }
        }
    }
    Ok(())
}
