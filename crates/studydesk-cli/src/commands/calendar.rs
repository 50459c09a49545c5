//! Calendar commands.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use clap::Subcommand;
use studydesk_core::calendar::{CalendarStore, EventKind};
use studydesk_core::storage::Database;

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Add an event
    Add {
        /// Event title
        title: String,
        /// Event kind: exam, assignment or study
        #[arg(long, default_value = "study")]
        kind: EventKind,
        /// Event description
        #[arg(long, default_value = "")]
        description: String,
        /// Event date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Event time (HH:MM)
        #[arg(long, default_value = "12:00")]
        time: String,
    },
    /// List all events as JSON, soonest first
    List,
    /// Events on a date
    On {
        /// Date (default: today)
        date: Option<NaiveDate>,
    },
    /// Events in the Sunday-started week containing a date
    Week {
        /// Date anywhere in the week (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// The event furthest in the future
    Latest,
    /// Update an event
    Update {
        /// Event ID
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New kind
        #[arg(long)]
        kind: Option<EventKind>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// New time (HH:MM, requires --date)
        #[arg(long, requires = "date")]
        time: Option<String>,
    },
    /// Delete an event
    Delete {
        /// Event ID
        id: String,
    },
}

fn event_timestamp(date: NaiveDate, time: &str) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    let time = NaiveTime::parse_from_str(time, "%H:%M")?;
    Ok(date.and_time(time).and_utc())
}

pub fn run(action: CalendarAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let store = CalendarStore::new(&db);

    match action {
        CalendarAction::Add {
            title,
            kind,
            description,
            date,
            time,
        } => {
            let at = event_timestamp(date, &time)?;
            let event = store.add(&title, kind, &description, at)?;
            println!("Event created: {}", event.id);
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        CalendarAction::List => {
            println!("{}", serde_json::to_string_pretty(&store.all()?)?);
        }
        CalendarAction::On { date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            println!("{}", serde_json::to_string_pretty(&store.events_on(date)?)?);
        }
        CalendarAction::Week { date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            println!("{}", serde_json::to_string_pretty(&store.week_of(date)?)?);
        }
        CalendarAction::Latest => match store.latest()? {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("No events"),
        },
        CalendarAction::Update {
            id,
            title,
            kind,
            description,
            date,
            time,
        } => {
            let at = match date {
                Some(date) => Some(event_timestamp(date, time.as_deref().unwrap_or("12:00"))?),
                None => None,
            };
            match store.update(&id, title.as_deref(), kind, description.as_deref(), at)? {
                Some(event) => {
                    println!("Event updated:");
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
                None => println!("Event not found: {id}"),
            }
        }
        CalendarAction::Delete { id } => {
            if store.remove(&id)? {
                println!("Event deleted: {id}");
            } else {
                println!("Event not found: {id}");
            }
        }
    }
    Ok(())
}
