//! One-screen summary across every feature area.

use studydesk_core::calendar::CalendarStore;
use studydesk_core::habits::HabitStore;
use studydesk_core::journal::JournalStore;
use studydesk_core::quotes;
use studydesk_core::resources::ResourceStore;
use studydesk_core::roadmaps::RoadmapStore;
use studydesk_core::storage::Database;
use studydesk_core::todos::TodoStore;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    let quote = quotes::random();
    println!("\"{}\"", quote.text);
    println!("    - {}", quote.author);
    println!();

    let habits = HabitStore::new(&db).list()?;
    let todos = TodoStore::new(&db).list()?;
    let pending = todos.iter().filter(|t| !t.completed).count();
    let resources = ResourceStore::new(&db).list(None)?;
    let entries = JournalStore::new(&db).recent(None)?;
    let roadmaps = RoadmapStore::new(&db).list()?;

    println!("habits:    {}", habits.len());
    println!("todos:     {pending} pending of {}", todos.len());
    println!("resources: {}", resources.len());
    println!("journal:   {} entries", entries.len());
    println!("roadmaps:  {}", roadmaps.len());

    let now = chrono::Utc::now();
    let upcoming = CalendarStore::new(&db)
        .all()?
        .into_iter()
        .find(|e| e.at >= now);
    match upcoming {
        Some(event) => println!("next up:   {} ({})", event.title, event.at.date_naive()),
        None => println!("next up:   nothing scheduled"),
    }
    Ok(())
}
