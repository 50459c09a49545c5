//! Roadmap commands.

use clap::Subcommand;
use studydesk_core::roadmaps::RoadmapStore;
use studydesk_core::storage::Database;

#[derive(Subcommand)]
pub enum RoadmapAction {
    /// Add a roadmap
    Add {
        /// Roadmap title
        title: String,
        /// Roadmap description
        #[arg(long, default_value = "")]
        description: String,
        /// Link to the roadmap source
        #[arg(long)]
        url: Option<String>,
    },
    /// List roadmaps as JSON
    List,
    /// Update a roadmap
    Update {
        /// Roadmap ID
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New URL (empty clears it)
        #[arg(long)]
        url: Option<String>,
    },
    /// Delete a roadmap
    Delete {
        /// Roadmap ID
        id: String,
    },
    /// Append a step to a roadmap
    AddStep {
        /// Roadmap ID
        id: String,
        /// Step title
        title: String,
    },
    /// Toggle completion of a step
    ToggleStep {
        /// Roadmap ID
        id: String,
        /// Step ID
        step_id: String,
    },
}

pub fn run(action: RoadmapAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let store = RoadmapStore::new(&db);

    match action {
        RoadmapAction::Add {
            title,
            description,
            url,
        } => {
            let roadmap = store.add(&title, &description, url.as_deref())?;
            println!("Roadmap created: {}", roadmap.id);
            println!("{}", serde_json::to_string_pretty(&roadmap)?);
        }
        RoadmapAction::List => {
            for roadmap in store.list()? {
                let (done, total) = roadmap.progress();
                println!("{}  {} [{done}/{total}]", roadmap.id, roadmap.title);
            }
        }
        RoadmapAction::Update {
            id,
            title,
            description,
            url,
        } => {
            match store.update(&id, title.as_deref(), description.as_deref(), url.as_deref())? {
                Some(roadmap) => {
                    println!("Roadmap updated:");
                    println!("{}", serde_json::to_string_pretty(&roadmap)?);
                }
                None => println!("Roadmap not found: {id}"),
            }
        }
        RoadmapAction::Delete { id } => {
            if store.remove(&id)? {
                println!("Roadmap deleted: {id}");
            } else {
                println!("Roadmap not found: {id}");
            }
        }
        RoadmapAction::AddStep { id, title } => match store.add_step(&id, &title)? {
            Some(roadmap) => println!("{}", serde_json::to_string_pretty(&roadmap)?),
            None => println!("Roadmap not found: {id}"),
        },
        RoadmapAction::ToggleStep { id, step_id } => match store.toggle_step(&id, &step_id)? {
            Some(roadmap) => println!("{}", serde_json::to_string_pretty(&roadmap)?),
            None => println!("Roadmap or step not found: {id}/{step_id}"),
        },
    }
    Ok(())
}
