//! To-do list commands.

use chrono::NaiveDate;
use clap::Subcommand;
use studydesk_core::storage::Database;
use studydesk_core::todos::{Priority, TodoStore};

#[derive(Subcommand)]
pub enum TodoAction {
    /// Add a todo
    Add {
        /// Todo title
        title: String,
        /// Longer description
        #[arg(long, default_value = "")]
        description: String,
        /// Priority: low, medium or high
        #[arg(long, default_value = "low")]
        priority: Priority,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: NaiveDate,
    },
    /// List todos as JSON, incomplete first then by due date
    List,
    /// Get todo details
    Get {
        /// Todo ID
        id: String,
    },
    /// Toggle completion
    Toggle {
        /// Todo ID
        id: String,
    },
    /// Delete a todo
    Delete {
        /// Todo ID
        id: String,
    },
}

pub fn run(action: TodoAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let store = TodoStore::new(&db);

    match action {
        TodoAction::Add {
            title,
            description,
            priority,
            due,
        } => {
            let todo = store.add(&title, &description, priority, due)?;
            println!("Todo created: {}", todo.id);
            println!("{}", serde_json::to_string_pretty(&todo)?);
        }
        TodoAction::List => {
            println!("{}", serde_json::to_string_pretty(&store.sorted()?)?);
        }
        TodoAction::Get { id } => match store.get(&id)? {
            Some(todo) => println!("{}", serde_json::to_string_pretty(&todo)?),
            None => println!("Todo not found: {id}"),
        },
        TodoAction::Toggle { id } => match store.toggle(&id)? {
            Some(todo) => println!("{}", serde_json::to_string_pretty(&todo)?),
            None => println!("Todo not found: {id}"),
        },
        TodoAction::Delete { id } => {
            if store.remove(&id)? {
                println!("Todo deleted: {id}");
            } else {
                println!("Todo not found: {id}");
            }
        }
    }
    Ok(())
}
