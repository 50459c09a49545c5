//! Study resource library commands.

use clap::Subcommand;
use studydesk_core::resources::ResourceStore;
use studydesk_core::storage::Database;
use studydesk_core::todos::Priority;

#[derive(Subcommand)]
pub enum ResourceAction {
    /// Add a resource
    Add {
        /// Resource title
        title: String,
        /// Resource URL
        url: String,
        /// Category (default: General; unseen categories are registered)
        #[arg(long, default_value = "")]
        category: String,
        /// Priority: low, medium or high
        #[arg(long, default_value = "low")]
        priority: Priority,
    },
    /// List resources as JSON
    List {
        /// Only resources in this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete a resource
    Delete {
        /// Resource ID
        id: String,
    },
    /// List categories
    Categories,
    /// Add a category
    AddCategory {
        /// Category name
        name: String,
    },
    /// Rename a category, moving its resources along
    RenameCategory {
        /// Current name
        old: String,
        /// New name
        new: String,
    },
    /// Delete a category, reassigning its resources to General
    DeleteCategory {
        /// Category name
        name: String,
    },
}

pub fn run(action: ResourceAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let store = ResourceStore::new(&db);

    match action {
        ResourceAction::Add {
            title,
            url,
            category,
            priority,
        } => {
            let resource = store.add(&title, &url, &category, priority)?;
            println!("Resource created: {}", resource.id);
            println!("{}", serde_json::to_string_pretty(&resource)?);
        }
        ResourceAction::List { category } => {
            let resources = store.list(category.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&resources)?);
        }
        ResourceAction::Delete { id } => {
            if store.remove(&id)? {
                println!("Resource deleted: {id}");
            } else {
                println!("Resource not found: {id}");
            }
        }
        ResourceAction::Categories => {
            for category in store.categories()? {
                println!("{category}");
            }
        }
        ResourceAction::AddCategory { name } => {
            store.add_category(&name)?;
            println!("Category added: {name}");
        }
        ResourceAction::RenameCategory { old, new } => {
            store.rename_category(&old, &new)?;
            println!("Category renamed: {old} -> {new}");
        }
        ResourceAction::DeleteCategory { name } => {
            store.delete_category(&name)?;
            println!("Category deleted: {name}");
        }
    }
    Ok(())
}
