//! Profile commands.
//!
//! `set` autosaves without validation; `submit` runs the full field
//! validation against the stored profile and refuses an incomplete one.

use clap::Subcommand;
use studydesk_core::profile::ProfileStore;
use studydesk_core::storage::Database;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Print the stored profile as JSON
    Show,
    /// Update profile fields without validation (autosave)
    #[command(arg_required_else_help = true)]
    Set {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        zip: Option<String>,
        #[arg(long)]
        dob_month: Option<String>,
        #[arg(long)]
        dob_day: Option<String>,
        #[arg(long)]
        dob_year: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        linkedin: Option<String>,
        #[arg(long)]
        github: Option<String>,
        #[arg(long)]
        leetcode: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },
    /// Validate and save the stored profile
    Submit,
    /// Report validation problems without saving
    Check,
    /// Add a coding-platform link
    AddLink {
        /// Platform name (e.g. LeetCode, Codeforces)
        platform: String,
        /// Profile URL
        url: String,
    },
    /// Remove a link by its position in `links`
    RemoveLink {
        /// Zero-based link index
        index: usize,
    },
    /// List coding-platform links
    Links,
    /// Set the profile picture path
    SetPicture {
        /// Path to an image file
        path: String,
    },
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let store = ProfileStore::new(&db);

    match action {
        ProfileAction::Show => {
            println!("{}", serde_json::to_string_pretty(&store.get()?)?);
        }
        ProfileAction::Set {
            username,
            password,
            first_name,
            last_name,
            phone,
            email,
            address,
            country,
            state,
            city,
            zip,
            dob_month,
            dob_day,
            dob_year,
            gender,
            linkedin,
            github,
            leetcode,
            bio,
        } => {
            let mut profile = store.get()?;
            let fields = [
                (&mut profile.username, username),
                (&mut profile.password, password),
                (&mut profile.first_name, first_name),
                (&mut profile.last_name, last_name),
                (&mut profile.phone_number, phone),
                (&mut profile.email, email),
                (&mut profile.address, address),
                (&mut profile.country, country),
                (&mut profile.state, state),
                (&mut profile.city, city),
                (&mut profile.zip_code, zip),
                (&mut profile.dob.month, dob_month),
                (&mut profile.dob.day, dob_day),
                (&mut profile.dob.year, dob_year),
                (&mut profile.gender, gender),
                (&mut profile.linkedin, linkedin),
                (&mut profile.github, github),
                (&mut profile.leetcode, leetcode),
                (&mut profile.bio, bio),
            ];
            for (slot, value) in fields {
                if let Some(value) = value {
                    *slot = value;
                }
            }
            store.put(&profile)?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        ProfileAction::Submit => {
            store.submit(&store.get()?)?;
            println!("Profile saved");
        }
        ProfileAction::Check => {
            let errors = store.get()?.validate();
            if errors.is_empty() {
                println!("Profile is complete");
            } else {
                for error in errors {
                    println!("{error}");
                }
            }
        }
        ProfileAction::AddLink { platform, url } => {
            store.add_link(&platform, &url)?;
            println!("Link added: {platform}");
        }
        ProfileAction::RemoveLink { index } => {
            if store.remove_link(index)? {
                println!("Link removed: {index}");
            } else {
                println!("No link at index {index}");
            }
        }
        ProfileAction::Links => {
            println!("{}", serde_json::to_string_pretty(&store.links()?)?);
        }
        ProfileAction::SetPicture { path } => {
            store.set_picture(&path)?;
            println!("Picture set: {path}");
        }
    }
    Ok(())
}
