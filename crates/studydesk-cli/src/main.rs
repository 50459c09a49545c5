use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;

#[derive(Parser)]
#[command(name = "studydesk", version, about = "Studydesk CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pomodoro countdown
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Habit tracking
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// To-do list
    Todo {
        #[command(subcommand)]
        action: commands::todo::TodoAction,
    },
    /// Study resource library
    Resource {
        #[command(subcommand)]
        action: commands::resource::ResourceAction,
    },
    /// Daily journal
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Exams, assignments and study sessions
    Calendar {
        #[command(subcommand)]
        action: commands::calendar::CalendarAction,
    },
    /// Learning roadmaps
    Roadmap {
        #[command(subcommand)]
        action: commands::roadmap::RoadmapAction,
    },
    /// User profile
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Daily summary and a motivational quote
    Dashboard,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Todo { action } => commands::todo::run(action),
        Commands::Resource { action } => commands::resource::run(action),
        Commands::Journal { action } => commands::journal::run(action),
        Commands::Calendar { action } => commands::calendar::run(action),
        Commands::Roadmap { action } => commands::roadmap::run(action),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Dashboard => commands::dashboard::run(),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "studydesk",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
