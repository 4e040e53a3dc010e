use clap::{Parser, Subcommand};
use eyre::{Result, eyre};
use std::path::PathBuf;
use todostore::terminal::{ConsoleNotifier, ListRenderer, PromptConfirmer};
use todostore::{Config, Filter, Notifier, TaskId, TaskStore, TodoError};
use tracing::Level;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Task list manager - add, toggle, filter and delete dated tasks")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to a YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding stored tasks (overrides config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Locale for displayed dates, e.g. en_US or id-ID (overrides config)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Answer yes to confirmation prompts
    #[arg(short, long, global = true)]
    yes: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a task due on a date
    Add {
        /// Task text
        task: String,

        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
    },

    /// Mark a task done, or not done again
    Toggle { id: TaskId },

    /// Delete a task
    Delete { id: TaskId },

    /// Delete all tasks
    Clear,

    /// Show tasks
    List {
        /// Which tasks to show: all, active or completed
        #[arg(short, long, default_value_t = Filter::All)]
        filter: Filter,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.storage.path = Some(dir);
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }

    // Setup tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(log_level(&config, cli.verbose)?)
        .init();

    let storage = config.open_storage()?;
    let mut store = TaskStore::new(
        storage,
        PromptConfirmer::new(cli.yes),
        ConsoleNotifier::stderr(),
        ListRenderer::stdout(config.locale.clone()),
    )
    .with_key(config.storage.key.clone());
    store.initialize();

    match cli.command {
        Commands::Add { task, date } => {
            // Rejections were already shown by the notifier
            let _ = store.add(&task, &date);
        }
        Commands::Toggle { id } => {
            toggle_or_report(&mut store, &mut ConsoleNotifier::stderr(), id);
        }
        Commands::Delete { id } => {
            store.delete(id);
        }
        Commands::Clear => match store.delete_all() {
            Ok(_) | Err(TodoError::EmptyCollection) => {}
            Err(e) => return Err(e.into()),
        },
        Commands::List { filter } => {
            store.set_filter(filter);
        }
    }

    Ok(())
}

/// Toggle `id`, telling the user on the notifier when it does not exist
fn toggle_or_report(store: &mut TaskStore, notifier: &mut impl Notifier, id: TaskId) {
    if store.toggle(id).is_none() {
        notifier.notify(&format!("No task with id {}", id));
    }
}

fn log_level(config: &Config, verbose: u8) -> Result<Level> {
    match verbose {
        0 => config
            .log_level
            .parse()
            .map_err(|_| eyre!("Invalid log_level in config: {:?}", config.log_level)),
        1 => Ok(Level::DEBUG),
        _ => Ok(Level::TRACE),
    }
}
