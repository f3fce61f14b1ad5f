//! Command-line client for the library catalog.
//!
//! Pages render to stdout; notifications, prompts and logs go to stderr.
//!
//! Commands:
//! - open: Load and render a page by path (`/`, `/books/5`, `/authors`, ...)
//! - add-book: Create a book
//! - save-book: Update a book
//! - delete-book: Delete a book
//! - add-comment: Comment on a book
//! - delete-comment: Delete a comment
//!
//! Configuration via environment:
//! - LIBRARY_URL: Backend base URL (default: http://localhost:8080)
//! - LIBRARY_LOCALE: UI language, `en` or `ru` (default: en)
//! - LOG_LEVEL: Log level when RUST_LOG is unset (default: info)
//! - LOADER_MIN_MS: Minimum loading time (default: 1000)
//! - NOTIFICATION_TIMEOUT_MS: Notification lifetime (default: 5000)

mod commands;
mod terminal;

use clap::{Parser, Subcommand};
use library_ui::{AppConfig, Locale};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commands::{
    AlreadyReported, Session,
    books::{AddBookArgs, DeleteBookArgs, SaveBookArgs},
    comments::{AddCommentArgs, DeleteCommentArgs},
    open::OpenArgs,
};

/// Library catalog client
#[derive(Parser)]
#[command(name = "library")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "LIBRARY_URL", global = true)]
    url: Option<String>,

    /// UI language (en, ru)
    #[arg(long, env = "LIBRARY_LOCALE", global = true)]
    locale: Option<Locale>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, env = "LOG_LEVEL", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and render a page
    Open(OpenArgs),

    /// Create a new book
    AddBook(AddBookArgs),

    /// Update an existing book
    SaveBook(SaveBookArgs),

    /// Delete a book
    DeleteBook(DeleteBookArgs),

    /// Add a comment to a book
    AddComment(AddCommentArgs),

    /// Delete a comment
    DeleteComment(DeleteCommentArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log_level);
    tracing::debug!(base_url = %config.base_url, locale = %config.locale, "configuration loaded");

    let result = match Session::connect(&config) {
        Ok(session) => match cli.command {
            Commands::Open(args) => commands::open::execute(&session, args).await,
            Commands::AddBook(args) => commands::books::add(&session, args).await,
            Commands::SaveBook(args) => commands::books::save(&session, args).await,
            Commands::DeleteBook(args) => commands::books::delete(&session, args).await,
            Commands::AddComment(args) => commands::comments::add(&session, args).await,
            Commands::DeleteComment(args) => commands::comments::delete(&session, args).await,
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        if e.is::<AlreadyReported>() {
            tracing::debug!(error = %e, "exiting after reported failure");
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

/// Environment first, then command-line flags on top.
fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::from_env()?;
    if let Some(url) = &cli.url {
        config.base_url = url.clone();
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    Ok(config)
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
