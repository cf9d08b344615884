// crates/jobdocs_cli/src/main.rs
use clap::{Parser, Subcommand};
use sqlx::sqlite::SqlitePoolOptions;

use jobdocs_cli::commands;
use jobdocs_cli::config::Config;

#[derive(Parser)]
#[command(name = "jobdocs")]
#[command(about = "Operator console for the jobdocs document store", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the database schema from embedded assets
    Rebuild,

    /// Add a new document to the store
    AddDoc(commands::add_doc::AddDocArgs),

    /// List documents, optionally filtered by category
    List(commands::list::ListArgs),

    /// Show one document in full
    Show(commands::show::ShowArgs),

    /// Delete a document
    Remove(commands::remove::RemoveArgs),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load Config (Fails fast if invalid)
    let config = Config::from_env()?;

    // 2. Parse arguments and route to the correct command
    let cli = Cli::parse();

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    match cli.command {
        Commands::Rebuild => commands::rebuild::execute(pool).await?,
        Commands::AddDoc(args) => commands::add_doc::execute(pool, args).await?,
        Commands::List(args) => commands::list::execute(pool, args).await?,
        Commands::Show(args) => commands::show::execute(pool, args).await?,
        Commands::Remove(args) => commands::remove::execute(pool, args).await?,
    }

    Ok(())
}
