use anyhow::{bail, Result};
use clap::Args;
use sqlx::SqlitePool;

use jobdocs_db::DocumentRepository;

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// The id of the document to delete
    #[arg(short, long)]
    pub id: i64,

    /// Confirm the deletion
    #[arg(long)]
    pub yes: bool,
}

pub async fn execute(pool: SqlitePool, args: RemoveArgs) -> Result<()> {
    if !args.yes {
        bail!("Refusing to delete document {} without --yes", args.id);
    }

    let repo = DocumentRepository::new(pool);
    repo.delete(args.id).await?;

    println!("🗑️  Deleted document {}", args.id);
    Ok(())
}
