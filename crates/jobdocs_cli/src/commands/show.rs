use anyhow::Result;
use clap::Args;
use sqlx::SqlitePool;

use jobdocs_db::DocumentRepository;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// The id of the document to display
    #[arg(short, long)]
    pub id: i64,
}

pub async fn execute(pool: SqlitePool, args: ShowArgs) -> Result<()> {
    let repo = DocumentRepository::new(pool);
    let doc = repo.get_by_id(args.id).await?;

    println!("📄 Document {}", doc.id);
    println!("   Title:    {}", doc.title);
    println!("   Category: {} ({})", doc.category, doc.category_label());
    println!("   Created:  {}", doc.created_at.format("%Y-%m-%d %H:%M:%S"));
    println!("   Updated:  {}", doc.updated_at.format("%Y-%m-%d %H:%M:%S"));
    println!("---");
    println!("{}", doc.content);

    Ok(())
}
