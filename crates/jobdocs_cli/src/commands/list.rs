use anyhow::Result;
use clap::Args;
use sqlx::SqlitePool;

use jobdocs_db::DocumentRepository;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show documents in this category
    #[arg(short, long)]
    pub category: Option<String>,
}

pub async fn execute(pool: SqlitePool, args: ListArgs) -> Result<()> {
    let repo = DocumentRepository::new(pool);
    let category = args.category.unwrap_or_default();
    let documents = repo.list_by_category(&category).await?;

    if documents.is_empty() {
        println!("📭 No documents found.");
        return Ok(());
    }

    println!("📄 {} document(s):", documents.len());
    println!("{:>6}  {:<30} {:<14} {}", "ID", "TITLE", "CATEGORY", "UPDATED");
    for doc in &documents {
        println!(
            "{:>6}  {:<30} {:<14} {}",
            doc.id,
            doc.title,
            doc.category,
            doc.updated_at.format("%Y-%m-%d %H:%M")
        );
    }

    Ok(())
}
