use anyhow::{bail, Context, Result};
use clap::Args;
use sqlx::SqlitePool;
use std::path::PathBuf;

use jobdocs_core::Category;
use jobdocs_db::DocumentRepository;

#[derive(Debug, Args)]
pub struct AddDocArgs {
    /// Title of the document
    #[arg(short, long)]
    pub title: String,

    /// Category wire name (resume, cover_letter, other). Any string is
    /// accepted; the vocabulary is only a suggestion.
    #[arg(short, long, default_value = "other")]
    pub category: String,

    /// Inline document content
    #[arg(long, conflicts_with = "file")]
    pub content: Option<String>,

    /// Read document content from a text file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

pub async fn execute(pool: SqlitePool, args: AddDocArgs) -> Result<()> {
    let content = match (args.content, args.file) {
        (Some(content), _) => content,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {path:?}"))?,
        (None, None) => bail!("Provide either --content or --file"),
    };

    if Category::parse(&args.category).is_none() {
        println!(
            "⚠️  '{}' is not a suggested category; storing as-is",
            args.category
        );
    }

    let repo = DocumentRepository::new(pool);
    let doc = repo.create(&args.title, &args.category, &content).await?;

    println!("📄 Stored '{}' ({})", doc.title, doc.category);
    println!("   🔑 New Document ID: {}", doc.id);
    Ok(())
}
