use anyhow::Result;
use sqlx::SqlitePool;

pub async fn execute(pool: SqlitePool) -> Result<()> {
    println!("🔄 Applying schema from embedded assets...");
    jobdocs_db::schema::rebuild_database(&pool).await?;
    println!("✅ Schema is up to date.");
    Ok(())
}
