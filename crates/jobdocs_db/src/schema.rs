use jobdocs_core::{Error, Result};
use rust_embed::RustEmbed;
use sqlx::SqlitePool;
use std::str;

#[derive(RustEmbed)]
#[folder = "schema/"]
struct SchemaAssets;

/// Reads the build order and applies all SQL files in a single transaction.
///
/// Every statement is idempotent (`CREATE ... IF NOT EXISTS`), so this is
/// safe to run against a populated database on every startup.
pub async fn rebuild_database(pool: &SqlitePool) -> Result<()> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| Error::Database(e.to_string()))?;

    // 1. Read the Manifest
    let manifest = get_file_content("00_build_order.sql")
        .ok_or_else(|| Error::Database("Missing 00_build_order.sql".to_string()))?;

    // 2. Parse and Aggregate SQL
    let mut full_script = String::new();

    for line in manifest.lines() {
        let trimmed = line.trim();

        // Parse: -- @include file.sql
        if let Some(path) = parse_include_directive(trimmed) {
            let content = get_file_content(path)
                .ok_or_else(|| Error::Database(format!("Missing included file: {path}")))?;
            full_script.push_str(&content);
            full_script.push('\n');
        } else if !trimmed.starts_with("--") {
            // Keep normal lines (if any), ignore comments
            full_script.push_str(line);
            full_script.push('\n');
        }
    }

    // 3. Execute
    sqlx::raw_sql(full_script.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| Error::Database(e.to_string()))?;

    tx.commit()
        .await
        .map_err(|e| Error::Database(e.to_string()))?;

    Ok(())
}

fn get_file_content(path: &str) -> Option<String> {
    SchemaAssets::get(path).and_then(|f| str::from_utf8(f.data.as_ref()).ok().map(String::from))
}

fn parse_include_directive(line: &str) -> Option<&str> {
    if line.starts_with("--") && line.contains("@include") {
        line.split_whitespace().last()
    } else {
        None
    }
}
