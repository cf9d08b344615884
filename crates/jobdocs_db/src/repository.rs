use chrono::Utc;
use jobdocs_core::models::document::Document;
use jobdocs_core::{Error, Result};
use sqlx::SqlitePool;

pub struct DocumentRepository {
    pool: SqlitePool,
}

impl DocumentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Every document, most recently modified first.
    pub async fn list_all(&self) -> Result<Vec<Document>> {
        let documents = sqlx::query_as::<_, Document>(
            r#"
            SELECT id, title, category, content, created_at, updated_at
            FROM documents
            ORDER BY updated_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))?;

        Ok(documents)
    }

    /// Documents whose category exactly equals `category` (case-sensitive).
    /// An empty filter behaves like `list_all`.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Document>> {
        if category.is_empty() {
            return self.list_all().await;
        }

        let documents = sqlx::query_as::<_, Document>(
            r#"
            SELECT id, title, category, content, created_at, updated_at
            FROM documents
            WHERE category = ?1
            ORDER BY updated_at DESC
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))?;

        Ok(documents)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Document> {
        let document = sqlx::query_as::<_, Document>(
            r#"
            SELECT id, title, category, content, created_at, updated_at
            FROM documents
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))?;

        document.ok_or(Error::NotFound(id))
    }

    /// Persists a new document with both timestamps set to now.
    /// The category string is stored verbatim, no vocabulary check.
    pub async fn create(&self, title: &str, category: &str, content: &str) -> Result<Document> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO documents (title, category, content, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(title)
        .bind(category)
        .bind(content)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    /// Overwrites the three mutable fields and refreshes `updated_at`.
    /// `created_at` is never touched after creation.
    pub async fn update(
        &self,
        id: i64,
        title: &str,
        category: &str,
        content: &str,
    ) -> Result<Document> {
        // Load first so a missing id surfaces as NotFound, not a no-op write
        self.get_by_id(id).await?;

        let now = Utc::now();

        sqlx::query(
            r#"
            UPDATE documents
            SET title = ?1, category = ?2, content = ?3, updated_at = ?4
            WHERE id = ?5
            "#,
        )
        .bind(title)
        .bind(category)
        .bind(content)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))?;

        self.get_by_id(id).await
    }

    /// Removes a document. Operator-tool capability, no web handler calls this.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM documents WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(id));
        }

        Ok(())
    }
}
