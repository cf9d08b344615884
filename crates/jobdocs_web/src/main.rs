use sqlx::sqlite::SqlitePoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use jobdocs_web::config::Config;
use jobdocs_web::routes::app_router;
use jobdocs_web::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1. Load Config
    let config = Config::from_env();

    // 2. Connect to the database
    tracing::info!("Connecting to {}", config.database_url);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    // 3. Ensure Schema Integrity (Build Order Architecture)
    // The server carries the schema blueprint and enforces it on startup.
    jobdocs_db::schema::rebuild_database(&pool).await?;

    // 4. Serve
    let app = app_router(AppState { pool });

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
