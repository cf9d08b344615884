use sqlx::SqlitePool;

/// Shared request state. The pool is the only process-wide handle; it is
/// injected here at startup and cloned into each handler, never reached
/// through a module-level global.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
