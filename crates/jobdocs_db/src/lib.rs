pub mod repository;
pub mod schema;

// Re-export common types for convenience
pub use repository::DocumentRepository;
