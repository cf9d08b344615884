pub mod error;
pub mod models;

// Re-export common types for convenience
pub use error::{Error, Result};
pub use models::category::Category;
pub use models::document::Document;
