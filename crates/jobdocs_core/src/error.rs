use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Document not found: {0}")]
    NotFound(i64),
}

pub type Result<T> = std::result::Result<T, Error>;
