use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok(); // Load .env if present

        Ok(Config {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
        })
    }
}
