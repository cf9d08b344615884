pub mod assets;
pub mod documents;
pub mod pages;
