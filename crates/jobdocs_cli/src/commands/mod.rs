pub mod add_doc;
pub mod list;
pub mod rebuild;
pub mod remove;
pub mod show;
