use serde::{Deserialize, Serialize};

/// The suggested classification vocabulary for documents.
///
/// This drives the edit-form dropdown and the list filter links. It is
/// not enforced at the storage boundary: the repository persists any
/// string handed to it, matching the permissive behavior of the original
/// application.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Resume,
    CoverLetter,
    Other,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Resume, Category::CoverLetter, Category::Other];

    /// Wire name, as stored in the `category` column and used in the
    /// `?category=` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Resume => "resume",
            Category::CoverLetter => "cover_letter",
            Category::Other => "other",
        }
    }

    /// Display label for templates and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Resume => "Resume",
            Category::CoverLetter => "Cover letter",
            Category::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Category> {
        match value {
            "resume" => Some(Category::Resume),
            "cover_letter" => Some(Category::CoverLetter),
            "other" => Some(Category::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
