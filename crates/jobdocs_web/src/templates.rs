use askama::Template;
use axum::http::StatusCode;
use axum::response::Html;
use jobdocs_core::{Category, Document};

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage;

#[derive(Template)]
#[template(path = "documents.html")]
pub struct DocumentListPage {
    pub documents: Vec<Document>,
    pub category: String,
    pub categories: &'static [Category],
}

#[derive(Template)]
#[template(path = "document_detail.html")]
pub struct DocumentDetailPage {
    pub document: Document,
}

#[derive(Template)]
#[template(path = "document_edit.html")]
pub struct DocumentEditPage {
    pub document: Document,
    pub categories: &'static [Category],
}

#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsPage;

#[derive(Template)]
#[template(path = "feature-demo.html")]
pub struct FeatureDemoPage;

pub fn render<T: Template>(page: T) -> Result<Html<String>, (StatusCode, String)> {
    match page.render() {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            tracing::error!("Template rendering failed: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ))
        }
    }
}
