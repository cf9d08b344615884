use axum::http::StatusCode;
use axum::response::Html;

use crate::templates::{render, FeatureDemoPage, HomePage, SettingsPage};

pub async fn home() -> Result<Html<String>, (StatusCode, String)> {
    render(HomePage)
}

pub async fn settings() -> Result<Html<String>, (StatusCode, String)> {
    render(SettingsPage)
}

pub async fn feature_demo() -> Result<Html<String>, (StatusCode, String)> {
    render(FeatureDemoPage)
}

pub async fn health_check() -> &'static str {
    "OK"
}
