use axum::routing::get;
use axum::Router;

use crate::handlers::{assets, documents, pages};
use crate::state::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/documents/", get(documents::list_documents))
        .route("/documents/{id}/", get(documents::document_detail))
        .route(
            "/documents/{id}/edit/",
            get(documents::edit_document_form).post(documents::edit_document_submit),
        )
        .route("/settings/", get(pages::settings))
        .route("/feature-demo/", get(pages::feature_demo))
        .route("/health", get(pages::health_check))
        .route("/static/{*path}", get(assets::static_asset))
        .with_state(state)
}
