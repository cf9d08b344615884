use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::Form;
use sqlx::sqlite::SqlitePoolOptions;

use jobdocs_db::{schema, DocumentRepository};
use jobdocs_web::handlers::{assets, documents, pages};
use jobdocs_web::handlers::documents::{EditForm, ListQuery};
use jobdocs_web::state::AppState;

async fn test_state() -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");

    schema::rebuild_database(&pool)
        .await
        .expect("Failed to apply schema");

    AppState { pool }
}

#[tokio::test]
async fn home_settings_and_demo_render_without_data_access() {
    let home = pages::home().await.unwrap();
    assert!(home.0.contains("Welcome to jobdocs"));

    let settings = pages::settings().await.unwrap();
    assert!(settings.0.contains("Settings"));

    let demo = pages::feature_demo().await.unwrap();
    assert!(demo.0.contains("Feature demo"));
}

#[tokio::test]
async fn list_filters_by_category() {
    let state = test_state().await;
    let repo = DocumentRepository::new(state.pool.clone());
    repo.create("Resume A", "resume", "...").await.unwrap();
    repo.create("Letter B", "cover_letter", "...").await.unwrap();

    let page = documents::list_documents(
        State(state.clone()),
        Query(ListQuery {
            category: Some("resume".to_string()),
        }),
    )
    .await
    .unwrap();
    assert!(page.0.contains("Resume A"));
    assert!(!page.0.contains("Letter B"));

    let page = documents::list_documents(
        State(state.clone()),
        Query(ListQuery {
            category: Some("other".to_string()),
        }),
    )
    .await
    .unwrap();
    assert!(!page.0.contains("Resume A"));

    // Absent filter lists everything
    let page = documents::list_documents(State(state), Query(ListQuery { category: None }))
        .await
        .unwrap();
    assert!(page.0.contains("Resume A"));
    assert!(page.0.contains("Letter B"));
}

#[tokio::test]
async fn detail_of_unknown_id_is_404() {
    let state = test_state().await;

    let err = documents::document_detail(State(state), Path(9999))
        .await
        .unwrap_err();
    assert_eq!(err.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn edit_form_of_unknown_id_is_404() {
    let state = test_state().await;

    let err = documents::edit_document_form(State(state), Path(123))
        .await
        .unwrap_err();
    assert_eq!(err.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn edit_submit_redirects_to_detail_and_persists() {
    let state = test_state().await;
    let repo = DocumentRepository::new(state.pool.clone());
    let created = repo.create("Old Title", "resume", "body").await.unwrap();

    let response = documents::edit_document_submit(
        State(state.clone()),
        Path(created.id),
        Form(EditForm {
            title: "New Title".to_string(),
            category: "resume".to_string(),
            content: "body".to_string(),
        }),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    let location = response.headers().get(header::LOCATION).unwrap();
    assert_eq!(
        location.to_str().unwrap(),
        format!("/documents/{}/", created.id)
    );

    let detail = documents::document_detail(State(state), Path(created.id))
        .await
        .unwrap();
    assert!(detail.0.contains("New Title"));
}

#[tokio::test]
async fn edit_submit_of_unknown_id_is_404() {
    let state = test_state().await;

    let err = documents::edit_document_submit(
        State(state),
        Path(9999),
        Form(EditForm {
            title: "t".to_string(),
            category: "c".to_string(),
            content: "b".to_string(),
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn edit_submit_accepts_unknown_category_verbatim() {
    let state = test_state().await;
    let repo = DocumentRepository::new(state.pool.clone());
    let created = repo.create("Doc", "resume", "body").await.unwrap();

    documents::edit_document_submit(
        State(state.clone()),
        Path(created.id),
        Form(EditForm {
            title: "Doc".to_string(),
            category: "unknown_value".to_string(),
            content: "body".to_string(),
        }),
    )
    .await
    .unwrap();

    let stored = repo.get_by_id(created.id).await.unwrap();
    assert_eq!(stored.category, "unknown_value");
}

#[tokio::test]
async fn empty_form_fields_default_to_empty_strings() {
    // The wire behavior: a form body missing fields deserializes with
    // empty-string defaults and is persisted silently.
    let form: EditForm = serde_urlencoded::from_str("title=Only+Title").unwrap();
    assert_eq!(form.title, "Only Title");
    assert_eq!(form.category, "");
    assert_eq!(form.content, "");
}

#[tokio::test]
async fn static_assets_are_served_with_content_types() {
    let ok = assets::static_asset(Path("style.css".to_string())).await;
    assert_eq!(ok.status(), StatusCode::OK);
    assert_eq!(
        ok.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/css; charset=utf-8"
    );

    let missing = assets::static_asset(Path("nope.css".to_string())).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_check_answers() {
    assert_eq!(pages::health_check().await, "OK");
}
