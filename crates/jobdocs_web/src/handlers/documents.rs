use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;

use jobdocs_core::{Category, Error};
use jobdocs_db::DocumentRepository;

use crate::state::AppState;
use crate::templates::{render, DocumentDetailPage, DocumentEditPage, DocumentListPage};

/// Query parameters for the list page. Absent filter means "all".
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

/// Form body for the edit POST. Missing fields default to the empty
/// string and are persisted as-is; the only rejected input is an
/// unknown document id.
#[derive(Debug, Deserialize)]
pub struct EditForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub content: String,
}

pub async fn list_documents(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    let repo = DocumentRepository::new(state.pool);
    let category = query.category.unwrap_or_default();

    match repo.list_by_category(&category).await {
        Ok(documents) => render(DocumentListPage {
            documents,
            category,
            categories: &Category::ALL,
        }),
        Err(e) => {
            tracing::error!("Failed to list documents: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ))
        }
    }
}

pub async fn document_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, (StatusCode, String)> {
    let repo = DocumentRepository::new(state.pool);

    match repo.get_by_id(id).await {
        Ok(document) => render(DocumentDetailPage { document }),
        Err(Error::NotFound(_)) => {
            Err((StatusCode::NOT_FOUND, format!("Document not found: {id}")))
        }
        Err(e) => {
            tracing::error!("Failed to fetch document {}: {:?}", id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ))
        }
    }
}

pub async fn edit_document_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, (StatusCode, String)> {
    let repo = DocumentRepository::new(state.pool);

    match repo.get_by_id(id).await {
        Ok(document) => render(DocumentEditPage {
            document,
            categories: &Category::ALL,
        }),
        Err(Error::NotFound(_)) => {
            Err((StatusCode::NOT_FOUND, format!("Document not found: {id}")))
        }
        Err(e) => {
            tracing::error!("Failed to fetch document {}: {:?}", id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ))
        }
    }
}

pub async fn edit_document_submit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<EditForm>,
) -> Result<Response, (StatusCode, String)> {
    let repo = DocumentRepository::new(state.pool);

    match repo
        .update(id, &form.title, &form.category, &form.content)
        .await
    {
        Ok(document) => Ok(redirect_to_detail(document.id)),
        Err(Error::NotFound(_)) => {
            Err((StatusCode::NOT_FOUND, format!("Document not found: {id}")))
        }
        Err(e) => {
            tracing::error!("Failed to update document {}: {:?}", id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ))
        }
    }
}

// The route contract is a plain 302 Found; axum's Redirect helpers emit
// 303/307, so build the response directly.
fn redirect_to_detail(id: i64) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, format!("/documents/{id}/"))],
        "",
    )
        .into_response()
}
