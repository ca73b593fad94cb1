use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use todo_core::{Item, NewItem};
use tracing::{debug, info};

use crate::{error::ApiError, AppState};

pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Item>> {
    let items = state.store.list();
    debug!(count = items.len(), "todos listed");
    Json(items)
}

/// Decodes the body as JSON whatever its `Content-Type`, so clients that
/// post plain text still work.
pub async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Item>, ApiError> {
    let input: NewItem = serde_json::from_slice(&body).map_err(|_| ApiError::InvalidBody)?;
    let item = state.store.add(input);
    info!(id = item.id, "todo created");
    Ok(Json(item))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw)?;
    if state.store.remove(id) {
        info!(id, "todo removed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(id))
    }
}

/// Serves `index.html` from the static directory, re-read on every request.
/// The file is sent as raw bytes; its encoding is not checked.
pub async fn index(State(state): State<AppState>) -> Result<Html<Vec<u8>>, ApiError> {
    let path = state.static_dir.join("index.html");
    let page = tokio::fs::read(&path)
        .await
        .map_err(|e| ApiError::Internal(format!("{}: {e}", path.display())))?;
    debug!(bytes = page.len(), "landing page served");
    Ok(Html(page))
}

/// Accepts plain decimal digits only; signs, whitespace and overflow are
/// rejected.
fn parse_id(raw: &str) -> Result<u64, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::InvalidId(raw.to_string()));
    }
    raw.parse().map_err(|_| ApiError::InvalidId(raw.to_string()))
}
