use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use tracing::error;

use crate::router::AppState;

/// Serve the application entry page for `/` and `/login`.
pub async fn entry_page_handler(
    State(state): State<AppState>,
) -> Result<Html<String>, StatusCode> {
    match tokio::fs::read_to_string(state.index_path.as_ref()).await {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            error!(path = %state.index_path.display(), error = %e, "entry page unavailable");
            Err(StatusCode::NOT_FOUND)
        }
    }
}
