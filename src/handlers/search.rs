use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::router::AppState;
use crate::search::RecipeSummary;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_number")]
    pub number: u32,
}

fn default_number() -> u32 {
    10
}

/// Gateway failures never become HTTP error statuses on this route: they are
/// returned as the structured `{error}` body.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Recipes { recipes: Vec<RecipeSummary> },
    Error { error: String },
}

pub async fn search_recipes_handler(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Json<SearchResponse> {
    match state.search.search(&req.query, req.number).await {
        Ok(recipes) => Json(SearchResponse::Recipes { recipes }),
        Err(e) => {
            warn!(query = %req.query, error = %e, "recipe search failed");
            Json(SearchResponse::Error {
                error: e.to_string(),
            })
        }
    }
}
