use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::db::Database;
use crate::handlers::{entities, pages, search, signup};
use crate::search::RecipeSearchGateway;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub search: Arc<RecipeSearchGateway>,
    pub index_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(db: Database, search: RecipeSearchGateway, index_path: PathBuf) -> Self {
        Self {
            db,
            search: Arc::new(search),
            index_path: Arc::new(index_path),
        }
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::entry_page_handler))
        .route("/login", get(pages::entry_page_handler))
        .route("/signup", post(signup::signup_handler))
        .route("/search-recipes", post(search::search_recipes_handler))
        .route(
            "/users/{id}",
            patch(entities::update_user_handler).delete(entities::remove_user_handler),
        )
        .route("/recipes", post(entities::add_recipe_handler))
        .route(
            "/recipes/{id}",
            patch(entities::update_recipe_handler).delete(entities::remove_recipe_handler),
        )
        .route("/ingredients", post(entities::add_ingredient_handler))
        .route(
            "/ingredients/{id}",
            patch(entities::update_ingredient_handler)
                .delete(entities::remove_ingredient_handler),
        )
        .route("/calendar", post(entities::add_calendar_entry_handler))
        .route(
            "/calendar/{id}",
            patch(entities::update_calendar_entry_handler)
                .delete(entities::remove_calendar_entry_handler),
        )
        .with_state(state)
}
