//! Thin REST wrappers over the persistence layer. No extra validation here:
//! constraint checks belong to the storage engine and surface as the error
//! envelope (404 not found, 409 integrity).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::db::{
    CalendarEntry, CalendarEntryPatch, Ingredient, IngredientPatch, NewCalendarEntry,
    NewIngredient, NewRecipe, Recipe, RecipePatch, User, UserPatch,
};
use crate::error::AppError;
use crate::router::AppState;

#[derive(Debug, Serialize)]
pub struct Created {
    pub id: i32,
}

// ---- users (created via /signup, so only update/remove here) ----

pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<User>, AppError> {
    Ok(Json(state.db.update_user(id, patch).await?))
}

pub async fn remove_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.db.remove_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---- recipes ----

pub async fn add_recipe_handler(
    State(state): State<AppState>,
    Json(recipe): Json<NewRecipe>,
) -> Result<(StatusCode, Json<Created>), AppError> {
    let id = state.db.add_recipe(recipe).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

pub async fn update_recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<RecipePatch>,
) -> Result<Json<Recipe>, AppError> {
    Ok(Json(state.db.update_recipe(id, patch).await?))
}

pub async fn remove_recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.db.remove_recipe(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---- ingredients ----

pub async fn add_ingredient_handler(
    State(state): State<AppState>,
    Json(ingredient): Json<NewIngredient>,
) -> Result<(StatusCode, Json<Created>), AppError> {
    let id = state.db.add_ingredient(ingredient).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

pub async fn update_ingredient_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<IngredientPatch>,
) -> Result<Json<Ingredient>, AppError> {
    Ok(Json(state.db.update_ingredient(id, patch).await?))
}

pub async fn remove_ingredient_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.db.remove_ingredient(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---- calendar entries ----

pub async fn add_calendar_entry_handler(
    State(state): State<AppState>,
    Json(entry): Json<NewCalendarEntry>,
) -> Result<(StatusCode, Json<Created>), AppError> {
    let id = state.db.add_calendar_entry(entry).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

pub async fn update_calendar_entry_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<CalendarEntryPatch>,
) -> Result<Json<CalendarEntry>, AppError> {
    Ok(Json(state.db.update_calendar_entry(id, patch).await?))
}

pub async fn remove_calendar_entry_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.db.remove_calendar_entry(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
