//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and the insert/patch shapes
//! - `schema.rs`: SQL DDL for initializing the database (PostgreSQL)
//! - `postgres.rs`: pool owner with per-entity CRUD, one transaction per call

pub mod models;
pub mod postgres;
pub mod schema;

pub use models::{
    CalendarEntry, CalendarEntryPatch, Ingredient, IngredientPatch, NewCalendarEntry,
    NewIngredient, NewRecipe, NewUser, Recipe, RecipePatch, User, UserPatch,
};
pub use postgres::Database;
pub use schema::POSTGRES_INIT;
