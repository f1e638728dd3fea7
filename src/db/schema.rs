//! SQL DDL for initializing the recipe-planning tables.
//! Idempotent: creates tables if absent, never alters existing schema.

/// PostgreSQL schema:
/// - `users`: unique username and email, argon2 hash only (never plaintext)
/// - `recipes`: per-user favorites; ingredient/intolerance/nutrition lists as TEXT[]
/// - `ingredients`: kitchen inventory reference data
/// - `calendar_entries`: a recipe scheduled on a date for a user
///
/// Foreign keys are `ON DELETE RESTRICT` on purpose: deleting a user or recipe
/// with dependents fails the delete instead of orphaning rows.
pub const POSTGRES_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    user_id SERIAL PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS recipes (
    recipe_id SERIAL PRIMARY KEY,
    recipe_name TEXT NOT NULL UNIQUE,
    recipe_ingredients TEXT[] NOT NULL,
    recipe_intolerances TEXT[] NOT NULL,
    recipe_nutrition TEXT[] NOT NULL,
    recipe_type TEXT NOT NULL,
    user_id INTEGER NOT NULL REFERENCES users(user_id) ON DELETE RESTRICT
);

CREATE TABLE IF NOT EXISTS ingredients (
    ingredient_id SERIAL PRIMARY KEY,
    ingredient_name TEXT NOT NULL UNIQUE,
    ingredient_type TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS calendar_entries (
    schedule_id SERIAL PRIMARY KEY,
    scheduled_date DATE NOT NULL,
    scheduled_recipe_id INTEGER NOT NULL REFERENCES recipes(recipe_id) ON DELETE RESTRICT,
    user_id INTEGER NOT NULL REFERENCES users(user_id) ON DELETE RESTRICT
);
"#;
