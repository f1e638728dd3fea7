use sqlx::postgres::PgPoolOptions;
use sqlx::{Error as SqlxError, PgPool};
use tracing::debug;

use crate::config::DatabaseConfig;
use crate::db::models::{
    CalendarEntry, CalendarEntryPatch, Ingredient, IngredientPatch, NewCalendarEntry,
    NewIngredient, NewRecipe, NewUser, Recipe, RecipePatch, User, UserPatch,
};
use crate::db::schema::POSTGRES_INIT;
use crate::error::AppError;

/// Owner of the connection pool and the four entity tables.
///
/// Every operation begins a fresh transaction, commits exactly once on
/// success, and lets the transaction guard's drop roll back on any error
/// path. The connection returns to the pool unconditionally either way, so
/// nothing is ever held across requests.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build the pool from `POSTGRES_*` configuration and verify connectivity.
    pub async fn connect(cfg: &DatabaseConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&cfg.url()?)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    /// Idempotent: every statement is CREATE ... IF NOT EXISTS.
    pub async fn init_schema(&self) -> Result<(), AppError> {
        for stmt in POSTGRES_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        debug!("database schema initialized");
        Ok(())
    }

    // ---- users ----

    pub async fn add_user(&self, user: NewUser) -> Result<i32, AppError> {
        let mut tx = self.pool.begin().await?;
        let (user_id,): (i32,) = sqlx::query_as(
            r#"INSERT INTO users (username, email, password_hash)
               VALUES ($1, $2, $3)
               RETURNING user_id"#,
        )
        .bind(user.username)
        .bind(user.email)
        .bind(user.password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(constraint_to_integrity)?;
        tx.commit().await?;
        Ok(user_id)
    }

    pub async fn update_user(&self, user_id: i32, patch: UserPatch) -> Result<User, AppError> {
        let mut tx = self.pool.begin().await?;
        let user: Option<User> = sqlx::query_as(
            r#"UPDATE users SET
                username = COALESCE($2, username),
                email = COALESCE($3, email),
                password_hash = COALESCE($4, password_hash)
               WHERE user_id = $1
               RETURNING user_id, username, email, password_hash"#,
        )
        .bind(user_id)
        .bind(patch.username)
        .bind(patch.email)
        .bind(patch.password_hash)
        .fetch_optional(&mut *tx)
        .await
        .map_err(constraint_to_integrity)?;
        let user = user.ok_or(AppError::NotFound {
            entity: "user",
            id: user_id,
        })?;
        tx.commit().await?;
        Ok(user)
    }

    pub async fn remove_user(&self, user_id: i32) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(constraint_to_integrity)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound {
                entity: "user",
                id: user_id,
            });
        }
        tx.commit().await?;
        Ok(())
    }

    // ---- recipes ----

    pub async fn add_recipe(&self, recipe: NewRecipe) -> Result<i32, AppError> {
        let mut tx = self.pool.begin().await?;
        let (recipe_id,): (i32,) = sqlx::query_as(
            r#"INSERT INTO recipes (
                recipe_name, recipe_ingredients, recipe_intolerances,
                recipe_nutrition, recipe_type, user_id
               ) VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING recipe_id"#,
        )
        .bind(recipe.recipe_name)
        .bind(recipe.recipe_ingredients)
        .bind(recipe.recipe_intolerances)
        .bind(recipe.recipe_nutrition)
        .bind(recipe.recipe_type)
        .bind(recipe.user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(constraint_to_integrity)?;
        tx.commit().await?;
        Ok(recipe_id)
    }

    pub async fn update_recipe(
        &self,
        recipe_id: i32,
        patch: RecipePatch,
    ) -> Result<Recipe, AppError> {
        let mut tx = self.pool.begin().await?;
        let recipe: Option<Recipe> = sqlx::query_as(
            r#"UPDATE recipes SET
                recipe_name = COALESCE($2, recipe_name),
                recipe_ingredients = COALESCE($3, recipe_ingredients),
                recipe_intolerances = COALESCE($4, recipe_intolerances),
                recipe_nutrition = COALESCE($5, recipe_nutrition),
                recipe_type = COALESCE($6, recipe_type)
               WHERE recipe_id = $1
               RETURNING recipe_id, recipe_name, recipe_ingredients,
                         recipe_intolerances, recipe_nutrition, recipe_type, user_id"#,
        )
        .bind(recipe_id)
        .bind(patch.recipe_name)
        .bind(patch.recipe_ingredients)
        .bind(patch.recipe_intolerances)
        .bind(patch.recipe_nutrition)
        .bind(patch.recipe_type)
        .fetch_optional(&mut *tx)
        .await
        .map_err(constraint_to_integrity)?;
        let recipe = recipe.ok_or(AppError::NotFound {
            entity: "recipe",
            id: recipe_id,
        })?;
        tx.commit().await?;
        Ok(recipe)
    }

    pub async fn remove_recipe(&self, recipe_id: i32) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM recipes WHERE recipe_id = $1")
            .bind(recipe_id)
            .execute(&mut *tx)
            .await
            .map_err(constraint_to_integrity)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound {
                entity: "recipe",
                id: recipe_id,
            });
        }
        tx.commit().await?;
        Ok(())
    }

    // ---- ingredients ----

    pub async fn add_ingredient(&self, ingredient: NewIngredient) -> Result<i32, AppError> {
        let mut tx = self.pool.begin().await?;
        let (ingredient_id,): (i32,) = sqlx::query_as(
            r#"INSERT INTO ingredients (ingredient_name, ingredient_type)
               VALUES ($1, $2)
               RETURNING ingredient_id"#,
        )
        .bind(ingredient.ingredient_name)
        .bind(ingredient.ingredient_type)
        .fetch_one(&mut *tx)
        .await
        .map_err(constraint_to_integrity)?;
        tx.commit().await?;
        Ok(ingredient_id)
    }

    pub async fn update_ingredient(
        &self,
        ingredient_id: i32,
        patch: IngredientPatch,
    ) -> Result<Ingredient, AppError> {
        let mut tx = self.pool.begin().await?;
        let ingredient: Option<Ingredient> = sqlx::query_as(
            r#"UPDATE ingredients SET
                ingredient_name = COALESCE($2, ingredient_name),
                ingredient_type = COALESCE($3, ingredient_type)
               WHERE ingredient_id = $1
               RETURNING ingredient_id, ingredient_name, ingredient_type"#,
        )
        .bind(ingredient_id)
        .bind(patch.ingredient_name)
        .bind(patch.ingredient_type)
        .fetch_optional(&mut *tx)
        .await
        .map_err(constraint_to_integrity)?;
        let ingredient = ingredient.ok_or(AppError::NotFound {
            entity: "ingredient",
            id: ingredient_id,
        })?;
        tx.commit().await?;
        Ok(ingredient)
    }

    pub async fn remove_ingredient(&self, ingredient_id: i32) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM ingredients WHERE ingredient_id = $1")
            .bind(ingredient_id)
            .execute(&mut *tx)
            .await
            .map_err(constraint_to_integrity)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound {
                entity: "ingredient",
                id: ingredient_id,
            });
        }
        tx.commit().await?;
        Ok(())
    }

    // ---- calendar entries ----

    pub async fn add_calendar_entry(&self, entry: NewCalendarEntry) -> Result<i32, AppError> {
        let mut tx = self.pool.begin().await?;
        let (schedule_id,): (i32,) = sqlx::query_as(
            r#"INSERT INTO calendar_entries (scheduled_date, scheduled_recipe_id, user_id)
               VALUES ($1, $2, $3)
               RETURNING schedule_id"#,
        )
        .bind(entry.scheduled_date)
        .bind(entry.scheduled_recipe_id)
        .bind(entry.user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(constraint_to_integrity)?;
        tx.commit().await?;
        Ok(schedule_id)
    }

    pub async fn update_calendar_entry(
        &self,
        schedule_id: i32,
        patch: CalendarEntryPatch,
    ) -> Result<CalendarEntry, AppError> {
        let mut tx = self.pool.begin().await?;
        let entry: Option<CalendarEntry> = sqlx::query_as(
            r#"UPDATE calendar_entries SET
                scheduled_date = COALESCE($2, scheduled_date),
                scheduled_recipe_id = COALESCE($3, scheduled_recipe_id)
               WHERE schedule_id = $1
               RETURNING schedule_id, scheduled_date, scheduled_recipe_id, user_id"#,
        )
        .bind(schedule_id)
        .bind(patch.scheduled_date)
        .bind(patch.scheduled_recipe_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(constraint_to_integrity)?;
        let entry = entry.ok_or(AppError::NotFound {
            entity: "calendar entry",
            id: schedule_id,
        })?;
        tx.commit().await?;
        Ok(entry)
    }

    pub async fn remove_calendar_entry(&self, schedule_id: i32) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM calendar_entries WHERE schedule_id = $1")
            .bind(schedule_id)
            .execute(&mut *tx)
            .await
            .map_err(constraint_to_integrity)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound {
                entity: "calendar entry",
                id: schedule_id,
            });
        }
        tx.commit().await?;
        Ok(())
    }
}

/// Map uniqueness (23505) and foreign-key (23503) violations to `Integrity`;
/// everything else stays a plain database error.
fn constraint_to_integrity(e: SqlxError) -> AppError {
    if let SqlxError::Database(ref db_err) = e
        && let Some(code) = db_err.code()
        && (code == "23505" || code == "23503")
    {
        return AppError::Integrity(db_err.message().to_string());
    }
    AppError::Database(e)
}
