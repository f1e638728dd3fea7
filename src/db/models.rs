use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Recipe {
    pub recipe_id: i32,
    pub recipe_name: String,
    pub recipe_ingredients: Vec<String>,
    pub recipe_intolerances: Vec<String>,
    pub recipe_nutrition: Vec<String>,
    pub recipe_type: String,
    pub user_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Ingredient {
    pub ingredient_id: i32,
    pub ingredient_name: String,
    pub ingredient_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct CalendarEntry {
    pub schedule_id: i32,
    pub scheduled_date: NaiveDate,
    pub scheduled_recipe_id: i32,
    pub user_id: i32,
}

/// Insert shapes: ids are assigned by storage.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewRecipe {
    pub recipe_name: String,
    pub recipe_ingredients: Vec<String>,
    pub recipe_intolerances: Vec<String>,
    pub recipe_nutrition: Vec<String>,
    pub recipe_type: String,
    pub user_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewIngredient {
    pub ingredient_name: String,
    pub ingredient_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCalendarEntry {
    pub scheduled_date: NaiveDate,
    pub scheduled_recipe_id: i32,
    pub user_id: i32,
}

/// Patch shapes for sparse updates: `None` leaves the column untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipePatch {
    pub recipe_name: Option<String>,
    pub recipe_ingredients: Option<Vec<String>>,
    pub recipe_intolerances: Option<Vec<String>>,
    pub recipe_nutrition: Option<Vec<String>>,
    pub recipe_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IngredientPatch {
    pub ingredient_name: Option<String>,
    pub ingredient_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarEntryPatch {
    pub scheduled_date: Option<NaiveDate>,
    pub scheduled_recipe_id: Option<i32>,
}
