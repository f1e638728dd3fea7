//! Persistence-layer tests against a live PostgreSQL instance, configured via
//! the usual `POSTGRES_*` variables. Ignored by default:
//!
//! ```sh
//! cargo test --test persistence_pg_tests -- --ignored
//! ```

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use plateful::AppError;
use plateful::config::DatabaseConfig;
use plateful::db::{
    Database, IngredientPatch, NewCalendarEntry, NewIngredient, NewRecipe, NewUser, UserPatch,
};
use plateful::router::{AppState, app_router};
use plateful::search::RecipeSearchGateway;
use plateful::security::verify_password;

fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos()
}

async fn database() -> Database {
    let cfg = DatabaseConfig::from_env().expect("POSTGRES_* not configured");
    let db = Database::connect(&cfg).await.expect("failed to connect");
    db.init_schema().await.expect("failed to init schema");
    db
}

async fn seed_user(db: &Database, suffix: u128) -> i32 {
    db.add_user(NewUser {
        username: format!("user_{suffix}"),
        email: format!("user_{suffix}@example.com"),
        password_hash: "$argon2id$placeholder".to_string(),
    })
    .await
    .expect("failed to add user")
}

#[tokio::test]
#[ignore]
async fn empty_patch_is_a_noop_that_succeeds() {
    let db = database().await;
    let suffix = unique_suffix();

    let id = db
        .add_ingredient(NewIngredient {
            ingredient_name: format!("basil_{suffix}"),
            ingredient_type: "herb".to_string(),
        })
        .await
        .expect("failed to add ingredient");

    let updated = db
        .update_ingredient(id, IngredientPatch::default())
        .await
        .expect("empty patch must succeed");
    assert_eq!(updated.ingredient_id, id);
    assert_eq!(updated.ingredient_name, format!("basil_{suffix}"));
    assert_eq!(updated.ingredient_type, "herb");

    db.remove_ingredient(id).await.expect("cleanup failed");
}

#[tokio::test]
#[ignore]
async fn remove_then_update_is_not_found() {
    let db = database().await;
    let suffix = unique_suffix();

    let id = db
        .add_ingredient(NewIngredient {
            ingredient_name: format!("thyme_{suffix}"),
            ingredient_type: "herb".to_string(),
        })
        .await
        .expect("failed to add ingredient");

    db.remove_ingredient(id).await.expect("remove failed");

    let err = db
        .update_ingredient(id, IngredientPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }), "{err:?}");

    let err = db.remove_ingredient(id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }), "{err:?}");
}

#[tokio::test]
#[ignore]
async fn duplicate_username_is_an_integrity_error() {
    let db = database().await;
    let suffix = unique_suffix();
    let user_id = seed_user(&db, suffix).await;

    let err = db
        .add_user(NewUser {
            username: format!("user_{suffix}"),
            email: format!("other_{suffix}@example.com"),
            password_hash: "$argon2id$placeholder".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Integrity(_)), "{err:?}");

    db.remove_user(user_id).await.expect("cleanup failed");
}

#[tokio::test]
#[ignore]
async fn removing_a_user_with_recipes_is_an_integrity_error() {
    let db = database().await;
    let suffix = unique_suffix();
    let user_id = seed_user(&db, suffix).await;

    let recipe_id = db
        .add_recipe(NewRecipe {
            recipe_name: format!("pesto_{suffix}"),
            recipe_ingredients: vec!["basil".to_string(), "pine nuts".to_string()],
            recipe_intolerances: vec![],
            recipe_nutrition: vec!["Calories: 300 kcal".to_string()],
            recipe_type: "sauce".to_string(),
            user_id,
        })
        .await
        .expect("failed to add recipe");

    // ON DELETE RESTRICT: the user cannot go while a recipe references them.
    let err = db.remove_user(user_id).await.unwrap_err();
    assert!(matches!(err, AppError::Integrity(_)), "{err:?}");

    db.remove_recipe(recipe_id).await.expect("cleanup failed");
    db.remove_user(user_id).await.expect("cleanup failed");
}

#[tokio::test]
#[ignore]
async fn calendar_entry_requires_existing_recipe() {
    let db = database().await;
    let suffix = unique_suffix();
    let user_id = seed_user(&db, suffix).await;

    let err = db
        .add_calendar_entry(NewCalendarEntry {
            scheduled_date: chrono::NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            scheduled_recipe_id: i32::MAX,
            user_id,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Integrity(_)), "{err:?}");

    db.remove_user(user_id).await.expect("cleanup failed");
}

#[tokio::test]
#[ignore]
async fn sparse_update_touches_only_supplied_fields() {
    let db = database().await;
    let suffix = unique_suffix();
    let user_id = seed_user(&db, suffix).await;

    let updated = db
        .update_user(
            user_id,
            UserPatch {
                email: Some(format!("renamed_{suffix}@example.com")),
                ..UserPatch::default()
            },
        )
        .await
        .expect("update failed");
    assert_eq!(updated.username, format!("user_{suffix}"));
    assert_eq!(updated.email, format!("renamed_{suffix}@example.com"));
    assert_eq!(updated.password_hash, "$argon2id$placeholder");

    db.remove_user(user_id).await.expect("cleanup failed");
}

#[tokio::test]
#[ignore]
async fn valid_signup_persists_a_user_row() {
    let db = database().await;
    let suffix = unique_suffix();
    let username = format!("john_{suffix}");

    let state = AppState::new(
        db.clone(),
        RecipeSearchGateway::new(None).expect("failed to build gateway"),
        PathBuf::from("client/index.html"),
    );
    let app = app_router(state);

    let payload = serde_json::json!({
        "username": username,
        "email": format!("john_{suffix}@example.com"),
        "password": "Abcdef1-",
        "confirmationPassword": "Abcdef1-"
    });
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/signup")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("body was not JSON");
    assert_eq!(json["completed_signup"], "true");
    assert_eq!(json["usernameFeedback"], "");

    let (user_id, password_hash): (i32, String) =
        sqlx::query_as("SELECT user_id, password_hash FROM users WHERE username = $1")
            .bind(&username)
            .fetch_one(db.pool())
            .await
            .expect("user row not persisted");
    assert!(verify_password("Abcdef1-", &password_hash).unwrap());

    db.remove_user(user_id).await.expect("cleanup failed");
}
