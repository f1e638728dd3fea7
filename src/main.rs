use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use plateful::config::{Config, DatabaseConfig};
use plateful::db::Database;
use plateful::router::{AppState, app_router};
use plateful::search::RecipeSearchGateway;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::from_env()?;
    // Database settings are required: a missing value is fatal here.
    let db_cfg = DatabaseConfig::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        db_host = %db_cfg.host,
        db_port = db_cfg.port,
        db_name = %db_cfg.db,
        search_key_configured = cfg.spoonacular_api_key.is_some(),
        loglevel = %cfg.loglevel,
    );

    let db = Database::connect(&db_cfg).await?;
    db.init_schema().await?;

    let search = RecipeSearchGateway::new(cfg.spoonacular_api_key.clone())?;
    let state = AppState::new(db, search, cfg.index_path.clone());
    let app = app_router(state);

    let listener = TcpListener::bind(&cfg.bind_addr).await?;
    info!("HTTP server listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
