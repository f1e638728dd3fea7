pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod search;
pub mod security;
pub mod validation;

pub use error::AppError;
pub use router::AppState;
