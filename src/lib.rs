pub mod app;
pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod mock;
pub mod models;
pub mod source;
pub mod state;
pub mod stats;
pub mod taxonomy;
pub mod ui;
pub mod upstream;
pub mod validation;

pub use app::router;
pub use config::AppConfig;
pub use state::AppState;
