pub mod config;
pub mod errors;
pub mod essays;
pub mod grammar;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes structured logging for either service binary.
/// `RUST_LOG` wins when set; otherwise `level` applies to this crate and tower_http.
pub fn init_tracing(level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("admit_api={level},tower_http={level}"))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
