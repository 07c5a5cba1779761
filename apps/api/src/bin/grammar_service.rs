use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use admit_api::config::GrammarConfig;
use admit_api::grammar::engine::LanguageToolEngine;
use admit_api::routes::build_grammar_router;
use admit_api::state::GrammarState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = GrammarConfig::from_env()?;

    admit_api::init_tracing(&config.rust_log);

    info!("Starting grammar service v{}", env!("CARGO_PKG_VERSION"));

    // A failed probe leaves the engine unavailable; requests then answer 503.
    let engine = LanguageToolEngine::connect(&config).await;

    let state = GrammarState {
        engine: Arc::new(engine),
    };

    let app = build_grammar_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
