use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use admit_api::config::EssayConfig;
use admit_api::llm_client::{CompletionClient, OpenAiClient};
use admit_api::routes::build_essay_router;
use admit_api::state::EssayState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = EssayConfig::from_env()?;

    admit_api::init_tracing(&config.rust_log);

    info!("Starting essay service v{}", env!("CARGO_PKG_VERSION"));

    let llm = OpenAiClient::new(&config)?;
    if llm.available() {
        info!("LLM client initialized (model: {})", llm.model());
    } else {
        warn!("OPENAI_API_KEY is not set; essay analysis will answer 503");
    }

    let state = EssayState { llm: Arc::new(llm) };

    let app = build_essay_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
