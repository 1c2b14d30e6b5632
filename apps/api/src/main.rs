mod analysis;
mod config;
mod errors;
mod extract;
mod lexicon;
mod nlp;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extract::PdfTextExtractor;
use crate::lexicon::load_lexicon;
use crate::nlp::load_pipeline;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Matcher v{}", env!("CARGO_PKG_VERSION"));

    // NLP pipeline (NLP_BACKEND; gazetteer extended by GAZETTEER_PATH)
    let nlp = load_pipeline(config.nlp_backend, config.gazetteer_path.as_deref()).await?;
    info!("NLP pipeline initialized (backend: {})", nlp.backend());

    // Synonym lexicon (WordNet when WORDNET_DIR is set)
    let lexicon = load_lexicon(config.wordnet_dir.as_deref())?;
    info!("Synonym lexicon initialized (backend: {})", lexicon.backend());

    let state = AppState {
        config: config.clone(),
        nlp,
        lexicon,
        extractor: Arc::new(PdfTextExtractor),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
