//! hrdesk HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use hrdesk::classify::CategoryClassifier;
use hrdesk::completion::{CompletionConfig, GenAiCompleter};
use hrdesk::config::Config;
use hrdesk::corpus::{CorpusIndex, load_document};
use hrdesk::embedding::{SbertConfig, SbertEmbedder};
use hrdesk::resolve::ResolutionEngine;
use hrdesk::session::SessionStore;
use hrdesk_server::api::{AppState, create_router_with_state};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!(
        r#"
██╗  ██╗██████╗ ██████╗ ███████╗███████╗██╗  ██╗
██║  ██║██╔══██╗██╔══██╗██╔════╝██╔════╝██║ ██╔╝
███████║██████╔╝██║  ██║█████╗  ███████╗█████╔╝
██╔══██║██╔══██╗██║  ██║██╔══╝  ╚════██║██╔═██╗
██║  ██║██║  ██║██████╔╝███████╗███████║██║  ██╗
╚═╝  ╚═╝╚═╝  ╚═╝╚═════╝ ╚══════╝╚══════╝╚═╝  ╚═╝

        ASK. MATCH. ANSWER.
"#
    );

    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        faq_path = %config.faq_path.display(),
        "hrdesk starting"
    );

    let entries = load_document(&config.faq_path)?;

    let sbert_config = if let Some(path) = &config.model_path {
        SbertConfig::new(path.clone())
    } else {
        tracing::warn!("No HRDESK_MODEL_PATH configured, running embedder in stub mode");
        SbertConfig::stub()
    };
    let embedder = SbertEmbedder::load(sbert_config)?;
    let embedder_stub = embedder.is_stub();

    let index = CorpusIndex::build(entries, &embedder)?;
    let classifier = CategoryClassifier::with_defaults(&embedder)?;

    let completer = GenAiCompleter::new(CompletionConfig::with_model(&config.completion_model));

    let engine = Arc::new(ResolutionEngine::new(
        index,
        classifier,
        SessionStore::new(),
        embedder,
        completer,
    ));

    tracing::info!(
        corpus_entries = engine.corpus().len(),
        embedder_mode = if embedder_stub { "stub" } else { "real" },
        completion_model = %config.completion_model,
        "Resolution engine ready"
    );

    let state = AppState::new(
        engine,
        &config.api_key,
        &config.completion_model,
        embedder_stub,
    );
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("hrdesk shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("HRDESK_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime");

    rt.block_on(async {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
            .expect("failed to build client");

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
