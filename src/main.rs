use clap::Parser;
use grammar_scorer::core::ConfigProvider;
use grammar_scorer::utils::{logger, validation::Validate};
use grammar_scorer::{
    create_router, AppState, HfCorrectionClient, HfTranscriptionClient, ScoringPipeline,
    ServiceConfig,
};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServiceConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_server_logger(config.verbose);
    }

    tracing::info!("Starting grammar-scorer v{}", env!("CARGO_PKG_VERSION"));
    if config.verbose {
        tracing::debug!("ASR endpoint: {}", config.asr_endpoint());
        tracing::debug!("Grammar endpoint: {}", config.grammar_endpoint());
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{e}");
        std::process::exit(1);
    }

    let transcriber = HfTranscriptionClient::new(&config)?;
    let corrector = HfCorrectionClient::new(&config)?;
    let pipeline = ScoringPipeline::new(transcriber, corrector);
    let app = create_router(AppState::new(pipeline));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
