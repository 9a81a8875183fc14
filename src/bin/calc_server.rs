use advcalc::adapters::http;
use advcalc::utils::{logger, validation::Validate};
use advcalc::{create_router, AppState, Calculator, FastEvaluator, MemoryStore, RouterOptions, ServerArgs};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_server_logger(config.log_level("info"), config.logging.json);
    tracing::info!("🚀 Starting calculator API");

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let state = AppState::new(
        Calculator::new(FastEvaluator::new()),
        MemoryStore::new(config.server.max_sessions),
    );
    let options = RouterOptions {
        cors: config.server.cors,
        static_dir: config.server.static_dir.as_ref().map(PathBuf::from),
    };
    let router = create_router(state, &options);

    let addr = config.bind_address()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    http::serve(listener, router).await?;
    Ok(())
}
