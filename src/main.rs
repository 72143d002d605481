use clap::Parser;
use dotenv::dotenv;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod client;
mod config;
mod error;
mod handlers;
mod models;
mod state;
mod upstream;

use crate::client::HttpBackend;
use crate::config::{Args, Command, ServeArgs};
use crate::state::AppState;
use crate::upstream::GeminiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    match args.command {
        Command::Serve(serve_args) => serve(serve_args).await,
        Command::Ask(ask) => {
            let backend = HttpBackend::new(&ask.server);
            client::terminal::run(&backend, ask.difficulty).await
        }
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let gemini = GeminiClient::new(
        reqwest::Client::new(),
        &args.upstream_url,
        args.model.clone(),
        args.api_key.clone(),
    );
    if !gemini.has_key() {
        tracing::warn!("GEMINI_API_KEY is not set; /generate will answer 500 until it is");
    }

    let state = Arc::new(AppState { gemini });
    let app = handlers::router(Arc::clone(&state), &args.public_dir);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(port = args.port, "server running on http://localhost:{}", args.port);
    tracing::info!(
        upstream = state.gemini.base_url(),
        model = state.gemini.model(),
        has_key = state.gemini.has_key(),
        "forwarding /generate"
    );
    tracing::info!(dir = %args.public_dir.display(), "serving static assets");

    axum::serve(listener, app).await?;
    Ok(())
}
