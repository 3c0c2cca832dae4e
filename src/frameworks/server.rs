// Framework bootstrap for the pizza party server.

use crate::domain::access::AccessTokens;
use crate::domain::ports::CatalogStore;
use crate::frameworks::config::{self, Settings};
use crate::interface_adapters::json_files::{TOKENS_FILE, load_or_create_tokens};
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::io::Result;
use std::net::SocketAddr;
use std::path::Path;

// Crate logs at info unless RUST_LOG says otherwise; dependencies stay at warn.
const DEFAULT_LOG_FILTER: &str = "warn,pizza_party=info";

fn init_runtime() {
    let dotenv = dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "pizza party panicked");
    }));

    match dotenv {
        Some(path) => tracing::info!(env_file = %path.display(), "loaded settings file"),
        None => tracing::debug!("no .env file, using process environment"),
    }
}

pub async fn run(listener: tokio::net::TcpListener, settings: Settings) -> Result<()> {
    let address = listener.local_addr()?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        data_dir = %settings.data_dir.display(),
        "starting pizza party"
    );
    let state = build_state(&settings.data_dir).await?;

    print_access_links(&settings.public_url, &state.tokens);

    let app = routes::app(state);
    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let port = config::http_port();
    let address = SocketAddr::new(config::bind_host(), port);

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, Settings::from_env(port)).await
}

async fn build_state(data_dir: &Path) -> Result<AppState> {
    tokio::fs::create_dir_all(data_dir).await.inspect_err(|e| {
        tracing::error!(data_dir = %data_dir.display(), error = %e, "failed to create data dir");
    })?;

    let tokens = load_or_create_tokens(&data_dir.join(TOKENS_FILE))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to load access tokens");
            std::io::Error::other(format!("failed to load access tokens: {e}"))
        })?;

    let state = AppState::new(tokens, data_dir);

    // Seed the default catalog before the first request can race for it.
    state.catalog.load().await.map_err(|e| {
        tracing::error!(error = %e, "failed to load ingredient catalog");
        std::io::Error::other(format!("failed to load ingredient catalog: {e}"))
    })?;

    Ok(state)
}

fn print_access_links(public_url: &str, tokens: &AccessTokens) {
    let rule = "=".repeat(50);
    println!("\n{rule}");
    println!("🍕 PIZZA PARTY APP RUNNING!");
    println!("{rule}");
    println!("📋 Party Link: {public_url}/party/{}", tokens.party);
    println!("👑 Admin Link: {public_url}/admin/{}", tokens.admin);
    println!("{rule}\n");
}
