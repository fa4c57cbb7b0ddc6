pub mod api;
pub mod clients;
pub mod config;
pub mod db;
pub mod entities;
pub mod models;
pub mod services;
pub mod state;

use anyhow::Context;
pub use config::Config;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().collect();

    if let Some(command) = args.get(1) {
        match command.as_str() {
            "init" | "--init" => {
                if Config::create_default_if_missing()? {
                    println!("✓ Config file created. Edit config.toml and run again.");
                } else {
                    println!("Config file already exists.");
                }
                return Ok(());
            }
            "help" | "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            other => {
                println!("Unknown command: {}", other);
                println!();
                print_help();
                return Ok(());
            }
        }
    }

    config.validate()?;
    serve(config).await
}

fn print_help() {
    println!("WeatherNow - city weather lookup backend");
    println!();
    println!("USAGE:");
    println!("  weathernow            Run the API server");
    println!("  weathernow init       Create a default config file");
    println!("  weathernow help       Show this help message");
    println!();
    println!("CONFIG:");
    println!("  Edit config.toml to configure the database, weather API and server.");
}

async fn serve(config: Config) -> anyhow::Result<()> {
    info!("WeatherNow v{} starting...", env!("CARGO_PKG_VERSION"));

    let port = config.server.port;
    let state = api::create_app_state_from_config(config).await?;
    let app = api::router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Web API running at http://{}", addr);

    let server = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Web server error: {}", e);
        }
    });

    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }

    server.abort();
    info!("Server stopped");

    Ok(())
}
