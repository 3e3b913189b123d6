use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use nf_domain::config::Config;
use nf_gateway::cli::{Cli, Command, ConfigCommand};
use nf_gateway::{api, bootstrap};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // Default to serve when no subcommand is given.
        None | Some(Command::Serve) => {
            init_tracing();
            let config = nf_gateway::cli::load_config(&cli.config)?;
            run_server(Arc::new(config)).await
        }
        Some(Command::Config(ConfigCommand::Validate)) => {
            match nf_gateway::cli::load_config(&cli.config) {
                Ok(_) => {
                    println!("config ok: {}", cli.config.display());
                    Ok(())
                }
                Err(e) => {
                    eprintln!("config invalid: {e}");
                    std::process::exit(1);
                }
            }
        }
        Some(Command::Config(ConfigCommand::Show)) => {
            let config = nf_gateway::cli::load_config(&cli.config)?;
            println!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        Some(Command::Version) => {
            println!("newsflow {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Initialize structured JSON tracing for the server.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,nf_gateway=debug,nf_engine=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().json())
        .init();
}

async fn run_server(config: Arc<Config>) -> anyhow::Result<()> {
    let state = bootstrap::build_state(config.clone())?;

    let app = api::router()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!(addr = %addr, "newsflow listening");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
