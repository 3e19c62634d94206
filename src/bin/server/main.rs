use anyhow::{Context, Result};
use clap::Parser;
use pdf_thumbnail::{
    adapters::inbound::http::router::{create_router, AppState},
    app::AppBuilder,
    config::FunctionArgs,
    telemetry::init_tracing,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "pdf-thumbnail-server")]
#[command(about = "Generates JPEG thumbnails for PDFs uploaded to a storage bucket", long_about = None)]
struct Cli {
    /// Server port to listen on
    #[arg(short, long, env = "PORT", default_value = "8080")]
    port: u16,

    /// Server host to bind to
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    #[command(flatten)]
    function: FunctionArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.function.log_level, cli.function.log_format)?;

    let config = cli
        .function
        .to_app_config()
        .context("Invalid configuration")?;

    info!("Starting PDF thumbnail function");
    info!(
        "Project: {}",
        config.project_id.as_deref().unwrap_or("<unset>")
    );
    info!("Watching bucket: {}", config.bucket);
    info!("Storage backend: {}", config.storage_backend.name());

    let app_services = AppBuilder::new(config)
        .build()
        .context("Failed to build application")?;

    let state = AppState {
        thumbnail_service: Arc::new(app_services.thumbnail_service),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, router)
        .await
        .context("Failed to start server")?;

    Ok(())
}
