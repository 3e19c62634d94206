use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pdf_thumbnail::{
    adapters::inbound::http::dto::{InvocationResponseDto, InvocationStatus},
    app::AppBuilder,
    config::FunctionArgs,
    domain::{
        models::{EventEnvelope, StorageObjectEvent},
        value_objects::InvocationId,
    },
    ports::services::ThumbnailService,
    telemetry::init_tracing,
};
use std::{io::Read, path::PathBuf};

#[derive(Parser, Debug)]
#[command(name = "pdf-thumbnail-cli")]
#[command(about = "Run the PDF thumbnail function once, outside the HTTP trigger", long_about = None)]
struct Cli {
    #[command(flatten)]
    function: FunctionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the thumbnail for one object in the watched bucket
    Generate {
        /// Object name, e.g. reports/q3.pdf
        name: String,
        /// Bucket to put in the synthesized event (defaults to the watched bucket)
        #[arg(long)]
        event_bucket: Option<String>,
    },

    /// Replay a notification payload (object resource or CloudEvent)
    Event {
        /// JSON file, or '-' for stdin
        file: PathBuf,
    },
}

impl Commands {
    fn into_invocation(self, watched_bucket: &str) -> Result<(InvocationId, StorageObjectEvent)> {
        match self {
            Commands::Generate { name, event_bucket } => {
                let bucket = event_bucket.unwrap_or_else(|| watched_bucket.to_string());
                Ok((
                    InvocationId::generate(),
                    StorageObjectEvent::new(bucket, name),
                ))
            }
            Commands::Event { file } => {
                let body = if file.as_os_str() == "-" {
                    let mut body = String::new();
                    std::io::stdin()
                        .read_to_string(&mut body)
                        .context("Failed to read event from stdin")?;
                    body
                } else {
                    std::fs::read_to_string(&file)
                        .with_context(|| format!("Failed to read event file {:?}", file))?
                };

                let envelope: EventEnvelope =
                    serde_json::from_str(&body).context("Event payload is not a storage event")?;
                Ok(envelope.into_invocation())
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.function.log_level, cli.function.log_format)?;

    let config = cli
        .function
        .to_app_config()
        .context("Invalid configuration")?;
    let watched_bucket = config.bucket.to_string();

    let app_services = AppBuilder::new(config)
        .build()
        .context("Failed to build application")?;

    let (invocation_id, event) = cli.command.into_invocation(&watched_bucket)?;

    let result = app_services
        .thumbnail_service
        .process_event(&event, &invocation_id)
        .await;

    let response = InvocationResponseDto::from_result(&invocation_id, &result);
    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.status == InvocationStatus::Failed {
        std::process::exit(1);
    }

    Ok(())
}
