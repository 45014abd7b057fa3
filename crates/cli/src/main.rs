use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use connectors::http::source::{DataSource, OpenApiSource};
use pipeline_config::{connection::Connection, env::EnvManager, settings::PipelineSettings};
use pipeline_runtime::{
    context::RunContext,
    execution::{executor, factory},
};
use std::path::Path;
use tracing::{Level, info};

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "rtms",
    version = "0.1.0",
    about = "Seoul real-estate open-API to CSV pipeline"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            env_file,
            settings,
            dry_run,
            json,
        } => {
            let env = load_env(env_file.as_deref())?;
            let conn = Connection::resolve(&env)?;
            let settings = PipelineSettings::load(settings.as_deref().map(Path::new))?;

            let source = factory::create_source(&conn, &settings);
            let sink = factory::create_sink(&settings);
            let mut ctx = RunContext::new(&settings);

            let summary = executor::run(Box::new(source), sink, &mut ctx, dry_run).await?;

            if json {
                let json =
                    serde_json::to_string_pretty(&summary).map_err(CliError::JsonSerialize)?;
                println!("{json}");
            } else {
                output::print_summary(&summary);
            }
        }
        Commands::TestConn { env_file } => {
            let env = load_env(env_file.as_deref())?;
            let conn = Connection::resolve(&env)?;
            let settings = PipelineSettings::default();

            // A single-record window is enough to prove the key and host work.
            let source = OpenApiSource::new(
                conn.base_url.clone(),
                conn.api_key.clone(),
                settings.service.clone(),
                1,
                1,
            );
            info!("Testing connection: {}", source.endpoint());
            let body = source.fetch().await?;
            println!("Connection OK ({} bytes)", body.len());
        }
        Commands::ShowConfig { settings } => {
            let settings = PipelineSettings::load(settings.as_deref().map(Path::new))?;
            let json = serde_json::to_string_pretty(&settings).map_err(CliError::JsonSerialize)?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Snapshot of the process environment plus an optional .env overlay. With
/// no explicit file, a `.env` in the working directory is picked up when
/// present, matching the legacy dotenv behaviour.
fn load_env(env_file: Option<&str>) -> Result<EnvManager, CliError> {
    let mut env = EnvManager::new();
    match env_file {
        Some(path) => env.load_from_file(path)?,
        None => {
            if Path::new(".env").exists() {
                env.load_from_file(".env")?;
            }
        }
    }
    Ok(env)
}
