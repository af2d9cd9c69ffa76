//! Command-line interface for the MCP server binary.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::audio::FishAudioProvider;
use crate::config::SpeechContext;
use crate::error::{Result, TtsError};
use crate::mcp::SpeechServer;
use crate::tools::{available_models, SpeechService};

/// Fish Audio text-to-speech MCP server
#[derive(Parser, Debug)]
#[command(name = "fishtts-mcp", version, about = "Fish Audio text-to-speech as MCP tools")]
pub struct Cli {
    /// Override the Fish Audio API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Read environment variables from this file instead of ./.env
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands. Serving is the default.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Serve the tools over MCP on stdin/stdout
    Serve,
    /// Print the configured model id and API key prefix
    Info,
    /// Print the available voice models
    Models,
}

impl Cli {
    /// Build the shared context from the environment and CLI overrides.
    pub fn load_context(&self) -> Result<SpeechContext> {
        let context = match &self.env_file {
            Some(path) => {
                dotenvy::from_path(path).map_err(|e| {
                    TtsError::Configuration(format!(
                        "failed to load env file {}: {e}",
                        path.display()
                    ))
                })?;
                SpeechContext::from_current_env()
            }
            None => SpeechContext::from_env(),
        };
        Ok(match &self.base_url {
            Some(url) => context.with_base_url(url.clone()),
            None => context,
        })
    }
}

/// Execute the parsed command.
pub async fn run(cli: Cli) -> Result<()> {
    let context = Arc::new(cli.load_context()?);
    if context.api_key().is_none() {
        tracing::warn!("API_KEY is not set; synthesis calls will be rejected by the API");
    }
    if context.default_model_id().is_none() {
        tracing::warn!("MODEL_ID is not set; the API default voice will be used");
    }

    let provider = Arc::new(FishAudioProvider::from_context(&context));
    let service = SpeechService::new(context, provider);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            tracing::info!(base_url = service.context().base_url(), "starting fishtts mcp server");
            SpeechServer::from_service(service).serve_stdio().await
        }
        Commands::Info => print_json(&service.model_info()),
        Commands::Models => print_json(&available_models()),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
