use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::{CustomType, CustomUserError, Select, Text, validator::Validation};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::info;
use weatherbot_core::{Config, ResolutionPolicy, WeatherService};

use crate::chat;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherbot", version, about = "Short-form weather for any place name")]
pub struct Cli {
    /// Path to the configuration file. Defaults to the platform config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Adds debug messages to log output.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively edit settings and save them.
    Configure,

    /// Show weather for a place.
    Show {
        /// Place name; several words are joined with spaces.
        #[arg(required = true)]
        location: Vec<String>,
    },

    /// Answer chat commands (/start, /help, /weather <place>, plain text) read from stdin.
    Chat,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config_path = match self.config {
            Some(path) => path,
            None => Config::config_file_path()?,
        };
        let config = Config::load_from(&config_path)?;

        match self.command {
            Command::Configure => configure(config, &config_path),
            Command::Show { location } => {
                let service = WeatherService::from_config(&config)?;
                println!("{}", service.get_weather(&location.join(" ")).await);
                Ok(())
            }
            Command::Chat => {
                let service = WeatherService::from_config(&config)?;
                info!("Running weatherbot chat with {} resolution", service.policy());
                chat::run(Arc::new(service)).await
            }
        }
    }
}

fn configure(mut config: Config, path: &Path) -> Result<()> {
    let current = ResolutionPolicy::all().iter().position(|p| *p == config.resolution).unwrap_or(0);
    config.resolution = Select::new(
        "What should happen when a place name cannot be resolved?",
        ResolutionPolicy::all().to_vec(),
    )
    .with_starting_cursor(current)
    .with_help_message("required: reject it, best_effort: ask for weather anyway, skip: never resolve")
    .prompt()
    .context("Failed to read resolution policy")?;

    let user_agent = Text::new("User agent:")
        .with_default(&config.user_agent)
        .prompt()
        .context("Failed to read user agent")?;
    config.user_agent = user_agent;

    config.timeout_secs = CustomType::<u64>::new("Request timeout in seconds:")
        .with_default(config.timeout_secs)
        .with_validator(|secs: &u64| {
            Ok::<_, CustomUserError>(if *secs == 0 {
                Validation::Invalid("Timeout must be at least 1 second".into())
            } else {
                Validation::Valid
            })
        })
        .prompt()
        .context("Failed to read timeout")?;

    let default_location = Text::new("Location for empty queries (leave blank to disable):")
        .with_default(&config.default_location)
        .prompt()
        .context("Failed to read default location")?;
    config.default_location = default_location;

    config.save_to(path)?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}
