use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode};
use std::process::ExitCode;
use weather_core::{
    Config, LookupController, LookupError, LookupState, View, WeatherRecord, provider, render,
};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather lookup CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name; several words are joined with spaces.
        city: Vec<String>,

        /// Print the normalized record as JSON instead of a card.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, json } => show(&city.join(" "), json).await,
        }
    }
}

fn configure() -> anyhow::Result<ExitCode> {
    // Read the file directly so environment overrides are not persisted.
    let path = Config::config_file_path()?;
    let mut cfg = Config::load_from(&path)?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Get one at https://openweathermap.org/api")
        .prompt()
        .context("Failed to read API key")?;

    cfg.set_api_key(api_key);
    if !cfg.is_configured() {
        anyhow::bail!("API key must not be empty");
    }

    cfg.save_to(&path)?;
    println!("Saved API key to {}", path.display());

    Ok(ExitCode::SUCCESS)
}

async fn show(city: &str, json: bool) -> anyhow::Result<ExitCode> {
    match run_lookup(city, !json).await? {
        Ok(record) if json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(ExitCode::SUCCESS)
        }
        Ok(record) => {
            output::print_view(&render(&LookupState::Success(record)));
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!(error = %err, "lookup failed");
            output::print_view(&View::Error {
                message: err.user_message().to_string(),
            });
            Ok(ExitCode::FAILURE)
        }
    }
}

/// A blank query fails before config is read, so it never needs an API key.
async fn run_lookup(
    city: &str,
    show_loading: bool,
) -> anyhow::Result<Result<WeatherRecord, LookupError>> {
    if city.trim().is_empty() {
        return Ok(Err(LookupError::EmptyQuery));
    }

    let cfg = Config::load()?;
    let controller = LookupController::new(provider::provider_from_config(&cfg)?);

    let result = controller
        .lookup_observed(city, |state| {
            if show_loading && matches!(state, LookupState::Loading) {
                output::print_view(&render(state));
            }
        })
        .await;

    Ok(result)
}
