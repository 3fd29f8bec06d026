use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, builder::NonEmptyStringValueParser};
use inquire::{Text, validator::Validation};
use std::{io::Write, process::ExitCode};
use zip_forecast_core::{Config, Pipeline};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "zip-forecast", version, about = "Tomorrow's weather for a ZIP code")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively set the default ZIP code, country and time zone.
    Configure,

    /// Show tomorrow's forecast.
    Show {
        /// Postal code; defaults to the configured one.
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        postal_code: Option<String>,

        /// Country used to disambiguate the postal code, e.g. "USA".
        #[arg(long)]
        country: Option<String>,

        /// IANA time zone the forecast days are aligned to.
        #[arg(long)]
        timezone: Option<String>,

        /// Place name printed next to the ZIP code.
        #[arg(long)]
        label: Option<String>,
    },

    /// Print the location of the config file.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => {
                configure()?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { postal_code, country, timezone, label } => {
                let mut cfg = Config::load()?;

                if let Some(postal_code) = postal_code {
                    // The configured label names the configured ZIP code only.
                    if postal_code != cfg.postal_code {
                        cfg.label = None;
                    }
                    cfg.postal_code = postal_code;
                }
                if let Some(country) = country {
                    cfg.country = country;
                }
                if let Some(timezone) = timezone {
                    cfg.timezone = timezone;
                }
                if label.is_some() {
                    cfg.label = label;
                }

                let today = Local::now().date_naive();
                show(&cfg, today, &mut std::io::stdout()).await
            }
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// Run the pipeline; a failed step is printed to `out` and turns into a failing exit code.
async fn show<W: Write>(
    cfg: &Config,
    today: NaiveDate,
    out: &mut W,
) -> anyhow::Result<ExitCode> {
    tracing::debug!(?cfg, "running forecast");

    let pipeline = Pipeline::from_config(cfg).context("Failed to set up HTTP clients")?;

    match pipeline.run(&cfg.forecast_request(), today, out).await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            writeln!(out, "{err}")?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    cfg.postal_code = Text::new("Postal code:")
        .with_default(&cfg.postal_code)
        .with_validator(required)
        .prompt()?;

    cfg.country = Text::new("Country:")
        .with_default(&cfg.country)
        .with_validator(required)
        .prompt()?;

    let label = Text::new("Place name (optional):")
        .with_default(cfg.label.as_deref().unwrap_or_default())
        .prompt()?;
    cfg.label = Some(label.trim().to_string()).filter(|l| !l.is_empty());

    cfg.timezone = Text::new("Time zone:")
        .with_default(&cfg.timezone)
        .with_help_message("IANA name, e.g. America/Chicago")
        .with_validator(required)
        .prompt()?;

    cfg.user_agent = Text::new("User-Agent sent to the geocoder:")
        .with_default(&cfg.user_agent)
        .with_validator(required)
        .prompt()?;

    let path = cfg.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

fn required(value: &str) -> Result<Validation, inquire::CustomUserError> {
    if value.trim().is_empty() {
        Ok(Validation::Invalid("A value is required".into()))
    } else {
        Ok(Validation::Valid)
    }
}
