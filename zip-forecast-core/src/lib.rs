//! Core library for the `zip-forecast` CLI.
//!
//! This crate defines:
//! - Configuration handling
//! - Geocoder and forecast provider abstractions (Nominatim, Open-Meteo)
//! - Shared domain models and the WMO weather code table
//! - The report printed for tomorrow's forecast
//!
//! It is used by `zip-forecast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod report;
pub mod weather_code;

pub use config::Config;
pub use error::{GeocodingError, PipelineError, WeatherApiError};
pub use model::{DailyForecast, ForecastDay, ForecastRequest, Location};
pub use pipeline::Pipeline;
pub use provider::{ForecastSource, Geocoder};
pub use report::Report;
