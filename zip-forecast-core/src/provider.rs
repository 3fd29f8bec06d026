use crate::{
    Config,
    error::{GeocodingError, WeatherApiError},
    model::{DailyForecast, Location},
    provider::{nominatim::NominatimGeocoder, open_meteo::OpenMeteoForecast},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod nominatim;
pub mod open_meteo;

/// Resolves a postal code to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn locate(&self, postal_code: &str, country: &str) -> Result<Location, GeocodingError>;
}

/// Supplies a daily forecast starting today for a location.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn daily_forecast(&self, location: &Location) -> Result<DailyForecast, WeatherApiError>;
}

/// Construct the configured geocoder.
pub fn geocoder_from_config(config: &Config) -> Result<Box<dyn Geocoder>, GeocodingError> {
    Ok(Box::new(NominatimGeocoder::from_config(config)?))
}

/// Construct the configured forecast source.
pub fn forecast_source_from_config(
    config: &Config,
) -> Result<Box<dyn ForecastSource>, WeatherApiError> {
    Ok(Box::new(OpenMeteoForecast::from_config(config)?))
}
