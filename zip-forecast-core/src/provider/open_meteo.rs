//! Open-Meteo daily forecast client.
//!
//! Asks for a two day window (today and tomorrow) with imperial temperature
//! and wind units. Open-Meteo reports precipitation in millimeters.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Number;
use std::time::Duration;
use tracing::debug;

use crate::{
    Config,
    error::{WeatherApiError, truncate_body},
    model::{DailyForecast, Location},
};

use super::ForecastSource;

const DAILY_VARIABLES: &str =
    "temperature_2m_max,temperature_2m_min,precipitation_sum,windspeed_10m_max,weathercode";
const FORECAST_DAYS: &str = "2";

#[derive(Debug, Clone)]
pub struct OpenMeteoForecast {
    url: String,
    timezone: String,
    http: Client,
}

impl OpenMeteoForecast {
    pub fn new(
        url: impl Into<String>,
        timezone: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, WeatherApiError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { url: url.into(), timezone: timezone.into(), http })
    }

    pub fn from_config(config: &Config) -> Result<Self, WeatherApiError> {
        Self::new(&config.forecast_url, &config.timezone, config.request_timeout())
    }
}

/// Any reading may be `null` when the model has no value for that day.
#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<NaiveDate>,
    temperature_2m_max: Vec<Option<Number>>,
    temperature_2m_min: Vec<Option<Number>>,
    precipitation_sum: Vec<Option<Number>>,
    windspeed_10m_max: Vec<Option<Number>>,
    weathercode: Vec<Option<i32>>,
}

#[derive(Debug, Deserialize)]
struct OmResponse {
    daily: OmDaily,
}

/// Body Open-Meteo sends alongside a 4xx, e.g. for an unknown time zone.
#[derive(Debug, Deserialize)]
struct OmErrorBody {
    reason: String,
}

impl From<OmDaily> for DailyForecast {
    fn from(d: OmDaily) -> Self {
        DailyForecast {
            dates: d.time,
            temperature_max_f: d.temperature_2m_max,
            temperature_min_f: d.temperature_2m_min,
            precipitation_sum_mm: d.precipitation_sum,
            wind_speed_max_mph: d.windspeed_10m_max,
            weather_codes: d.weathercode,
        }
    }
}

#[async_trait]
impl ForecastSource for OpenMeteoForecast {
    async fn daily_forecast(&self, location: &Location) -> Result<DailyForecast, WeatherApiError> {
        debug!(
            url = %self.url,
            lat = %location.latitude,
            lon = %location.longitude,
            timezone = %self.timezone,
            "requesting daily forecast"
        );

        let res = self
            .http
            .get(&self.url)
            .query(&[
                ("latitude", location.latitude.as_str()),
                ("longitude", location.longitude.as_str()),
                ("daily", DAILY_VARIABLES),
                ("forecast_days", FORECAST_DAYS),
                ("timezone", self.timezone.as_str()),
                ("units", "imperial"),
                ("temperature_unit", "fahrenheit"),
                ("wind_speed_unit", "mph"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let reason = serde_json::from_str::<OmErrorBody>(&body)
                .map(|e| e.reason)
                .unwrap_or_else(|_| truncate_body(&body));
            return Err(WeatherApiError::Status { status, reason });
        }

        let parsed: OmResponse = serde_json::from_str(&body)?;
        debug!(days = parsed.daily.time.len(), "forecast received");

        Ok(parsed.daily.into())
    }
}
