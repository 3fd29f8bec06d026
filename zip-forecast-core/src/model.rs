use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::WeatherApiError;

/// What the user asked a forecast for.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub postal_code: String,
    pub country: String,
    /// Human-readable place name shown next to the ZIP code, e.g. "Warrensburg, MO".
    pub label: Option<String>,
}

/// Coordinates as returned by the geocoder.
///
/// Latitude and longitude stay as the geocoder's text so that the forecast
/// request carries exactly the same precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: String,
    pub longitude: String,
    pub display_name: Option<String>,
}

/// Daily forecast as parallel arrays, one slot per calendar day.
///
/// Readings keep the service's number text (`45.0` stays `45.0`); `None` is a
/// value the service reported as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    pub dates: Vec<NaiveDate>,
    pub temperature_max_f: Vec<Option<Number>>,
    pub temperature_min_f: Vec<Option<Number>>,
    /// Millimeters, even though temperature and wind are imperial.
    pub precipitation_sum_mm: Vec<Option<Number>>,
    pub wind_speed_max_mph: Vec<Option<Number>>,
    pub weather_codes: Vec<Option<i32>>,
}

/// A single day taken out of [`DailyForecast`].
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub temperature_max_f: Option<Number>,
    pub temperature_min_f: Option<Number>,
    pub precipitation_sum_mm: Option<Number>,
    pub wind_speed_max_mph: Option<Number>,
    pub weather_code: Option<i32>,
}

impl DailyForecast {
    /// Index of "tomorrow" in a forecast that starts today.
    pub const TOMORROW: usize = 1;

    /// Read slot `index` of every array.
    pub fn day(&self, index: usize) -> Result<ForecastDay, WeatherApiError> {
        Ok(ForecastDay {
            date: *pick(&self.dates, index, "time")?,
            temperature_max_f: pick(&self.temperature_max_f, index, "temperature_2m_max")?.clone(),
            temperature_min_f: pick(&self.temperature_min_f, index, "temperature_2m_min")?.clone(),
            precipitation_sum_mm: pick(&self.precipitation_sum_mm, index, "precipitation_sum")?
                .clone(),
            wind_speed_max_mph: pick(&self.wind_speed_max_mph, index, "windspeed_10m_max")?.clone(),
            weather_code: *pick(&self.weather_codes, index, "weathercode")?,
        })
    }
}

fn pick<'a, T>(
    values: &'a [T],
    index: usize,
    field: &'static str,
) -> Result<&'a T, WeatherApiError> {
    values.get(index).ok_or(WeatherApiError::MissingDay { index, field })
}
