use chrono::NaiveDate;
use serde_json::Number;
use std::fmt;

use crate::{
    error::WeatherApiError,
    model::{DailyForecast, ForecastDay, ForecastRequest},
    weather_code,
};

pub const DATE_MISMATCH_WARNING: &str = "Warning: API date mismatch for tomorrow";

/// Printed in place of a reading the service reported as `null`.
pub const MISSING_READING: &str = "n/a";

/// The calendar day after `today`.
pub fn tomorrow_after(today: NaiveDate) -> NaiveDate {
    today.succ_opt().unwrap_or(today)
}

/// Tomorrow's forecast, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub tomorrow: NaiveDate,
    pub postal_code: String,
    pub label: Option<String>,
    pub day: ForecastDay,
    pub condition: &'static str,
}

impl Report {
    /// Take the second day of `forecast` and compare it against the day after `today`.
    pub fn build(
        request: &ForecastRequest,
        forecast: &DailyForecast,
        today: NaiveDate,
    ) -> Result<Self, WeatherApiError> {
        let day = forecast.day(DailyForecast::TOMORROW)?;

        Ok(Self {
            tomorrow: tomorrow_after(today),
            postal_code: request.postal_code.clone(),
            label: request.label.clone(),
            condition: day.weather_code.map_or(weather_code::UNKNOWN, weather_code::describe),
            day,
        })
    }

    /// The service's date for the selected slot is not the day we expected.
    ///
    /// Only a warning; the report still shows the slot's values.
    pub fn date_mismatch(&self) -> bool {
        self.day.date != self.tomorrow
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.date_mismatch() {
            writeln!(f, "{DATE_MISMATCH_WARNING}")?;
        }

        write!(
            f,
            "Weather Forecast for {} (ZIP {}",
            self.tomorrow.format("%Y-%m-%d"),
            self.postal_code
        )?;
        if let Some(label) = &self.label {
            write!(f, ", {label}")?;
        }
        writeln!(f, "):")?;

        writeln!(f, "Condition: {}", self.condition)?;
        writeln!(f, "High: {}°F", Reading(&self.day.temperature_max_f))?;
        writeln!(f, "Low: {}°F", Reading(&self.day.temperature_min_f))?;
        writeln!(f, "Precipitation: {} mm", Reading(&self.day.precipitation_sum_mm))?;
        write!(f, "Max Wind Speed: {} mph", Reading(&self.day.wind_speed_max_mph))
    }
}

struct Reading<'a>(&'a Option<Number>);

impl fmt::Display for Reading<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str(MISSING_READING),
        }
    }
}
