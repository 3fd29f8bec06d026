use chrono::NaiveDate;
use std::io::Write;
use tracing::info;

use crate::{
    Config,
    error::PipelineError,
    model::ForecastRequest,
    provider::{ForecastSource, Geocoder, forecast_source_from_config, geocoder_from_config},
    report::Report,
};

/// Geocode, fetch, report: one pass per invocation.
#[derive(Debug)]
pub struct Pipeline {
    geocoder: Box<dyn Geocoder>,
    forecast: Box<dyn ForecastSource>,
}

impl Pipeline {
    pub fn new(geocoder: Box<dyn Geocoder>, forecast: Box<dyn ForecastSource>) -> Self {
        Self { geocoder, forecast }
    }

    pub fn from_config(config: &Config) -> Result<Self, PipelineError> {
        Ok(Self::new(geocoder_from_config(config)?, forecast_source_from_config(config)?))
    }

    /// Run all three steps, writing coordinates and the report to `out`.
    ///
    /// A geocoding failure returns before any forecast request is made.
    pub async fn run<W: Write>(
        &self,
        request: &ForecastRequest,
        today: NaiveDate,
        out: &mut W,
    ) -> Result<Report, PipelineError> {
        let location = self.geocoder.locate(&request.postal_code, &request.country).await?;
        writeln!(out, "lat: {}", location.latitude)?;
        writeln!(out, "lon: {}", location.longitude)?;

        let forecast = self.forecast.daily_forecast(&location).await?;
        let report = Report::build(request, &forecast, today)?;

        if report.date_mismatch() {
            info!(
                expected = %report.tomorrow,
                reported = %report.day.date,
                "forecast date mismatch"
            );
        }

        writeln!(out, "{report}")?;
        Ok(report)
    }
}
