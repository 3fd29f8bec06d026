use thiserror::Error;

/// Failures while resolving a postal code to coordinates.
#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("request to geocoder failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("geocoder returned status {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },

    #[error("failed to parse geocoder response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("ZIP code not found: {postal_code}")]
    NotFound { postal_code: String },
}

/// Failures while fetching or reading the daily forecast.
#[derive(Debug, Error)]
pub enum WeatherApiError {
    #[error("request to forecast service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("forecast service returned status {status}: {reason}")]
    Status { status: reqwest::StatusCode, reason: String },

    #[error("failed to parse forecast response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("forecast has no entry for day {index} in `{field}`")]
    MissingDay { index: usize, field: &'static str },
}

/// Error surfaced by a full pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Geocoding error: {0}")]
    Geocoding(#[from] GeocodingError),

    #[error("Weather API error: {0}")]
    Weather(#[from] WeatherApiError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_mentions_zip_code() {
        let err = GeocodingError::NotFound { postal_code: "00000".into() };
        assert_eq!(err.to_string(), "ZIP code not found: 00000");
    }

    #[test]
    fn pipeline_errors_carry_step_prefix() {
        let geo: PipelineError = GeocodingError::NotFound { postal_code: "1".into() }.into();
        assert!(geo.to_string().starts_with("Geocoding error: "));

        let weather: PipelineError =
            WeatherApiError::MissingDay { index: 1, field: "time" }.into();
        assert!(weather.to_string().starts_with("Weather API error: "));
    }

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn truncate_body_cuts_long_bodies() {
        let long = "é".repeat(300);
        let cut = truncate_body(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 203);
    }
}
