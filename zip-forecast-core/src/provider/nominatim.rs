//! Nominatim (OpenStreetMap) postal code search.

use async_trait::async_trait;
use reqwest::{Client, header::USER_AGENT};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::{
    Config,
    error::{GeocodingError, truncate_body},
    model::Location,
};

use super::Geocoder;

#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    url: String,
    user_agent: String,
    http: Client,
}

impl NominatimGeocoder {
    pub fn new(
        url: impl Into<String>,
        user_agent: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GeocodingError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { url: url.into(), user_agent: user_agent.into(), http })
    }

    pub fn from_config(config: &Config) -> Result<Self, GeocodingError> {
        Self::new(&config.geocoder_url, &config.user_agent, config.request_timeout())
    }
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: Option<String>,
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn locate(&self, postal_code: &str, country: &str) -> Result<Location, GeocodingError> {
        debug!(url = %self.url, postal_code, country, "looking up postal code");

        let res = self
            .http
            .get(&self.url)
            .header(USER_AGENT, self.user_agent.as_str())
            .query(&[("postalcode", postal_code), ("country", country), ("format", "json")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(GeocodingError::Status { status, body: truncate_body(&body) });
        }

        let places: Vec<NominatimPlace> = serde_json::from_str(&body)?;
        debug!(candidates = places.len(), "geocoder answered");

        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| GeocodingError::NotFound { postal_code: postal_code.to_string() })?;

        info!(
            lat = %place.lat,
            lon = %place.lon,
            place = place.display_name.as_deref().unwrap_or("unnamed"),
            "resolved {postal_code}"
        );

        Ok(Location { latitude: place.lat, longitude: place.lon, display_name: place.display_name })
    }
}
