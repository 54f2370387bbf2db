use crate::domain::GeoPoint;
use crate::geocoding::{ReverseGeocoder, UNKNOWN_LOCATION};
use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, instrument, warn};

#[derive(Clone, Debug)]
pub struct Config {
    pub url: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub retry_ms: u64,
    pub retry_max_delay: Duration,
    pub max_retries: usize,
}

/// Reverse geocoder backed by the OpenStreetMap Nominatim API.
#[derive(Debug)]
pub struct NominatimGeocoder {
    client: Client,
    config: Config,
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
}

impl NominatimGeocoder {
    pub fn new(config: Config) -> Result<Self, GeocodeError> {
        // Nominatim's usage policy rejects requests without an identifying user agent
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_str(&config.user_agent)?);

        let client = Client::builder().default_headers(headers).timeout(config.timeout).build()?;
        Ok(NominatimGeocoder { client, config })
    }

    #[instrument(skip(self), fields(url = %self.config.url))]
    async fn reverse(&self, point: &GeoPoint) -> Result<Option<String>, GeocodeError> {
        let response = self
            .client
            .get(format!("{}/reverse", self.config.url.trim_end_matches('/')))
            .query(&[
                ("format", "json".to_string()),
                ("lat", point.latitude.to_string()),
                ("lon", point.longitude.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.json::<ReverseResponse>().await?;
        debug!(display_name = ?body.display_name, "Reverse geocoded {}", point);
        Ok(body.display_name.filter(|name| !name.trim().is_empty()))
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimGeocoder {
    #[instrument(skip(self))]
    async fn name_of(&self, point: &GeoPoint) -> String {
        let strategy = ExponentialBackoff::from_millis(self.config.retry_ms)
            .factor(2)
            .max_delay(self.config.retry_max_delay)
            .map(jitter)
            .take(self.config.max_retries);

        info!("🗺️ Resolving the name of {}...", point);
        let result = Retry::spawn(strategy, || async {
            self.reverse(point).await.inspect_err(|e| warn!("⚠️ Reverse geocoding error: {}. Retrying...", e))
        })
        .await;

        match result {
            Ok(Some(name)) => {
                info!("🗺️ Resolving the name of {}... OK, '{}'", point, name);
                name
            }
            Ok(None) => {
                warn!("⚠️ No name found for {}", point);
                UNKNOWN_LOCATION.to_string()
            }
            Err(e) => {
                warn!("⚠️ Reverse geocoding failed for {}: {}", point, e);
                UNKNOWN_LOCATION.to_string()
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("geocoder set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
}
