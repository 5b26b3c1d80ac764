use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use super::{LookupError, WeatherLookup, WeatherObservation};
use crate::config::Settings;

/// Subset of the current-weather response body we care about.
#[derive(Deserialize)]
struct WeatherResponse {
    name: String,
    main: MainSection,
}

#[derive(Deserialize)]
struct MainSection {
    temp: f64,
}

/// Client for the OpenWeatherMap current-weather endpoint, keyed by
/// US postal code.
pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    country: String,
    units: String,
}

impl OpenWeatherClient {
    pub fn new(settings: &Settings) -> std::result::Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| LookupError::Permanent(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
            country: settings.country.clone(),
            units: settings.units.clone(),
        })
    }

    fn request_url(&self, postal_code: &str) -> String {
        format!(
            "{}?zip={},{}&appid={}&units={}",
            self.base_url, postal_code, self.country, self.api_key, self.units
        )
    }
}

#[async_trait]
impl WeatherLookup for OpenWeatherClient {
    async fn lookup(
        &self,
        postal_code: &str,
    ) -> std::result::Result<WeatherObservation, LookupError> {
        let url = self.request_url(postal_code);

        // Connection-level failures (TLS negotiation, timeouts) are worth
        // retrying; the request itself does not change between attempts.
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transient(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
            return Err(LookupError::Transient(format!(
                "Service returned status {}",
                status
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::Permanent(format!(
                "Service returned status {}: {}",
                status, body
            )));
        }

        let body: WeatherResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Permanent(format!("Malformed response body: {}", e)))?;

        debug!(postal_code, city = %body.name, temp = body.main.temp, "Lookup succeeded");

        Ok(WeatherObservation {
            city: body.name,
            temperature: body.main.temp,
        })
    }
}
