pub mod openweather;
pub mod retry;

pub use openweather::OpenWeatherClient;
pub use retry::RetryPolicy;

use async_trait::async_trait;
use thiserror::Error;

/// City and current temperature for one postal code.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub city: String,
    pub temperature: f64,
}

#[derive(Error, Debug)]
pub enum LookupError {
    /// The call could not complete right now but may succeed if retried
    /// unchanged (connection negotiation failures, rate limiting).
    #[error("Transient lookup failure: {0}")]
    Transient(String),

    /// Retrying cannot help (malformed or unexpected response).
    #[error("Permanent lookup failure: {0}")]
    Permanent(String),
}

/// Maps a 5-character postal code to a city name and current temperature.
///
/// The concrete transport lives behind this trait so the enrichment stage
/// can be exercised with a scripted client in tests.
#[async_trait]
pub trait WeatherLookup: Send + Sync {
    async fn lookup(&self, postal_code: &str) -> std::result::Result<WeatherObservation, LookupError>;
}
