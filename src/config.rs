use std::time::Duration;

use serde::Deserialize;

use crate::error::{ProcessingError, Result};
use crate::lookup::RetryPolicy;
use crate::utils::constants::{
    DEFAULT_BASE_URL, DEFAULT_COUNTRY, DEFAULT_RETRY_DELAY_SECS, DEFAULT_UNITS,
};

/// Lookup-service settings, layered: built-in defaults, then an optional
/// `weather.toml` next to the binary, then `WEATHER_*` environment
/// variables. The API key is never baked into the source.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
    pub country: String,
    pub units: String,
    pub retry_delay_secs: u64,
    pub max_attempts: Option<u32>,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("api_key", "")?
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("country", DEFAULT_COUNTRY)?
            .set_default("units", DEFAULT_UNITS)?
            .set_default("retry_delay_secs", DEFAULT_RETRY_DELAY_SECS as i64)?
            .add_source(config::File::with_name("weather").required(false))
            .add_source(config::Environment::with_prefix("WEATHER"))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    /// Defaults only; used by tests and as a base for overrides.
    pub fn with_defaults() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            units: DEFAULT_UNITS.to_string(),
            retry_delay_secs: DEFAULT_RETRY_DELAY_SECS,
            max_attempts: None,
        }
    }

    pub fn require_api_key(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(ProcessingError::Config(
                "No API key configured; set WEATHER_API_KEY or api_key in weather.toml"
                    .to_string(),
            ));
        }
        Ok(())
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        let policy = RetryPolicy::new(Duration::from_secs(self.retry_delay_secs));
        match self.max_attempts {
            Some(max) => policy.with_max_attempts(max),
            None => policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::with_defaults();

        assert_eq!(
            settings.base_url,
            "https://api.openweathermap.org/data/2.5/weather"
        );
        assert_eq!(settings.country, "us");
        assert_eq!(settings.units, "imperial");
        assert_eq!(settings.retry_delay_secs, 1);
        assert_eq!(settings.max_attempts, None);
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let settings = Settings::with_defaults();
        assert!(settings.require_api_key().is_err());

        let mut with_key = Settings::with_defaults();
        with_key.api_key = "k".to_string();
        assert!(with_key.require_api_key().is_ok());
    }

    #[test]
    fn test_environment_overrides_defaults() {
        // The only test touching WEATHER_* variables, so parallel test
        // threads cannot observe a half-set environment.
        std::env::set_var("WEATHER_API_KEY", "env-key");
        std::env::set_var("WEATHER_UNITS", "metric");
        std::env::set_var("WEATHER_RETRY_DELAY_SECS", "7");

        let settings = Settings::load().unwrap();

        std::env::remove_var("WEATHER_API_KEY");
        std::env::remove_var("WEATHER_UNITS");
        std::env::remove_var("WEATHER_RETRY_DELAY_SECS");

        assert_eq!(settings.api_key, "env-key");
        assert_eq!(settings.units, "metric");
        assert_eq!(settings.retry_delay_secs, 7);
        // Untouched keys keep their defaults.
        assert_eq!(settings.country, "us");
        assert_eq!(settings.max_attempts, None);
    }

    #[test]
    fn test_retry_policy_from_settings() {
        let mut settings = Settings::with_defaults();
        settings.retry_delay_secs = 2;
        settings.max_attempts = Some(5);

        let policy = settings.retry_policy();
        assert_eq!(policy.delay(), Duration::from_secs(2));
        assert!(policy.allows_retry(4));
        assert!(!policy.allows_retry(5));
    }
}
