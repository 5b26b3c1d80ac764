use tracing::{debug, warn};

use crate::error::{ProcessingError, Result};
use crate::lookup::{LookupError, RetryPolicy, WeatherLookup};
use crate::models::UserRecord;
use crate::utils::progress::ProgressReporter;

/// Fills each record's city and temperature from the weather lookup
/// service, preserving row count and order.
///
/// Rows whose postal code is not exactly five characters are skipped
/// silently and come back with both fields unset. Transient lookup
/// failures are retried under the configured [`RetryPolicy`]; a permanent
/// failure aborts the whole stage.
pub struct Enricher<L: WeatherLookup> {
    lookup: L,
    retry: RetryPolicy,
}

impl<L: WeatherLookup> Enricher<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Enrich every record, returning a table of identical length and order.
    pub async fn enrich_records(
        &self,
        records: Vec<UserRecord>,
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<UserRecord>> {
        let mut enriched = Vec::with_capacity(records.len());

        for mut record in records {
            if record.has_lookup_key() {
                let observation = self.lookup_with_retry(&record.postal_code).await?;
                record.city = Some(observation.city);
                record.temperature = Some(observation.temperature);
            } else {
                debug!(
                    postal_code = %record.postal_code,
                    "Postal code is not 5 characters, skipping enrichment"
                );
            }

            enriched.push(record);
            if let Some(reporter) = progress {
                reporter.increment(1);
            }
        }

        Ok(enriched)
    }

    async fn lookup_with_retry(
        &self,
        postal_code: &str,
    ) -> Result<crate::lookup::WeatherObservation> {
        let mut attempts: u32 = 0;

        loop {
            match self.lookup.lookup(postal_code).await {
                Ok(observation) => return Ok(observation),
                Err(LookupError::Transient(reason)) => {
                    attempts += 1;
                    if !self.retry.allows_retry(attempts) {
                        return Err(ProcessingError::RetriesExhausted {
                            postal_code: postal_code.to_string(),
                            attempts,
                        });
                    }
                    warn!(postal_code, attempts, %reason, "Transient lookup failure, retrying");
                    self.retry.pause().await;
                }
                Err(err @ LookupError::Permanent(_)) => return Err(err.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{LookupError, WeatherObservation};
    use crate::models::Gender;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Scripted lookup client: each postal code maps to a queue of
    /// responses consumed front to back.
    struct ScriptedLookup {
        scripts: Mutex<HashMap<String, Vec<std::result::Result<WeatherObservation, LookupError>>>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedLookup {
        fn new() -> Self {
            Self {
                scripts: Mutex::new(HashMap::new()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn script(
            self,
            postal_code: &str,
            responses: Vec<std::result::Result<WeatherObservation, LookupError>>,
        ) -> Self {
            self.scripts
                .lock()
                .unwrap()
                .insert(postal_code.to_string(), responses);
            self
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl WeatherLookup for ScriptedLookup {
        async fn lookup(
            &self,
            postal_code: &str,
        ) -> std::result::Result<WeatherObservation, LookupError> {
            self.calls.lock().unwrap().push(postal_code.to_string());
            let mut scripts = self.scripts.lock().unwrap();
            let queue = scripts
                .get_mut(postal_code)
                .unwrap_or_else(|| panic!("no script for postal code {}", postal_code));
            queue.remove(0)
        }
    }

    fn observation(city: &str, temperature: f64) -> WeatherObservation {
        WeatherObservation {
            city: city.to_string(),
            temperature,
        }
    }

    fn no_sleep_policy() -> RetryPolicy {
        RetryPolicy::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_enrichment_preserves_rows_and_order() {
        let lookup = ScriptedLookup::new()
            .script("10001", vec![Ok(observation("New York", 50.0))])
            .script("99999", vec![Ok(observation("Anchorage", 10.0))]);

        let enricher = Enricher::new(lookup).with_retry_policy(no_sleep_policy());
        let records = vec![
            UserRecord::new("10001", Some(Gender::Female)),
            UserRecord::new("123", None),
            UserRecord::new("99999", Some(Gender::Male)),
        ];

        let enriched = enricher.enrich_records(records, None).await.unwrap();

        assert_eq!(enriched.len(), 3);
        assert_eq!(enriched[0].city.as_deref(), Some("New York"));
        assert_eq!(enriched[0].temperature, Some(50.0));
        assert_eq!(enriched[1].city, None);
        assert_eq!(enriched[1].temperature, None);
        assert_eq!(enriched[2].city.as_deref(), Some("Anchorage"));
    }

    #[tokio::test]
    async fn test_transient_failures_are_retried() {
        let lookup = ScriptedLookup::new().script(
            "10001",
            vec![
                Err(LookupError::Transient("connection reset".to_string())),
                Err(LookupError::Transient("connection reset".to_string())),
                Ok(observation("New York", 50.0)),
            ],
        );

        let enricher = Enricher::new(lookup).with_retry_policy(no_sleep_policy());
        let records = vec![UserRecord::new("10001", None)];

        let enriched = enricher.enrich_records(records, None).await.unwrap();
        assert_eq!(enriched[0].city.as_deref(), Some("New York"));
    }

    #[tokio::test]
    async fn test_permanent_failure_aborts() {
        let lookup = ScriptedLookup::new().script(
            "10001",
            vec![Err(LookupError::Permanent("bad body".to_string()))],
        );

        let enricher = Enricher::new(lookup).with_retry_policy(no_sleep_policy());
        let records = vec![UserRecord::new("10001", None)];

        let result = enricher.enrich_records(records, None).await;
        assert!(matches!(result, Err(ProcessingError::Lookup(_))));
    }

    #[tokio::test]
    async fn test_bounded_retries_give_up() {
        let lookup = ScriptedLookup::new().script(
            "10001",
            vec![
                Err(LookupError::Transient("tls".to_string())),
                Err(LookupError::Transient("tls".to_string())),
                Err(LookupError::Transient("tls".to_string())),
            ],
        );

        let enricher =
            Enricher::new(lookup).with_retry_policy(no_sleep_policy().with_max_attempts(3));
        let records = vec![UserRecord::new("10001", None)];

        let result = enricher.enrich_records(records, None).await;
        match result {
            Err(ProcessingError::RetriesExhausted {
                postal_code,
                attempts,
            }) => {
                assert_eq!(postal_code, "10001");
                assert_eq!(attempts, 3);
            }
            other => panic!("expected RetriesExhausted, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_invalid_postal_codes_never_hit_the_service() {
        let lookup = ScriptedLookup::new();
        let enricher = Enricher::new(lookup).with_retry_policy(no_sleep_policy());

        let records = vec![UserRecord::new("123", None), UserRecord::new("1234567", None)];
        let enriched = enricher.enrich_records(records, None).await.unwrap();

        assert_eq!(enriched.len(), 2);
        assert_eq!(enricher.lookup.call_count(), 0);
    }
}
