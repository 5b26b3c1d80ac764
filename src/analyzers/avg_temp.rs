use super::{cities_in_first_seen_order, mean_temperature};
use crate::models::{CityAvgTemp, UserRecord};

/// Computes each city's mean temperature over the rows that actually carry
/// a measurement.
pub struct AvgTempAnalyzer;

impl AvgTempAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn average(&self, records: &[UserRecord]) -> Vec<CityAvgTemp> {
        cities_in_first_seen_order(records)
            .into_iter()
            .map(|city| CityAvgTemp::new(city, mean_temperature(records, city)))
            .collect()
    }
}

impl Default for AvgTempAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
