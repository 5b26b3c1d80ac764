pub mod avg_temp;
pub mod gender_count;
pub mod gender_distribution;
pub mod top_cities;

pub use avg_temp::AvgTempAnalyzer;
pub use gender_count::GenderCountAnalyzer;
pub use gender_distribution::GenderDistributionAnalyzer;
pub use top_cities::TopCitiesRanker;

use std::collections::HashSet;

use crate::models::UserRecord;

/// Distinct enriched cities in first-seen input order. Rows that were never
/// enriched have no city and contribute nothing.
pub(crate) fn cities_in_first_seen_order(records: &[UserRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut cities = Vec::new();

    for record in records {
        if let Some(city) = record.city.as_deref() {
            if seen.insert(city) {
                cities.push(city);
            }
        }
    }

    cities
}

/// Mean of the temperatures actually present for a city. Rows without a
/// measurement are excluded from both the sum and the count rather than
/// coerced to zero.
pub(crate) fn mean_temperature(records: &[UserRecord], city: &str) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0u64;

    for record in records {
        if record.city.as_deref() == Some(city) {
            if let Some(temp) = record.temperature {
                sum += temp;
                count += 1;
            }
        }
    }

    if count > 0 {
        Some(sum / count as f64)
    } else {
        None
    }
}
