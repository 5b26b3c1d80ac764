use std::collections::HashMap;

use crate::models::{CityGenderCount, CityGenderDistribution};

/// Normalizes per-city gender counts into percentages. Buckets absent from
/// the counts table stay at zero, so each city's four fields sum to 1.0.
pub struct GenderDistributionAnalyzer;

impl GenderDistributionAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn distribute(&self, counts: &[CityGenderCount]) -> Vec<CityGenderDistribution> {
        let mut city_order: Vec<&str> = Vec::new();
        let mut totals: HashMap<&str, u64> = HashMap::new();

        for row in counts {
            if !totals.contains_key(row.city.as_str()) {
                city_order.push(&row.city);
            }
            *totals.entry(&row.city).or_insert(0) += row.num_users;
        }

        let mut distributions = Vec::with_capacity(city_order.len());
        for city in city_order {
            // Every counts row came from a nonempty bucket, so the total
            // is at least 1 and the division is safe.
            let total = totals[city] as f64;

            let mut distribution = CityGenderDistribution::new(city);
            for row in counts.iter().filter(|r| r.city == city) {
                distribution.set_bucket(row.gender, row.num_users as f64 / total);
            }
            distributions.push(distribution);
        }

        distributions
    }
}

impl Default for GenderDistributionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
