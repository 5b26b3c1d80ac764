use std::collections::HashMap;

use super::cities_in_first_seen_order;
use crate::models::{CityGenderCount, GenderBucket, UserRecord};

/// Groups enriched records by (city, gender bucket) and counts members.
/// Only nonempty buckets produce rows.
pub struct GenderCountAnalyzer;

impl GenderCountAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn count(&self, records: &[UserRecord]) -> Vec<CityGenderCount> {
        let mut counts: HashMap<(&str, GenderBucket), u64> = HashMap::new();

        for record in records {
            if let Some(city) = record.city.as_deref() {
                *counts.entry((city, record.gender_bucket())).or_insert(0) += 1;
            }
        }

        let mut rows = Vec::new();
        for city in cities_in_first_seen_order(records) {
            for bucket in GenderBucket::ALL {
                if let Some(&num_users) = counts.get(&(city, bucket)) {
                    rows.push(CityGenderCount::new(city, bucket, num_users));
                }
            }
        }

        rows
    }
}

impl Default for GenderCountAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
