use std::cmp::Ordering;

use super::{cities_in_first_seen_order, mean_temperature};
use crate::models::{Gender, TopCityEntry, UserRecord};
use crate::utils::constants::{FEMALE_MAJORITY_THRESHOLD, TOP_CITIES_LIMIT};

/// Ranks cities where women are a strict majority by mean temperature,
/// warmest first, truncated to the configured limit.
pub struct TopCitiesRanker {
    limit: usize,
    majority_threshold: f64,
}

impl TopCitiesRanker {
    pub fn new() -> Self {
        Self {
            limit: TOP_CITIES_LIMIT,
            majority_threshold: FEMALE_MAJORITY_THRESHOLD,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn rank(&self, records: &[UserRecord]) -> Vec<TopCityEntry> {
        let mut entries = Vec::new();

        for city in cities_in_first_seen_order(records) {
            let mut num_users = 0u64;
            let mut num_female = 0u64;

            for record in records {
                if record.city.as_deref() == Some(city) {
                    num_users += 1;
                    if record.gender == Some(Gender::Female) {
                        num_female += 1;
                    }
                }
            }

            let female_percent = if num_users > 0 {
                num_female as f64 / num_users as f64
            } else {
                0.0
            };

            // Exactly 50% is not a majority.
            if female_percent <= self.majority_threshold {
                continue;
            }

            // A city whose rows carry no measurements cannot be ordered by
            // temperature and is left out of the ranking.
            if let Some(avg_temp) = mean_temperature(records, city) {
                entries.push(TopCityEntry::new(city, avg_temp, female_percent));
            }
        }

        // Stable sort keeps first-seen order among equal temperatures.
        entries.sort_by(|a, b| {
            b.avg_temp
                .partial_cmp(&a.avg_temp)
                .unwrap_or(Ordering::Equal)
        });
        entries.truncate(self.limit);

        entries
    }
}

impl Default for TopCitiesRanker {
    fn default() -> Self {
        Self::new()
    }
}
