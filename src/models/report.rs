use serde::{Deserialize, Serialize};

use super::user::GenderBucket;

/// One nonempty (city, gender bucket) pair with its member count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityGenderCount {
    pub city: String,
    pub gender: GenderBucket,
    pub num_users: u64,
}

impl CityGenderCount {
    pub fn new(city: impl Into<String>, gender: GenderBucket, num_users: u64) -> Self {
        Self {
            city: city.into(),
            gender,
            num_users,
        }
    }
}

/// Per-city share of each gender bucket. The four fields sum to 1.0 for
/// every city that appears in the counts table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityGenderDistribution {
    pub city: String,
    pub female_percent: f64,
    pub male_percent: f64,
    pub non_binary_percent: f64,
    pub blank_percent: f64,
}

impl CityGenderDistribution {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            female_percent: 0.0,
            male_percent: 0.0,
            non_binary_percent: 0.0,
            blank_percent: 0.0,
        }
    }

    pub fn set_bucket(&mut self, bucket: GenderBucket, share: f64) {
        match bucket {
            GenderBucket::Female => self.female_percent = share,
            GenderBucket::Male => self.male_percent = share,
            GenderBucket::NonBinary => self.non_binary_percent = share,
            GenderBucket::Blank => self.blank_percent = share,
        }
    }

    pub fn total(&self) -> f64 {
        self.female_percent + self.male_percent + self.non_binary_percent + self.blank_percent
    }
}

/// Mean temperature over a city's rows that carry a measurement. `None`
/// when every row for the city lacks one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityAvgTemp {
    pub city: String,
    pub avg_temp: Option<f64>,
}

impl CityAvgTemp {
    pub fn new(city: impl Into<String>, avg_temp: Option<f64>) -> Self {
        Self {
            city: city.into(),
            avg_temp,
        }
    }
}

/// Entry in the warmest female-majority cities ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCityEntry {
    pub city: String,
    pub avg_temp: f64,
    pub female_percent: f64,
}

impl TopCityEntry {
    pub fn new(city: impl Into<String>, avg_temp: f64, female_percent: f64) -> Self {
        Self {
            city: city.into(),
            avg_temp,
            female_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_buckets() {
        let mut dist = CityGenderDistribution::new("Boston");
        dist.set_bucket(GenderBucket::Female, 0.6);
        dist.set_bucket(GenderBucket::Blank, 0.4);

        assert_eq!(dist.female_percent, 0.6);
        assert_eq!(dist.male_percent, 0.0);
        assert!((dist.total() - 1.0).abs() < 1e-9);
    }
}
