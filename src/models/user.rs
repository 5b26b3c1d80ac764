use serde::{Deserialize, Serialize};
use validator::Validate;

/// Self-reported gender as it appears in the input file. Blank cells
/// deserialize to `None` and are bucketed separately downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
    NonBinary,
}

/// Grouping key used by the aggregate reports: the three gender values
/// plus an explicit bucket for rows where gender was left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderBucket {
    Female,
    Male,
    NonBinary,
    Blank,
}

impl GenderBucket {
    pub const ALL: [GenderBucket; 4] = [
        GenderBucket::Female,
        GenderBucket::Male,
        GenderBucket::NonBinary,
        GenderBucket::Blank,
    ];

    pub fn from_gender(gender: Option<Gender>) -> Self {
        match gender {
            Some(Gender::Female) => GenderBucket::Female,
            Some(Gender::Male) => GenderBucket::Male,
            Some(Gender::NonBinary) => GenderBucket::NonBinary,
            None => GenderBucket::Blank,
        }
    }
}

/// One row of the input table. City and temperature start out unset and are
/// filled in exactly once by the enrichment stage; rows whose postal code
/// fails shape validation keep them unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserRecord {
    /// Opaque lookup key; treated as a string throughout so codes with
    /// leading zeros survive intact.
    #[validate(length(equal = 5))]
    pub postal_code: String,

    #[serde(default)]
    pub gender: Option<Gender>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub temperature: Option<f64>,
}

impl UserRecord {
    pub fn new(postal_code: impl Into<String>, gender: Option<Gender>) -> Self {
        Self {
            postal_code: postal_code.into(),
            gender,
            city: None,
            temperature: None,
        }
    }

    /// Whether the postal code has the 5-character shape the lookup
    /// service accepts.
    pub fn has_lookup_key(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn gender_bucket(&self) -> GenderBucket {
        GenderBucket::from_gender(self.gender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postal_code_shape() {
        let record = UserRecord::new("10001", Some(Gender::Female));
        assert!(record.has_lookup_key());

        let short = UserRecord::new("123", None);
        assert!(!short.has_lookup_key());

        let long = UserRecord::new("100014", None);
        assert!(!long.has_lookup_key());
    }

    #[test]
    fn test_leading_zero_preserved() {
        // "02134" must stay five characters; the string representation
        // never collapses to 2134.
        let record = UserRecord::new("02134", None);
        assert!(record.has_lookup_key());
        assert_eq!(record.postal_code, "02134");
    }

    #[test]
    fn test_gender_buckets() {
        assert_eq!(
            UserRecord::new("10001", Some(Gender::NonBinary)).gender_bucket(),
            GenderBucket::NonBinary
        );
        assert_eq!(
            UserRecord::new("10001", None).gender_bucket(),
            GenderBucket::Blank
        );
    }
}
