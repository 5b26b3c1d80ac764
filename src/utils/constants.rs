/// Lookup service defaults
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_COUNTRY: &str = "us";
pub const DEFAULT_UNITS: &str = "imperial";

/// Pacing: the service caps callers around 60 requests/minute, so transient
/// failures pause one second before the next attempt
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 1;

/// Ranking parameters
pub const TOP_CITIES_LIMIT: usize = 10;
pub const FEMALE_MAJORITY_THRESHOLD: f64 = 0.5;

/// Output file names
pub const ENRICHED_FILE: &str = "output.csv";
pub const GENDER_COUNT_FILE: &str = "cities_by_gender.csv";
pub const GENDER_DISTRIBUTION_FILE: &str = "cities_by_gender_distribution.csv";
pub const AVG_TEMP_FILE: &str = "cities_by_avg_temp.csv";
pub const TOP_CITIES_FILE: &str = "top_10_cities_by_temp.csv";
