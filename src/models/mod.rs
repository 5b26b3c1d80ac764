pub mod report;
pub mod user;

pub use report::{CityAvgTemp, CityGenderCount, CityGenderDistribution, TopCityEntry};
pub use user::{Gender, GenderBucket, UserRecord};
