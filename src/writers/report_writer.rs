use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::models::{
    CityAvgTemp, CityGenderCount, CityGenderDistribution, TopCityEntry, UserRecord,
};
use crate::utils::constants::{
    AVG_TEMP_FILE, ENRICHED_FILE, GENDER_COUNT_FILE, GENDER_DISTRIBUTION_FILE, TOP_CITIES_FILE,
};

/// Writes the enriched table and the four aggregate reports as CSV files
/// into a single output directory.
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn write_enriched(&self, records: &[UserRecord]) -> Result<PathBuf> {
        self.write_table(ENRICHED_FILE, records)
    }

    pub fn write_gender_counts(&self, rows: &[CityGenderCount]) -> Result<PathBuf> {
        self.write_table(GENDER_COUNT_FILE, rows)
    }

    pub fn write_gender_distributions(&self, rows: &[CityGenderDistribution]) -> Result<PathBuf> {
        self.write_table(GENDER_DISTRIBUTION_FILE, rows)
    }

    pub fn write_avg_temps(&self, rows: &[CityAvgTemp]) -> Result<PathBuf> {
        self.write_table(AVG_TEMP_FILE, rows)
    }

    pub fn write_top_cities(&self, rows: &[TopCityEntry]) -> Result<PathBuf> {
        self.write_table(TOP_CITIES_FILE, rows)
    }

    fn write_table<T: Serialize>(&self, file_name: &str, rows: &[T]) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(file_name);

        let mut writer = csv::Writer::from_path(&path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        info!(path = %path.display(), rows = rows.len(), "Report written");
        Ok(path)
    }
}
