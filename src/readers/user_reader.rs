use std::fs::File;
use std::path::Path;

use crate::error::{ProcessingError, Result};
use crate::models::UserRecord;

/// Reads user records from a delimited input file. The file must carry a
/// `postal_code` column; `gender` is optional, and `city`/`temperature`
/// columns are accepted so an enriched output can be fed back in.
pub struct UserReader;

impl UserReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_users(&self, path: &Path) -> Result<Vec<UserRecord>> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);

        if !reader
            .headers()?
            .iter()
            .any(|header| header == "postal_code")
        {
            return Err(ProcessingError::MissingData(format!(
                "Input file {} has no postal_code column",
                path.display()
            )));
        }

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: UserRecord = row?;
            records.push(record);
        }

        Ok(records)
    }
}

impl Default for UserReader {
    fn default() -> Self {
        Self::new()
    }
}
