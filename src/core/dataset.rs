use crate::domain::model::CarRecord;
use crate::utils::error::{Result, ServiceError};
use std::collections::BTreeSet;
use std::path::Path;

/// In-memory, read-only table of historical car listings. Loaded once at
/// startup; every query is derived from the loaded rows.
pub struct DatasetStore {
    records: Vec<CarRecord>,
}

impl DatasetStore {
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: CarRecord = row?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(ServiceError::DataError {
                message: format!(
                    "dataset {} contains no rows",
                    path.as_ref().display()
                ),
            });
        }

        Ok(Self { records })
    }

    pub fn from_records(records: Vec<CarRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct companies, sorted ascending.
    pub fn companies(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.company.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct years, sorted descending.
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .rev()
            .collect()
    }

    /// Distinct model names for `company`, sorted ascending. Unknown
    /// companies yield an empty list, not an error.
    pub fn models_for(&self, company: &str) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| r.company == company)
            .map(|r| r.name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct fuel types for `company`, sorted ascending.
    pub fn fuel_types_for(&self, company: &str) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| r.company == company)
            .map(|r| r.fuel_type.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn has_model(&self, company: &str, model: &str) -> bool {
        self.records
            .iter()
            .any(|r| r.company == company && r.name == model)
    }

    pub fn has_fuel_type(&self, company: &str, fuel_type: &str) -> bool {
        self.records
            .iter()
            .any(|r| r.company == company && r.fuel_type == fuel_type)
    }
}
