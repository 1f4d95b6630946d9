use serde::{Deserialize, Serialize};

/// One historical car listing from the dataset CSV. Extra CSV columns are
/// ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarRecord {
    pub company: String,
    pub name: String,
    pub year: i32,
    pub fuel_type: String,
    pub kms_driven: i64,
}

/// A prediction request after validation: every field present, integers
/// parsed, and model/fuel type known to belong to the company.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    pub company: String,
    pub car_model: String,
    pub year: i32,
    pub fuel_type: String,
    pub kilo_driven: i64,
}

impl PredictionRequest {
    pub fn features(&self) -> FeatureRow {
        FeatureRow {
            name: self.car_model.clone(),
            company: self.company.clone(),
            year: self.year,
            kms_driven: self.kilo_driven,
            fuel_type: self.fuel_type.clone(),
        }
    }
}

/// The fixed five-field structure handed to the price model.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub name: String,
    pub company: String,
    pub year: i32,
    pub kms_driven: i64,
    pub fuel_type: String,
}
