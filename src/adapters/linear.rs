use crate::domain::model::FeatureRow;
use crate::domain::ports::{PredictionError, PriceModel};
use crate::utils::error::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Pre-trained one-hot linear regression, deserialized from the JSON
/// artifact exported by the training pipeline. The artifact schema is owned
/// by that pipeline; this adapter only evaluates it.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModel {
    intercept: f64,
    year_coef: f64,
    kms_coef: f64,
    name_weights: HashMap<String, f64>,
    company_weights: HashMap<String, f64>,
    fuel_type_weights: HashMap<String, f64>,
}

impl LinearModel {
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let model = serde_json::from_reader(BufReader::new(file))?;
        Ok(model)
    }

    fn level_weight(
        table: &HashMap<String, f64>,
        column: &'static str,
        value: &str,
    ) -> std::result::Result<f64, PredictionError> {
        table
            .get(value)
            .copied()
            .ok_or_else(|| PredictionError::UnknownLevel {
                column,
                value: value.to_string(),
            })
    }
}

impl PriceModel for LinearModel {
    fn predict(&self, features: &FeatureRow) -> std::result::Result<f64, PredictionError> {
        // One-hot terms reduce to a weight lookup per categorical column.
        let name_weight = Self::level_weight(&self.name_weights, "name", &features.name)?;
        let company_weight =
            Self::level_weight(&self.company_weights, "company", &features.company)?;
        let fuel_weight =
            Self::level_weight(&self.fuel_type_weights, "fuel_type", &features.fuel_type)?;

        Ok(self.intercept
            + name_weight
            + company_weight
            + fuel_weight
            + self.year_coef * f64::from(features.year)
            + self.kms_coef * features.kms_driven as f64)
    }
}
