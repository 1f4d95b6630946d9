use crate::domain::model::FeatureRow;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    #[error("unknown {column} level: {value}")]
    UnknownLevel { column: &'static str, value: String },
}

/// Interface for the pre-trained price model. Implementations shape the
/// feature row into whatever structure the serialized artifact expects and
/// return its single scalar output.
pub trait PriceModel: Send + Sync {
    /// Raw (unrounded) price estimate in rupees.
    fn predict(&self, features: &FeatureRow) -> Result<f64, PredictionError>;
}
