pub mod dataset;
pub mod validation;

pub use crate::domain::model::{CarRecord, FeatureRow, PredictionRequest};
pub use crate::domain::ports::{PredictionError, PriceModel};
pub use crate::utils::error::Result;
