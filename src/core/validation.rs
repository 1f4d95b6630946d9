use crate::core::dataset::DatasetStore;
use crate::domain::model::PredictionRequest;
use serde_json::Value;
use thiserror::Error;

/// Required fields of a prediction payload, in the order they are checked.
const REQUIRED_FIELDS: [&str; 5] = ["company", "car_model", "year", "fuel_type", "kilo_driven"];

/// First failing rule for a prediction payload. Display strings are the
/// exact messages returned on the wire.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Value error: {0}")]
    ValueError(String),

    #[error("Invalid car model for the selected company")]
    InvalidModel,

    #[error("Invalid fuel type for the selected company")]
    InvalidFuelType,
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

fn string_field(payload: &Value, field: &'static str) -> Result<String, ValidationError> {
    match payload.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ValidationError::ValueError(format!(
            "{} must be a string, got {}",
            field, other
        ))),
        None => Err(ValidationError::MissingField(field)),
    }
}

fn integer_field(payload: &Value, field: &'static str) -> Result<i64, ValidationError> {
    match payload.get(field) {
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| {
            ValidationError::ValueError(format!("{} must be an integer, got {}", field, n))
        }),
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|e| {
            ValidationError::ValueError(format!("invalid literal for {}: {}", field, e))
        }),
        Some(other) => Err(ValidationError::ValueError(format!(
            "{} must be an integer, got {}",
            field, other
        ))),
        None => Err(ValidationError::MissingField(field)),
    }
}

/// Turns a raw JSON payload into a typed [`PredictionRequest`], or reports
/// the first failing rule: required fields (in declaration order), integer
/// conversions, then model and fuel-type membership for the company.
pub fn validate_prediction_request(
    payload: &Value,
    dataset: &DatasetStore,
) -> Result<PredictionRequest, ValidationError> {
    for field in REQUIRED_FIELDS {
        if !is_present(payload.get(field)) {
            return Err(ValidationError::MissingField(field));
        }
    }

    let company = string_field(payload, "company")?;
    let car_model = string_field(payload, "car_model")?;
    let year = integer_field(payload, "year")?;
    let fuel_type = string_field(payload, "fuel_type")?;
    let kilo_driven = integer_field(payload, "kilo_driven")?;

    let year = i32::try_from(year).map_err(|_| {
        ValidationError::ValueError(format!("year {} is out of range", year))
    })?;

    if !dataset.has_model(&company, &car_model) {
        return Err(ValidationError::InvalidModel);
    }

    if !dataset.has_fuel_type(&company, &fuel_type) {
        return Err(ValidationError::InvalidFuelType);
    }

    Ok(PredictionRequest {
        company,
        car_model,
        year,
        fuel_type,
        kilo_driven,
    })
}
