use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use super::error::{ApiError, ApiResult};
use super::state::AppState;
use super::types::{CarOptionsResponse, CatalogResponse, PredictionResponse};
use crate::core::validation;
use crate::utils::words;

/// GET /api
/// Connectivity probe; the deployed front-end matches on this exact
/// message, so it is kept byte-for-byte.
pub async fn hello() -> Json<Value> {
    Json(json!({"message": "Hello from Flask!"}))
}

/// GET /
/// Seed values for the form dropdowns: every company and year in the
/// dataset.
pub async fn catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        companies: state.dataset.companies(),
        years: state.dataset.years(),
    })
}

/// POST /get_cars
/// Models and fuel types for the selected company. An unknown company gets
/// empty lists, not an error.
pub async fn get_cars(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<CarOptionsResponse>> {
    let Json(body) = body.map_err(anyhow::Error::new)?;

    let company = body
        .get("company")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingCompany)?;

    Ok(Json(CarOptionsResponse {
        car_models: state.dataset.models_for(company),
        fuel_types: state.dataset.fuel_types_for(company),
    }))
}

/// POST /predict
/// Validates the payload against the dataset, runs the price model, and
/// renders the rounded price in words.
pub async fn predict(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<PredictionResponse>> {
    let Json(body) = body.map_err(anyhow::Error::new)?;
    tracing::debug!(payload = %body, "received prediction request");

    let request = validation::validate_prediction_request(&body, &state.dataset)?;
    let raw = state.model.predict(&request.features())?;

    // Round to whole rupees; the non-negative invariant wins over a model
    // that extrapolates below zero.
    let predicted_price = raw.round().max(0.0) as i64;
    let price_in_words = words::price_in_words(predicted_price as u64);

    Ok(Json(PredictionResponse {
        predicted_price,
        price_in_words,
    }))
}
