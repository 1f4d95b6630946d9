use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub companies: Vec<String>,
    pub years: Vec<i32>,
}

#[derive(Debug, Serialize)]
pub struct CarOptionsResponse {
    pub car_models: Vec<String>,
    pub fuel_types: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub predicted_price: i64,
    pub price_in_words: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
