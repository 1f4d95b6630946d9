use car_price_api::{AppState, DatasetStore, LinearModel};
use serde_json::{json, Value};
use std::io::Write;
use std::sync::Arc;
use tempfile::TempDir;

/// Writes dataset and artifact fixtures to disk, loads both through the
/// startup paths, and drives the resulting server end to end.
fn write_fixtures(dir: &TempDir) -> (String, String) {
    let dataset_path = dir.path().join("cars.csv");
    let mut dataset_file = std::fs::File::create(&dataset_path).unwrap();
    writeln!(dataset_file, "company,name,year,fuel_type,kms_driven").unwrap();
    writeln!(dataset_file, "Hyundai,Hyundai Santro,2015,Petrol,45000").unwrap();
    writeln!(dataset_file, "Hyundai,Hyundai i20,2017,Diesel,30000").unwrap();
    writeln!(dataset_file, "Maruti,Maruti Swift,2014,Petrol,30000").unwrap();

    let artifact = json!({
        "intercept": 100000.0,
        "year_coef": 50.0,
        "kms_coef": -1.0,
        "name_weights": {
            "Hyundai Santro": 20000.0,
            "Hyundai i20": 40000.0,
            "Maruti Swift": 30000.0,
        },
        "company_weights": {"Hyundai": 10000.0, "Maruti": 15000.0},
        "fuel_type_weights": {"Petrol": 5000.0, "Diesel": 8000.0},
    });
    let model_path = dir.path().join("model.json");
    std::fs::write(&model_path, artifact.to_string()).unwrap();

    (
        dataset_path.to_str().unwrap().to_string(),
        model_path.to_str().unwrap().to_string(),
    )
}

#[tokio::test]
async fn test_loads_from_disk_and_serves_predictions() {
    let temp_dir = TempDir::new().unwrap();
    let (dataset_path, model_path) = write_fixtures(&temp_dir);

    let dataset = DatasetStore::from_csv_path(&dataset_path).unwrap();
    assert_eq!(dataset.len(), 3);

    let model = LinearModel::from_json_path(&model_path).unwrap();
    let state = AppState::new(Arc::new(dataset), Arc::new(model));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, car_price_api::server::router(state))
            .await
            .unwrap();
    });
    let base_url = format!("http://{}", addr);

    let catalog: Value = reqwest::get(format!("{}/", base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(catalog["companies"], json!(["Hyundai", "Maruti"]));
    assert_eq!(catalog["years"], json!([2017, 2015, 2014]));

    let payload = json!({
        "company": "Hyundai",
        "car_model": "Hyundai Santro",
        "year": 2015,
        "fuel_type": "Petrol",
        "kilo_driven": 45000,
    });
    let response = reqwest::Client::new()
        .post(format!("{}/predict", base_url))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    // 100000 + 20000 + 10000 + 5000 + 50*2015 - 45000 = 190750
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["predicted_price"], 190_750);
    assert_eq!(
        body["price_in_words"],
        "Rupees One lakh ninety thousand seven hundred fifty Only"
    );
}

#[tokio::test]
async fn test_missing_dataset_file_is_a_startup_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.csv");

    assert!(DatasetStore::from_csv_path(&missing).is_err());
}

#[tokio::test]
async fn test_malformed_artifact_is_a_startup_error() {
    let temp_dir = TempDir::new().unwrap();
    let model_path = temp_dir.path().join("model.json");
    std::fs::write(&model_path, "{\"intercept\": \"not a number\"}").unwrap();

    assert!(LinearModel::from_json_path(&model_path).is_err());
}
