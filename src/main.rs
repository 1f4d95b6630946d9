use car_price_api::utils::{logger, validation::Validate};
use car_price_api::{server, AppState, CliConfig, DatasetStore, LinearModel, ServiceConfig};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting car-price-api");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match ServiceConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let dataset = match DatasetStore::from_csv_path(config.dataset_path()) {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!("❌ Failed to load dataset {}: {}", config.dataset_path(), e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        "📁 Loaded {} car records across {} companies from {}",
        dataset.len(),
        dataset.companies().len(),
        config.dataset_path()
    );

    let model = match LinearModel::from_json_path(config.model_path()) {
        Ok(model) => model,
        Err(e) => {
            tracing::error!("❌ Failed to load model artifact {}: {}", config.model_path(), e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("✅ Model artifact loaded from {}", config.model_path());

    let addr = config.bind_addr()?;
    let state = AppState::new(Arc::new(dataset), Arc::new(model));

    server::serve(addr, state).await?;

    Ok(())
}
