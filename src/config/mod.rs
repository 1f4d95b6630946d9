pub mod file;

pub use file::ServiceConfig;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "car-price-api")]
#[command(about = "HTTP service serving used-car price predictions")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "CSV dataset of car listings")]
    pub dataset_path: Option<String>,

    #[arg(long, help = "Serialized regression model artifact")]
    pub model_path: Option<String>,

    #[arg(long, help = "Address to bind")]
    pub host: Option<String>,

    #[arg(long, help = "Port to bind")]
    pub port: Option<u16>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit JSON-formatted logs")]
    pub log_json: bool,
}
