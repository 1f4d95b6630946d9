pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use crate::adapters::linear::LinearModel;
pub use crate::config::{CliConfig, ServiceConfig};
pub use crate::core::dataset::DatasetStore;
pub use crate::server::state::AppState;
pub use crate::utils::error::{Result, ServiceError};
