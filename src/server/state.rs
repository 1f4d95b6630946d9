use crate::core::dataset::DatasetStore;
use crate::domain::ports::PriceModel;
use std::sync::Arc;

/// Server state shared across all handlers. Both services are loaded once
/// at startup and never mutated, so handlers only ever take shared
/// references.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<DatasetStore>,
    pub model: Arc<dyn PriceModel>,
}

impl AppState {
    pub fn new(dataset: Arc<DatasetStore>, model: Arc<dyn PriceModel>) -> Self {
        Self { dataset, model }
    }
}
