use std::sync::Arc;

use crate::processor::OrderProcessor;

#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<OrderProcessor>,
}

impl AppState {
    pub fn new(processor: OrderProcessor) -> Self {
        Self {
            processor: Arc::new(processor),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(OrderProcessor::default())
    }
}
