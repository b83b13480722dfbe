use std::sync::Arc;

use axum::http::StatusCode;

use crate::{
    error::{OrderError, OrderResult},
    models::{OrderRequest, OrderResponse},
    pricing::PricingPolicy,
    telemetry::{EventSink, TracingSink},
};

/// Maps a raw order payload to a priced response.
///
/// Holds no per-request state, so one instance can serve any number of
/// concurrent requests.
#[derive(Clone)]
pub struct OrderProcessor {
    policy: PricingPolicy,
    sink: Arc<dyn EventSink>,
}

impl Default for OrderProcessor {
    fn default() -> Self {
        Self::new(PricingPolicy::default(), Arc::new(TracingSink))
    }
}

impl OrderProcessor {
    pub fn new(policy: PricingPolicy, sink: Arc<dyn EventSink>) -> Self {
        Self { policy, sink }
    }

    /// Never fails: errors are folded into the status and message.
    pub fn handle(&self, raw_body: Option<&[u8]>) -> (StatusCode, OrderResponse) {
        match self.process(raw_body) {
            Ok(response) => (StatusCode::OK, response),
            Err(err) => (err.status(), err.to_order_response()),
        }
    }

    pub fn process(&self, raw_body: Option<&[u8]>) -> OrderResult<OrderResponse> {
        self.sink.record("order processing started");

        let body = match raw_body {
            Some(body) if !body.is_empty() => body,
            _ => return Err(OrderError::MissingBody),
        };

        // `null` is a valid document and prices as an empty order.
        let order: Option<OrderRequest> = serde_json::from_slice(body)?;
        let items = order.map(|o| o.items).unwrap_or_default();
        let quote = self
            .policy
            .quote(&items)
            .ok_or(OrderError::AmountOutOfRange)?;

        self.sink.record("order processing finished");
        Ok(OrderResponse::ok(quote.discount, quote.total))
    }
}
