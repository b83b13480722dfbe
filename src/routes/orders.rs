use axum::{
    Router,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
    routing::get,
};

use crate::{
    error::OrderResult,
    models::{OrderRequest, OrderResponse},
    response::JsonReply,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/ProcessOrder", get(process_order).post(process_order))
}

#[utoipa::path(
    method(get, post),
    path = "/api/ProcessOrder",
    request_body(content = OrderRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Order priced", body = OrderResponse),
        (status = 400, description = "Body is not a valid order", body = OrderResponse),
        (status = 500, description = "Request had no body", body = OrderResponse),
    ),
    tag = "Orders"
)]
pub async fn process_order(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> OrderResult<JsonReply<OrderResponse>> {
    let body = match body {
        Ok(bytes) => Some(bytes),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "could not read request body");
            None
        }
    };

    let response = state.processor.process(body.as_deref())?;
    Ok(JsonReply::new(StatusCode::OK, response))
}
