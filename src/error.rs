use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{models::OrderResponse, response::JsonReply};

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Request must have a body.")]
    MissingBody,

    #[error("Error reading request body: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Error reading request body: order amounts are out of range")]
    AmountOutOfRange,
}

impl OrderError {
    pub fn status(&self) -> StatusCode {
        match self {
            OrderError::MissingBody => StatusCode::INTERNAL_SERVER_ERROR,
            OrderError::MalformedPayload(_) | OrderError::AmountOutOfRange => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    pub fn to_order_response(&self) -> OrderResponse {
        OrderResponse::failure(self.to_string())
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        JsonReply::new(self.status(), self.to_order_response()).into_response()
    }
}

pub type OrderResult<T> = Result<T, OrderError>;
