use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Indented JSON body with an explicit utf-8 content type.
#[derive(Debug, Clone)]
pub struct JsonReply<T> {
    pub status: StatusCode,
    pub body: T,
}

impl<T: Serialize> JsonReply<T> {
    pub fn new(status: StatusCode, body: T) -> Self {
        Self { status, body }
    }
}

impl<T: Serialize> IntoResponse for JsonReply<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.body) {
            Ok(bytes) => (
                self.status,
                [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
                bytes,
            )
                .into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize response body");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
                    r#"{"message":"Internal Server Error","discountValue":0,"orderTotal":0}"#,
                )
                    .into_response()
            }
        }
    }
}
