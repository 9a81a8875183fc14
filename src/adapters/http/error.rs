use crate::core::registry;
use crate::core::MemoryOperation;
use crate::utils::error::CalcError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Map, Value as JsonValue};

/// JSON error body: `{"error": ...}` plus optional hint fields.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    hints: Map<String, JsonValue>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            hints: Map::new(),
        }
    }

    pub fn with_hint(mut self, key: &str, value: JsonValue) -> Self {
        self.hints.insert(key.to_string(), value);
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        match &err {
            CalcError::UnknownConversion { .. } => ApiError::bad_request(err.to_string())
                .with_hint("availableConversions", json!(registry::conversion_names())),
            CalcError::InvalidMemoryOperation { .. } => ApiError::bad_request("Invalid operation")
                .with_hint("validOperations", json!(MemoryOperation::VALID)),
            CalcError::Evaluation { message, .. } => ApiError::bad_request(message.clone()),
            CalcError::SessionLimit { .. } => Self {
                status: StatusCode::SERVICE_UNAVAILABLE,
                message: err.to_string(),
                hints: Map::new(),
            },
            CalcError::IoError(_) => {
                tracing::error!("Internal error: {}", err);
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                    hints: Map::new(),
                }
            }
            _ => ApiError::bad_request(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = Map::new();
        body.insert("error".to_string(), JsonValue::String(self.message));
        body.extend(self.hints);
        (self.status, Json(JsonValue::Object(body))).into_response()
    }
}
