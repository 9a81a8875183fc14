use crate::adapters::http::dto::{
    numeric_field, CalculateRequest, CalculateResponse, CategoriesResponse, CategoryListing,
    ConvertRequest, ConvertResponse, MemoryChangeResponse, MemoryRequest, MemoryResponse,
};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::core::memory::{MemoryStore, DEFAULT_SESSION};
use crate::core::MemoryOperation;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{json, Value as JsonValue};

pub const SESSION_HEADER: &str = "x-session-id";

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

fn session_id(headers: &HeaderMap) -> Result<String, ApiError> {
    let Some(raw) = headers.get(SESSION_HEADER) else {
        return Ok(DEFAULT_SESSION.to_string());
    };
    let id = raw
        .to_str()
        .map_err(|_| ApiError::bad_request("Invalid session id: header is not valid text"))?;
    MemoryStore::validate_session_id(id)?;
    Ok(id.to_string())
}

pub async fn api_info() -> Json<JsonValue> {
    Json(json!({
        "message": "Advanced Calculator API",
        "endpoints": {
            "GET /api": "API documentation",
            "POST /calculate": "Calculate a mathematical expression",
            "GET /convert": "List available conversions by category",
            "POST /convert": "Convert units",
            "GET /memory": "Get current memory value",
            "POST /memory": "Perform memory operations (add, subtract, clear, set)"
        },
        "examples": {
            "calculate": { "expression": "2 + 2" },
            "convert": { "function": "celsiusToFahrenheit", "value": 100 },
            "memory": { "operation": "add", "value": 10 }
        },
        "session": "Send an X-Session-Id header to keep a separate memory register"
    }))
}

pub async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> ApiResult<CalculateResponse> {
    let Json(request) = payload?;

    let expression = match request.expression {
        Some(expression) if !expression.trim().is_empty() => expression,
        _ => return Err(ApiError::bad_request("Expression is required")),
    };

    let result = state.calculator.evaluate(&expression)?;
    tracing::info!(%expression, result, "Calculated expression");

    Ok(Json(CalculateResponse { expression, result }))
}

pub async fn convert(
    State(state): State<AppState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> ApiResult<ConvertResponse> {
    let Json(request) = payload?;

    let value = numeric_field(request.value.as_ref())?;
    let (Some(function), Some(number)) = (request.function.filter(|f| !f.is_empty()), value) else {
        return Err(
            ApiError::bad_request("Conversion function and value are required").with_hint(
                "example",
                json!({ "function": "celsiusToFahrenheit", "value": 100 }),
            ),
        );
    };

    let result = state.calculator.convert(&function, number)?;
    tracing::info!(%function, value = number, result, "Converted value");

    Ok(Json(ConvertResponse {
        function,
        value: request.value.unwrap_or(JsonValue::Null),
        result,
    }))
}

pub async fn list_conversions() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: CategoryListing,
    })
}

pub async fn get_memory(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<MemoryResponse> {
    let session = session_id(&headers)?;
    Ok(Json(MemoryResponse {
        memory: state.memory.recall(&session),
    }))
}

pub async fn update_memory(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<MemoryRequest>, JsonRejection>,
) -> ApiResult<MemoryChangeResponse> {
    let session = session_id(&headers)?;
    let Json(request) = payload?;

    let Some(operation_name) = request.operation.filter(|op| !op.is_empty()) else {
        return Err(ApiError::bad_request("Operation is required")
            .with_hint("validOperations", json!(MemoryOperation::VALID))
            .with_hint("example", json!({ "operation": "add", "value": 10 })));
    };

    let operation: MemoryOperation = operation_name.parse()?;
    let value = if operation.requires_value() {
        numeric_field(request.value.as_ref())?
    } else {
        None
    };
    let change = state.memory.apply(&session, operation, value)?;
    tracing::info!(
        %session,
        operation = operation.name(),
        old = change.old_value,
        new = change.new_value,
        "Memory operation applied"
    );

    Ok(Json(MemoryChangeResponse {
        operation: operation_name,
        change,
    }))
}
