use crate::core::command::parse_value;
use crate::core::{Category, MemoryChange};
use crate::utils::error::{CalcError, Result};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value as JsonValue;

#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    #[serde(default)]
    pub expression: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub expression: String,
    pub result: f64,
}

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub value: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub function: String,
    /// Echo of the value as it was sent.
    pub value: JsonValue,
    pub result: f64,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: CategoryListing,
}

/// Serializes every category to its conversion names, in fixed order.
#[derive(Debug, Default)]
pub struct CategoryListing;

impl Serialize for CategoryListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for category in Category::ALL {
            let names: Vec<&str> = category.conversions().iter().map(|c| c.name()).collect();
            map.serialize_entry(category.name(), &names)?;
        }
        map.end()
    }
}

#[derive(Debug, Serialize)]
pub struct MemoryResponse {
    pub memory: f64,
}

#[derive(Debug, Deserialize)]
pub struct MemoryRequest {
    #[serde(default)]
    pub operation: Option<String>,
    #[serde(default)]
    pub value: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct MemoryChangeResponse {
    pub operation: String,
    #[serde(flatten)]
    pub change: MemoryChange,
}

/// Read a numeric request field that may arrive as a number or a numeric string.
/// `null` counts as absent.
pub fn numeric_field(value: Option<&JsonValue>) -> Result<Option<f64>> {
    match value {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| CalcError::invalid_input("Value must be a number")),
        Some(JsonValue::String(s)) => parse_value(s).map(Some),
        Some(_) => Err(CalcError::invalid_input("Value must be a number")),
    }
}
