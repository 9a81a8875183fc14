//! Conversion registry: the eight fixed categories and the flattened
//! name lookup across them.

use crate::core::{Category, Conversion};
use crate::utils::error::{CalcError, Result};

pub fn list_categories() -> &'static [Category] {
    &Category::ALL
}

/// Conversions of one category, looked up by its case-sensitive name.
pub fn list_conversions(category: &str) -> Result<&'static [Conversion]> {
    let category: Category = category.parse()?;
    Ok(category.conversions())
}

pub fn get_conversion(name: &str) -> Option<Conversion> {
    Conversion::from_name(name)
}

pub fn convert(name: &str, value: f64) -> Result<f64> {
    let conversion = get_conversion(name).ok_or_else(|| CalcError::UnknownConversion {
        name: name.to_string(),
    })?;

    let result = conversion.apply(value);
    tracing::debug!(conversion = name, value, result, "Applied conversion");
    Ok(result)
}

/// All conversion names in category order.
pub fn conversion_names() -> Vec<&'static str> {
    Conversion::all().map(Conversion::name).collect()
}
