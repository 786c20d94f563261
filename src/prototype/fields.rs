//! Typed extraction from dynamic override maps

use serde_json::Value;

use crate::core::error::{ForgeError, Result};

/// Field name to value mapping for data-driven overrides
pub type FieldMap = serde_json::Map<String, Value>;

pub fn as_str<'a>(field: &str, value: &'a Value) -> Result<&'a str> {
    value.as_str().ok_or_else(|| invalid(field, "string"))
}

pub fn as_u64(field: &str, value: &Value) -> Result<u64> {
    value.as_u64().ok_or_else(|| invalid(field, "non-negative integer"))
}

pub fn as_u32(field: &str, value: &Value) -> Result<u32> {
    let wide = as_u64(field, value)?;
    u32::try_from(wide).map_err(|_| invalid(field, "integer within u32 range"))
}

fn invalid(field: &str, expected: &'static str) -> ForgeError {
    ForgeError::InvalidFieldValue {
        field: field.to_string(),
        expected,
    }
}
