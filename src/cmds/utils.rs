use crate::catalog::tune::UNKNOWN;

/// Table cell for a nullable header column.
pub fn field_or_unknown(value: &Option<String>) -> String {
    value.clone().unwrap_or(UNKNOWN.to_string())
}
