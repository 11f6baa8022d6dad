//! Column type inference for JSON sample values
//!
//! Each value is classified on its own (single-sample heuristic). Arrays are
//! typed from their first element only; conflicting element types are never
//! reconciled.
//!
//! ## Example
//!
//! ```rust
//! use json2sql::inference::{ColumnType, infer_column_type};
//! use serde_json::json;
//!
//! assert_eq!(infer_column_type(&json!(42)), ColumnType::Integer);
//! assert_eq!(infer_column_type(&json!("hello")).to_string(), "VARCHAR(255)");
//! ```

mod formats;
mod types;

use serde_json::{Number, Value};

pub use formats::{Format, detect_format, is_timestamp, is_uuid};
pub use types::{
    ColumnType, DECIMAL_PRECISION, DECIMAL_SCALE, DiagramType, VARCHAR_MAX_LEN,
};

/// Infer the PostgreSQL column type of a JSON value
pub fn infer_column_type(value: &Value) -> ColumnType {
    match value {
        Value::Null => ColumnType::Text,
        Value::Bool(_) => ColumnType::Boolean,
        Value::Number(n) => {
            if is_whole_number(n) {
                ColumnType::Integer
            } else {
                ColumnType::decimal()
            }
        }
        Value::String(s) => infer_string_type(s),
        Value::Array(items) => match items.first() {
            Some(first) => ColumnType::array_of(infer_column_type(first)),
            None => ColumnType::Jsonb,
        },
        Value::Object(_) => ColumnType::Jsonb,
    }
}

fn infer_string_type(s: &str) -> ColumnType {
    match detect_format(s) {
        Format::Uuid => ColumnType::Uuid,
        Format::Timestamp => ColumnType::Timestamp,
        Format::None => {
            if s.chars().count() > VARCHAR_MAX_LEN {
                ColumnType::Text
            } else {
                ColumnType::varchar()
            }
        }
    }
}

/// Infer the simplified diagram label of a JSON value.
///
/// No date or UUID detection is attempted.
pub fn infer_diagram_type(value: &Value) -> DiagramType {
    match value {
        Value::Null => DiagramType::Text,
        Value::Bool(_) => DiagramType::Boolean,
        Value::Number(n) => {
            if is_whole_number(n) {
                DiagramType::Int
            } else {
                DiagramType::Decimal
            }
        }
        Value::String(_) => DiagramType::Varchar,
        Value::Array(_) => DiagramType::Array,
        Value::Object(_) => DiagramType::Jsonb,
    }
}

/// A JSON number with no fractional part (`3` and `3.0` both qualify)
fn is_whole_number(n: &Number) -> bool {
    if n.is_i64() || n.is_u64() {
        return true;
    }
    n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(infer_column_type(&Value::Null), ColumnType::Text);
        assert_eq!(infer_column_type(&json!(true)), ColumnType::Boolean);
        assert_eq!(infer_column_type(&json!(7)), ColumnType::Integer);
        assert_eq!(infer_column_type(&json!(-7)), ColumnType::Integer);
        assert_eq!(infer_column_type(&json!(2.0)), ColumnType::Integer);
        assert_eq!(infer_column_type(&json!(1299.99)), ColumnType::decimal());
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            infer_column_type(&json!("550e8400-e29b-41d4-a716-446655440000")),
            ColumnType::Uuid
        );
        assert_eq!(
            infer_column_type(&json!("2024-01-15T10:30:00Z")),
            ColumnType::Timestamp
        );
        assert_eq!(infer_column_type(&json!("hello")), ColumnType::varchar());
        assert_eq!(
            infer_column_type(&json!("x".repeat(255))),
            ColumnType::varchar()
        );
        assert_eq!(infer_column_type(&json!("x".repeat(256))), ColumnType::Text);
    }

    #[test]
    fn test_length_counts_characters() {
        // 255 two-byte characters are still within the VARCHAR bound
        assert_eq!(
            infer_column_type(&json!("é".repeat(255))),
            ColumnType::varchar()
        );
    }

    #[test]
    fn test_arrays_and_objects() {
        assert_eq!(infer_column_type(&json!([])), ColumnType::Jsonb);
        assert_eq!(
            infer_column_type(&json!(["a", 1])),
            ColumnType::array_of(ColumnType::varchar())
        );
        assert_eq!(
            infer_column_type(&json!([[1, 2]])).to_string(),
            "INTEGER[][]"
        );
        assert_eq!(
            infer_column_type(&json!([{"a": 1}])).to_string(),
            "JSONB[]"
        );
        assert_eq!(infer_column_type(&json!({"a": 1})), ColumnType::Jsonb);
    }

    #[test]
    fn test_diagram_types() {
        assert_eq!(infer_diagram_type(&Value::Null), DiagramType::Text);
        assert_eq!(
            infer_diagram_type(&json!("2024-01-15T10:30:00Z")),
            DiagramType::Varchar
        );
        assert_eq!(infer_diagram_type(&json!(3)), DiagramType::Int);
        assert_eq!(infer_diagram_type(&json!(3.5)), DiagramType::Decimal);
        assert_eq!(infer_diagram_type(&json!(false)), DiagramType::Boolean);
        assert_eq!(infer_diagram_type(&json!([1])), DiagramType::Array);
        assert_eq!(infer_diagram_type(&json!({})), DiagramType::Jsonb);
    }

    #[test]
    fn test_inference_is_pure() {
        let value = json!("2024-01-15");
        assert_eq!(infer_column_type(&value), infer_column_type(&value));
    }
}
