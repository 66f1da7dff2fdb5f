//! Attribute values stored inside a [`Resource`].
//!
//! [`AttrValue`] is the converted form of a JSON value: nested objects have
//! already become [`Resource`] instances and arrays have been converted
//! element-wise. A raw JSON map is never reachable through a stored value.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Number, Value};

use crate::rest::resource::Resource;

/// One converted attribute value.
///
/// Mirrors the JSON data model, except that objects are always
/// [`Resource`] instances and list elements are themselves converted.
///
/// # Example
///
/// ```rust
/// use besepa_api::rest::AttrValue;
/// use serde_json::json;
///
/// let value = AttrValue::from_value(json!({"description": "testing"}));
/// let resource = value.as_resource().unwrap();
/// assert_eq!(
///     resource.get("description").and_then(AttrValue::as_str),
///     Some("testing")
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// JSON `null`.
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer or float.
    Number(Number),
    /// A string.
    String(String),
    /// An ordered sequence of converted values.
    List(Vec<AttrValue>),
    /// A nested resource (converted JSON object).
    Resource(Resource),
}

impl AttrValue {
    /// Converts a JSON value, recursively turning objects into resources.
    ///
    /// This is the single conversion routine all attribute storage goes
    /// through: objects become [`Resource`] instances, arrays are converted
    /// element-wise preserving order and length, scalars pass through
    /// unchanged.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(value) => Self::Bool(value),
            Value::Number(value) => Self::Number(value),
            Value::String(value) => Self::String(value),
            Value::Array(elements) => {
                Self::List(elements.into_iter().map(Self::from_value).collect())
            }
            Value::Object(map) => Self::Resource(Resource::from_map(map)),
        }
    }

    /// Inverts the conversion back to a plain JSON value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(value) => Value::Bool(*value),
            Self::Number(value) => Value::Number(value.clone()),
            Self::String(value) => Value::String(value.clone()),
            Self::List(elements) => {
                Value::Array(elements.iter().map(AttrValue::to_value).collect())
            }
            Self::Resource(resource) => resource.to_value(),
        }
    }

    /// Returns `true` for the null value.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean value, if this is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value as an `i64`, if it is an integer number.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(value) => value.as_i64(),
            _ => None,
        }
    }

    /// Returns the value as a `u64`, if it is a non-negative integer number.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(value) => value.as_u64(),
            _ => None,
        }
    }

    /// Returns the value as an `f64`, if it is a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => value.as_f64(),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the converted elements, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[AttrValue]> {
        match self {
            Self::List(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the nested resource, if this is one.
    #[must_use]
    pub const fn as_resource(&self) -> Option<&Resource> {
        match self {
            Self::Resource(resource) => Some(resource),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    /// Strings render without quotes; everything else renders as JSON.
    ///
    /// This makes `to_string()` suitable for URL path segments regardless
    /// of whether the server sent an id as a string or a number.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => f.write_str(value),
            other => write!(f, "{}", other.to_value()),
        }
    }
}

impl From<Value> for AttrValue {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars_pass_through_unchanged() {
        assert_eq!(AttrValue::from_value(json!(null)), AttrValue::Null);
        assert_eq!(AttrValue::from_value(json!(true)), AttrValue::Bool(true));
        assert_eq!(
            AttrValue::from_value(json!("testing")).as_str(),
            Some("testing")
        );
        assert_eq!(AttrValue::from_value(json!(10)).as_i64(), Some(10));
        assert_eq!(AttrValue::from_value(json!(10.5)).as_f64(), Some(10.5));
    }

    #[test]
    fn test_objects_become_resources() {
        let value = AttrValue::from_value(json!({"description": "testing"}));
        let resource = value.as_resource().unwrap();
        assert_eq!(
            resource.get("description").and_then(AttrValue::as_str),
            Some("testing")
        );
    }

    #[test]
    fn test_lists_convert_element_wise_preserving_order() {
        let value = AttrValue::from_value(json!([{"n": 1}, {"n": 2}, "scalar"]));
        let elements = value.as_list().unwrap();
        assert_eq!(elements.len(), 3);
        assert_eq!(
            elements[0].as_resource().unwrap().get("n").unwrap().as_i64(),
            Some(1)
        );
        assert_eq!(
            elements[1].as_resource().unwrap().get("n").unwrap().as_i64(),
            Some(2)
        );
        assert_eq!(elements[2].as_str(), Some("scalar"));
    }

    #[test]
    fn test_nested_lists_convert_recursively() {
        let value = AttrValue::from_value(json!([[{"deep": true}]]));
        let outer = value.as_list().unwrap();
        let inner = outer[0].as_list().unwrap();
        assert!(inner[0].as_resource().is_some());
    }

    #[test]
    fn test_to_value_round_trip() {
        let original = json!({
            "name": "testing",
            "amount": 10.0,
            "transaction": {"description": "testing"},
            "items": [{"name": "testing"}, 1, "two", null]
        });
        let value = AttrValue::from_value(original.clone());
        assert_eq!(value.to_value(), original);
    }

    #[test]
    fn test_display_strings_render_unquoted() {
        assert_eq!(AttrValue::String("1".to_string()).to_string(), "1");
        assert_eq!(AttrValue::from_value(json!(1)).to_string(), "1");
        assert_eq!(AttrValue::Null.to_string(), "null");
    }
}
