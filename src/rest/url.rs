//! URL and query-string helpers for resource paths.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::clients::RequestError;

/// Joins individual URL segments together into a single relative path.
///
/// Surrounding slashes are trimmed from every segment, so segments read
/// from configuration or attribute values compose cleanly.
///
/// # Example
///
/// ```rust
/// use besepa_api::rest::join_url;
///
/// assert_eq!(join_url(&["api/1/customers", "1"]), "api/1/customers/1");
/// assert_eq!(join_url(&["api/1/customers/", "/1/", "bank_accounts"]),
///            "api/1/customers/1/bank_accounts");
/// ```
#[must_use]
pub fn join_url(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|segment| segment.trim_matches('/'))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Appends a percent-encoded query string built from the given pairs.
///
/// Pair ordering follows map iteration order and may vary across runs.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use besepa_api::rest::join_url_params;
///
/// let mut params = HashMap::new();
/// params.insert("per_page".to_string(), "2".to_string());
/// assert_eq!(join_url_params("api/1/customers", &params),
///            "api/1/customers?per_page=2");
/// ```
#[must_use]
pub fn join_url_params(url: &str, params: &HashMap<String, String>) -> String {
    let query = params
        .iter()
        .map(|(name, value)| {
            format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
        })
        .collect::<Vec<_>>()
        .join("&");
    format!("{url}?{query}")
}

/// Serializes a params value to a query parameter map.
///
/// `None`-valued fields are skipped, arrays become comma-separated values,
/// and nested objects are carried as their JSON string form.
///
/// # Errors
///
/// Returns [`RequestError::Json`] if the value cannot be serialized.
pub fn to_query_pairs<T: Serialize>(params: &T) -> Result<HashMap<String, String>, RequestError> {
    let value = serde_json::to_value(params)?;

    let mut query = HashMap::new();
    if let Value::Object(map) = value {
        for (name, value) in map {
            match value {
                Value::Null => {}
                Value::String(text) => {
                    query.insert(name, text);
                }
                Value::Number(number) => {
                    query.insert(name, number.to_string());
                }
                Value::Bool(flag) => {
                    query.insert(name, flag.to_string());
                }
                Value::Array(elements) => {
                    let values: Vec<String> = elements
                        .iter()
                        .filter_map(|element| match element {
                            Value::String(text) => Some(text.clone()),
                            Value::Number(number) => Some(number.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(name, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(name, value.to_string());
                }
            }
        }
    }

    Ok(query)
}
