//! The dynamic attribute container backing every API entity.
//!
//! [`Resource`] holds an arbitrary, schema-less JSON object as a mapping
//! from attribute name to converted value. Nested objects are recursively
//! converted into resources on the way in and back to plain JSON on the
//! way out, so callers never see a raw JSON map through the container.
//!
//! Three attribute names are special and live outside the data mapping:
//!
//! - `error` — failure detail from the last server interaction;
//!   [`Resource::success`] holds exactly when it is unset
//! - `header` / `headers` — string maps merged by
//!   [`Resource::http_headers`] into per-request HTTP headers
//!
//! They are routed by [`Resource::set`] (and therefore by
//! [`Resource::merge`]) and never appear in [`Resource::to_value`].

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::ops::Index;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::clients::RequestError;
use crate::rest::value::AttrValue;

/// Conversion from the generic container into a concrete wrapper type.
///
/// This trait is the seam that selects which wrapper a response becomes:
/// [`List::Page`](crate::rest::List::Page), the result parameter of
/// [`Post::post`](crate::rest::Post::post), and [`Resource::get_as`] are
/// all parameterized over it. The generic [`Resource`] implements it as the
/// identity, which is the default wrapping everywhere.
pub trait FromResource {
    /// Wraps a generic resource as `Self`.
    fn from_resource(resource: Resource) -> Self;
}

impl FromResource for Resource {
    fn from_resource(resource: Resource) -> Self {
        resource
    }
}

/// A dynamic attribute container for one API entity or nested JSON object.
///
/// # Invariants
///
/// Every nested object value reachable through a resource is itself a
/// `Resource`, and every array value is a sequence of converted elements.
/// [`success`](Self::success) holds exactly when the `error` slot is unset.
///
/// # Access styles
///
/// - [`get`](Self::get) returns `None` for absent attributes, never panics
/// - `resource["name"]` panics for absent attributes (like `HashMap`
///   indexing); use it when absence is a bug
/// - [`require`](Self::require) is the fallible form used by operations
///   that need an attribute (e.g. `id`) before issuing a request
///
/// # Example
///
/// ```rust
/// use besepa_api::rest::{AttrValue, Resource};
/// use serde_json::json;
///
/// let mut resource = Resource::from_value(json!({
///     "name": "testing",
///     "transaction": {"description": "testing"},
/// }));
///
/// assert_eq!(resource.get("name").and_then(AttrValue::as_str), Some("testing"));
/// assert!(resource["transaction"].as_resource().is_some());
/// assert!(resource.get("unknown").is_none());
///
/// resource.set("name", "changed");
/// assert_eq!(resource["name"].as_str(), Some("changed"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resource {
    /// The converted attribute mapping.
    data: BTreeMap<String, AttrValue>,
    /// Failure detail from the last server interaction.
    error: Option<Value>,
    /// Base per-request headers.
    header: HashMap<String, String>,
    /// Per-request headers that win over `header` on collision.
    headers: HashMap<String, String>,
}

impl Resource {
    /// Creates an empty resource.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resource from a JSON value.
    ///
    /// Object values populate the attribute mapping through
    /// [`merge`](Self::merge); any other value yields an empty resource.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        let mut resource = Self::new();
        resource.merge(value);
        resource
    }

    /// Creates a resource from a JSON object map.
    #[must_use]
    pub fn from_map(map: Map<String, Value>) -> Self {
        let mut resource = Self::new();
        resource.merge_map(map);
        resource
    }

    /// Returns the converted value stored under `name`, or `None`.
    ///
    /// Never panics; absent attributes are reported through the `None`
    /// sentinel.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.data.get(name)
    }

    /// Returns the nested resource under `name` wrapped as `T`.
    ///
    /// `None` when the attribute is absent or not a nested resource.
    #[must_use]
    pub fn get_as<T: FromResource>(&self, name: &str) -> Option<T> {
        match self.data.get(name) {
            Some(AttrValue::Resource(resource)) => Some(T::from_resource(resource.clone())),
            _ => None,
        }
    }

    /// Returns the value under `name`, or the given error when absent.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingKey`] if the attribute is absent.
    pub fn require(&self, name: &str) -> Result<&AttrValue, RequestError> {
        self.data.get(name).ok_or_else(|| RequestError::MissingKey {
            key: name.to_string(),
        })
    }

    /// Reports whether an attribute is present, without converting or
    /// panicking.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    /// Stores `value` under `name`, converting it first.
    ///
    /// The names `error`, `header` and `headers` route to their dedicated
    /// slots instead of the data mapping: a `null` error clears the slot,
    /// and the header names absorb JSON objects as string maps.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match name.as_str() {
            "error" => {
                self.error = match value {
                    Value::Null => None,
                    other => Some(other),
                };
            }
            "header" => self.header = header_map(&value),
            "headers" => self.headers = header_map(&value),
            _ => {
                self.data.insert(name, AttrValue::from_value(value));
            }
        }
    }

    /// Merges new attributes, e.g. a response from a post.
    ///
    /// Applies [`set`](Self::set) for every key of an incoming JSON object,
    /// so attributes not present in the response are kept. Non-object
    /// values merge nothing.
    pub fn merge(&mut self, attributes: Value) {
        if let Value::Object(map) = attributes {
            self.merge_map(map);
        }
    }

    /// Merges new attributes from a JSON object map.
    pub fn merge_map(&mut self, map: Map<String, Value>) {
        for (name, value) in map {
            self.set(name, value);
        }
    }

    /// Inverts conversion back to a plain JSON object.
    ///
    /// Nested resources become plain maps, lists map element-wise, scalars
    /// pass through. The `error` and header slots are not part of the data
    /// and never appear here.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        for (name, value) in &self.data {
            map.insert(name.clone(), value.to_value());
        }
        Value::Object(map)
    }

    /// Reports whether the last server interaction succeeded.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the failure detail from the last server interaction.
    #[must_use]
    pub const fn error(&self) -> Option<&Value> {
        self.error.as_ref()
    }

    /// Records failure detail.
    pub fn set_error(&mut self, error: impl Into<Value>) {
        self.error = Some(error.into());
    }

    /// Clears the failure detail; done before merging a fresh response.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Adds one per-request header to the `headers` slot.
    pub fn insert_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    /// Generates the HTTP headers for requests tied to this resource.
    ///
    /// Merges the `header` and `headers` slots into one map; `headers`
    /// wins on key collision.
    #[must_use]
    pub fn http_headers(&self) -> HashMap<String, String> {
        let mut merged = self.header.clone();
        for (name, value) in &self.headers {
            merged.insert(name.clone(), value.clone());
        }
        merged
    }

    /// Iterates over the attribute names and converted values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.data.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the number of stored attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` when no attributes are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Converts a JSON object into a string header map.
///
/// Non-object values yield an empty map; non-string scalars are rendered
/// through their JSON form.
fn header_map(value: &Value) -> HashMap<String, String> {
    let Value::Object(map) = value else {
        return HashMap::new();
    };
    map.iter()
        .map(|(name, value)| {
            let value = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            (name.clone(), value)
        })
        .collect()
}

impl Index<&str> for Resource {
    type Output = AttrValue;

    /// Returns the value stored under `name`.
    ///
    /// # Panics
    ///
    /// Panics if the attribute is absent; use [`Resource::get`] for the
    /// non-panicking form.
    fn index(&self, name: &str) -> &Self::Output {
        self.data
            .get(name)
            .unwrap_or_else(|| panic!("no attribute '{name}' in resource"))
    }
}

impl fmt::Display for Resource {
    /// Renders the plain-data JSON form of the mapping.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl From<Value> for Resource {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl From<Map<String, Value>> for Resource {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

impl From<Resource> for Value {
    fn from(resource: Resource) -> Self {
        resource.to_value()
    }
}
