//! Debit resource wrapping the `api/1/debits` endpoint.

use std::ops::{Deref, DerefMut};

use serde_json::Value;

use crate::rest::capabilities::{ApiResource, Create, Find, List};
use crate::rest::resource::{FromResource, Resource};

/// A SEPA debit order.
///
/// Debits are read and created against the top-level collection; updates
/// and deletes go through the owning customer, so those capabilities are
/// deliberately not implemented here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Debit {
    resource: Resource,
}

impl Debit {
    /// Creates a debit from initial attributes.
    #[must_use]
    pub fn new(attributes: impl Into<Resource>) -> Self {
        Self {
            resource: attributes.into(),
        }
    }
}

impl FromResource for Debit {
    fn from_resource(resource: Resource) -> Self {
        Self { resource }
    }
}

impl ApiResource for Debit {
    const NAME: &'static str = "Debit";
    const PATH: &'static str = "api/1/debits";

    fn resource(&self) -> &Resource {
        &self.resource
    }

    fn resource_mut(&mut self) -> &mut Resource {
        &mut self.resource
    }
}

impl Find for Debit {}

impl List for Debit {
    type Page = Resource;
    type ListParams = Value;
}

impl Create for Debit {}

impl Deref for Debit {
    type Target = Resource;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}

impl DerefMut for Debit {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.resource
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_and_payload_key() {
        assert_eq!(Debit::PATH, "api/1/debits");
        assert_eq!(Debit::resource_key(), "debit");
    }

    #[test]
    fn test_new_converts_attributes() {
        let debit = Debit::new(json!({"amount": 1000, "mandate": {"id": "9"}}));
        assert_eq!(debit["amount"].as_i64(), Some(1000));
        assert!(debit["mandate"].as_resource().is_some());
    }
}
