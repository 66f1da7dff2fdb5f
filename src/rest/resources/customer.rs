//! Customer resource wrapping the `api/1/customers` endpoint.

use std::ops::{Deref, DerefMut};

use serde_json::Value;

use crate::clients::{Api, RequestError};
use crate::rest::capabilities::{ApiResource, Create, Delete, Find, List, Listing, Post, Update};
use crate::rest::resource::{FromResource, Resource};
use crate::rest::url::join_url;

/// A Besepa customer (a debtor that mandates and debits hang off).
///
/// Supports the full capability set plus the nested bank-account and
/// debit actions.
///
/// # Example
///
/// ```rust,ignore
/// use besepa_api::rest::{Create, Find};
/// use besepa_api::Customer;
/// use serde_json::json;
///
/// let mut customer = Customer::new(json!({
///     "name": "Ender Wiggin",
///     "taxid": "68571053A",
///     "reference": "C1",
/// }));
/// if customer.create(&api).await? {
///     let account = customer
///         .create_bank_account(&api, json!({"iban": "NL33ABNA0618708937"}))
///         .await?;
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Customer {
    resource: Resource,
}

impl Customer {
    /// Creates a customer from initial attributes.
    #[must_use]
    pub fn new(attributes: impl Into<Resource>) -> Self {
        Self {
            resource: attributes.into(),
        }
    }

    /// Creates a bank account under this customer.
    ///
    /// Issues `POST api/1/customers/{id}/bank_accounts`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingKey`] if this customer has no `id`;
    /// otherwise propagates transport errors unchanged.
    pub async fn create_bank_account(
        &self,
        api: &Api,
        attributes: impl Into<Resource> + Send,
    ) -> Result<Resource, RequestError> {
        self.post(api, "bank_accounts", attributes).await
    }

    /// Lists the bank accounts attached to this customer.
    ///
    /// Issues `GET api/1/customers/{id}/bank_accounts`; the result variant
    /// follows the response shape like [`List::all`] does.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingKey`] if this customer has no `id`;
    /// otherwise propagates transport errors unchanged.
    pub async fn list_bank_accounts(&self, api: &Api) -> Result<Listing<Resource>, RequestError> {
        let customer_id = self.resource.require("id")?.to_string();
        let url = join_url(&[Self::PATH, &customer_id, "bank_accounts"]);
        let response = api.get(&url, None).await?;
        Ok(Listing::from_value(response))
    }

    /// Creates a debit order against this customer.
    ///
    /// Issues `POST api/1/customers/{id}/debits`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingKey`] if this customer has no `id`;
    /// otherwise propagates transport errors unchanged.
    pub async fn create_debit(
        &self,
        api: &Api,
        attributes: impl Into<Resource> + Send,
    ) -> Result<Resource, RequestError> {
        self.post(api, "debits", attributes).await
    }
}

impl FromResource for Customer {
    fn from_resource(resource: Resource) -> Self {
        Self { resource }
    }
}

impl ApiResource for Customer {
    const NAME: &'static str = "Customer";
    const PATH: &'static str = "api/1/customers";

    fn resource(&self) -> &Resource {
        &self.resource
    }

    fn resource_mut(&mut self) -> &mut Resource {
        &mut self.resource
    }
}

impl Find for Customer {}

impl List for Customer {
    type Page = Resource;
    type ListParams = Value;
}

impl Create for Customer {}
impl Update for Customer {}
impl Delete for Customer {}
impl Post for Customer {}

impl Deref for Customer {
    type Target = Resource;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}

impl DerefMut for Customer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.resource
    }
}
