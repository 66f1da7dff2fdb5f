//! Composable CRUD capabilities for concrete resource types.
//!
//! Each capability is an independent trait with a default implementation
//! parameterized by the [`ApiResource`] contract (collection path, payload
//! key, and access to the underlying [`Resource`] container). A concrete
//! type opts into exactly the operations its endpoint supports:
//!
//! ```rust,ignore
//! pub struct Customer { resource: Resource }
//!
//! impl ApiResource for Customer { /* NAME, PATH, accessors */ }
//! impl Find for Customer {}
//! impl List for Customer {
//!     type Page = Resource;
//!     type ListParams = serde_json::Value;
//! }
//! impl Create for Customer {}
//! ```
//!
//! Every method takes the transport explicitly (`api: &Api`); no capability
//! reaches into ambient state, and none of them catches transport errors —
//! whatever [`Api`] raises propagates untouched to the caller.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::{Api, RequestError};
use crate::rest::resource::{FromResource, Resource};
use crate::rest::url::{join_url, join_url_params, to_query_pairs};

/// The contract a concrete resource type provides to its capabilities.
///
/// Implementors are thin wrappers around a [`Resource`] container; the
/// capability traits supply the actual operations.
pub trait ApiResource {
    /// The singular type name (e.g. `"Customer"`).
    ///
    /// Its lowercase form is the payload key create requests are wrapped in.
    const NAME: &'static str;

    /// The collection path relative to the endpoint (e.g.
    /// `"api/1/customers"`).
    const PATH: &'static str;

    /// Borrows the underlying attribute container.
    fn resource(&self) -> &Resource;

    /// Mutably borrows the underlying attribute container.
    fn resource_mut(&mut self) -> &mut Resource;

    /// Returns the lowercase key used in JSON request bodies.
    #[must_use]
    fn resource_key() -> String {
        Self::NAME.to_lowercase()
    }
}

/// The result of a list operation.
///
/// The API answers collection requests with either a wrapping object
/// (typically carrying `count` and `response` attributes) or a bare JSON
/// array; the variant follows the shape of the response body.
#[derive(Clone, Debug, PartialEq)]
pub enum Listing<P> {
    /// The response was a single wrapping object.
    Page(P),
    /// The response was a bare array; elements are wrapped individually,
    /// preserving order.
    Items(Vec<P>),
}

impl<P: FromResource> Listing<P> {
    /// Wraps a deserialized response body by its shape.
    #[must_use]
    pub fn from_value(response: Value) -> Self {
        match response {
            Value::Array(elements) => Self::Items(
                elements
                    .into_iter()
                    .map(|element| P::from_resource(Resource::from_value(element)))
                    .collect(),
            ),
            other => Self::Page(P::from_resource(Resource::from_value(other))),
        }
    }
}

impl<P> Listing<P> {
    /// Returns the wrapping object, if the response was one.
    pub fn into_page(self) -> Option<P> {
        match self {
            Self::Page(page) => Some(page),
            Self::Items(_) => None,
        }
    }

    /// Returns the wrapped elements, if the response was a bare array.
    pub fn into_items(self) -> Option<Vec<P>> {
        match self {
            Self::Page(_) => None,
            Self::Items(items) => Some(items),
        }
    }
}

/// Locates a single resource by id.
#[allow(async_fn_in_trait)]
pub trait Find: ApiResource + FromResource + Sized {
    /// Fetches the resource with the given id.
    ///
    /// Issues `GET PATH/{id}` and wraps the body as `Self`.
    ///
    /// # Errors
    ///
    /// Propagates [`RequestError`] from the transport unchanged.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let customer = Customer::find(&api, "1").await?;
    /// ```
    async fn find(
        api: &Api,
        resource_id: impl std::fmt::Display + Send,
    ) -> Result<Self, RequestError> {
        let url = join_url(&[Self::PATH, &resource_id.to_string()]);
        let response = api.get(&url, None).await?;
        Ok(Self::from_resource(Resource::from_value(response)))
    }
}

/// Lists a resource collection.
#[allow(async_fn_in_trait)]
pub trait List: ApiResource {
    /// The wrapper type list responses are converted into.
    ///
    /// Use the generic [`Resource`] unless a dedicated page type exists.
    type Page: FromResource;

    /// The query parameter type accepted by [`all`](Self::all).
    type ListParams: Serialize + Sync;

    /// Fetches the collection, optionally filtered by query parameters.
    ///
    /// Issues `GET PATH` or `GET PATH?query` with a percent-encoded query
    /// string (pair ordering unspecified). The result variant follows the
    /// shape of the deserialized body: a bare array becomes
    /// [`Listing::Items`] with each element wrapped individually, anything
    /// else becomes a single [`Listing::Page`].
    ///
    /// # Errors
    ///
    /// Propagates [`RequestError`] from the transport unchanged.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let customers = Customer::all(&api, Some(&json!({"per_page": 2}))).await?;
    /// ```
    async fn all(
        api: &Api,
        params: Option<&Self::ListParams>,
    ) -> Result<Listing<Self::Page>, RequestError> {
        let url = match params {
            None => Self::PATH.to_string(),
            Some(params) => join_url_params(Self::PATH, &to_query_pairs(params)?),
        };
        let response = api.get(&url, None).await?;
        Ok(Listing::from_value(response))
    }
}

/// Creates a resource from its current attributes.
#[allow(async_fn_in_trait)]
pub trait Create: ApiResource {
    /// Creates the resource on the server.
    ///
    /// Issues `POST PATH` with the payload `{ <resource_key>: <plain data> }`
    /// and this resource's own headers, then clears the error slot and
    /// merges the response into `self` in place. The returned boolean is
    /// [`Resource::success`] afterwards: server-side validation failures
    /// arrive as a merged `error` attribute rather than an `Err`.
    ///
    /// # Errors
    ///
    /// Propagates [`RequestError`] from the transport unchanged.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut customer = Customer::new(json!({"name": "Ender Wiggin"}));
    /// let created = customer.create(&api).await?;
    /// ```
    async fn create(&mut self, api: &Api) -> Result<bool, RequestError> {
        let mut payload = Map::new();
        payload.insert(Self::resource_key(), self.resource().to_value());
        let payload = Value::Object(payload);

        let headers = self.resource().http_headers();
        let new_attributes = api.post(Self::PATH, &payload, Some(&headers)).await?;

        let resource = self.resource_mut();
        resource.clear_error();
        resource.merge(new_attributes);
        Ok(resource.success())
    }
}

/// Partially updates or modifies a resource.
#[allow(async_fn_in_trait)]
pub trait Update: ApiResource {
    /// Updates the resource on the server.
    ///
    /// Issues `PATCH PATH/{id}` with the given attributes, defaulting to
    /// this resource's full plain data when omitted, then clears the error
    /// slot, merges the response, and returns [`Resource::success`].
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingKey`] if the resource has no `id`
    /// (checked before any network call); otherwise propagates
    /// [`RequestError`] from the transport unchanged.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// customer.update(&api, Some(json!({"name": "Andrew Wiggin"}))).await?;
    /// ```
    async fn update(&mut self, api: &Api, attributes: Option<Value>) -> Result<bool, RequestError> {
        let resource_id = self.resource().require("id")?.to_string();
        let attributes = attributes.unwrap_or_else(|| self.resource().to_value());
        let url = join_url(&[Self::PATH, &resource_id]);

        let headers = self.resource().http_headers();
        let new_attributes = api.patch(&url, &attributes, Some(&headers)).await?;

        let resource = self.resource_mut();
        resource.clear_error();
        resource.merge(new_attributes);
        Ok(resource.success())
    }
}

/// Deletes a resource.
#[allow(async_fn_in_trait)]
pub trait Delete: ApiResource {
    /// Deletes the resource on the server.
    ///
    /// Issues `DELETE PATH/{id}`, clears the error slot, merges the
    /// response (an empty body merges nothing), and returns
    /// [`Resource::success`].
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingKey`] if the resource has no `id`;
    /// otherwise propagates [`RequestError`] from the transport unchanged.
    async fn delete(&mut self, api: &Api) -> Result<bool, RequestError> {
        let resource_id = self.resource().require("id")?.to_string();
        let url = join_url(&[Self::PATH, &resource_id]);

        let new_attributes = api.delete(&url, None).await?;

        let resource = self.resource_mut();
        resource.clear_error();
        resource.merge(new_attributes);
        Ok(resource.success())
    }
}

/// Issues POST requests to nested sub-resource actions.
///
/// This is the general mechanism concrete resource types use to implement
/// actions like bank-account creation under a customer.
#[allow(async_fn_in_trait)]
pub trait Post: ApiResource {
    /// Posts to `PATH/{self["id"]}/{action}`.
    ///
    /// Shorthand for [`post_as`](Self::post_as) with the `"id"` field.
    ///
    /// # Errors
    ///
    /// See [`post_as`](Self::post_as).
    async fn post<R: FromResource>(
        &self,
        api: &Api,
        action: &str,
        attributes: impl Into<Resource> + Send,
    ) -> Result<R, RequestError> {
        self.post_as(api, action, attributes, "id").await
    }

    /// Posts to `PATH/{self[id_field]}/{action}`.
    ///
    /// The attributes are carried as a [`Resource`] so their own
    /// `header`/`headers` slots contribute to the outgoing request; the
    /// response body is wrapped as `R` (use [`Resource`] for the generic
    /// wrapping).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingKey`] if `id_field` is absent from
    /// this resource; otherwise propagates [`RequestError`] from the
    /// transport unchanged.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let account: Resource = customer
    ///     .post(&api, "bank_accounts", json!({"iban": "NL33ABNA0618708937"}))
    ///     .await?;
    /// ```
    async fn post_as<R: FromResource>(
        &self,
        api: &Api,
        action: &str,
        attributes: impl Into<Resource> + Send,
        id_field: &str,
    ) -> Result<R, RequestError> {
        let resource_id = self.resource().require(id_field)?.to_string();
        let attributes: Resource = attributes.into();
        let url = join_url(&[Self::PATH, &resource_id, action]);

        let body = attributes.to_value();
        let headers = attributes.http_headers();
        let new_attributes = api.post(&url, &body, Some(&headers)).await?;

        Ok(R::from_resource(Resource::from_value(new_attributes)))
    }
}
