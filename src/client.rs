//! Endpoint clients for the PokeAPI resource families.
//!
//! The two resource families (pokemon, generations) expose an identical
//! surface: get-by-id-or-name and list-with-pagination. [`ResourceClient`] is
//! the single generic implementation, instantiated per family through the
//! [`Resource`] trait.

use crate::{
    models::NamedAPIResourceList,
    transport::{Connection, GetConnection, Params, BASE_URL},
    Error, Result,
};
use http::Method;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Binds an entity type to its endpoint.
///
/// Implemented by [`Pokemon`](crate::models::Pokemon) and
/// [`Generation`](crate::models::Generation).
pub trait Resource: DeserializeOwned {
    /// Endpoint path under the API root, e.g. `/pokemon`.
    const PATH: &'static str;

    /// Resource kind as it appears in validation messages, e.g. "Pokemon".
    const KIND: &'static str;
}

/// Selects a single entity either by its server-assigned id or by its name.
///
/// Constructible from `i64`, `&str`, and `String`, so callers can pass a
/// bare id or name directly:
///
/// ```
/// use pokeapi_sdk::Selector;
///
/// assert_eq!(Selector::from(25), Selector::Id(25));
/// assert_eq!(Selector::from("pikachu"), Selector::Name("pikachu".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// A server-assigned positive id.
    Id(i64),
    /// A resource name, used verbatim (no case-folding, no trimming).
    Name(String),
}

impl From<i64> for Selector {
    fn from(id: i64) -> Self {
        Selector::Id(id)
    }
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        Selector::Name(name.to_string())
    }
}

impl From<String> for Selector {
    fn from(name: String) -> Self {
        Selector::Name(name)
    }
}

/// Pagination window for list operations.
///
/// The default matches the server's: 20 entries from the start of the
/// collection.
///
/// ```
/// use pokeapi_sdk::Page;
///
/// assert_eq!(Page::default(), Page { limit: 20, offset: 0 });
/// assert_eq!(Page::new(2, 4), Page { limit: 2, offset: 4 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Maximum number of entries to return. Zero is valid and yields an
    /// empty page. No upper bound is enforced locally.
    pub limit: i64,
    /// Starting position within the collection.
    pub offset: i64,
}

impl Page {
    /// Creates a page with the given limit and offset.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
        }
    }
}

/// A client for one PokeAPI resource family.
///
/// Stateless beyond its transport; clones share the underlying connection
/// pool, so instances may be shared or duplicated across tasks freely.
///
/// # Examples
///
/// ```no_run
/// use pokeapi_sdk::{models::Pokemon, Page, ResourceClient};
///
/// # async fn example() -> Result<(), pokeapi_sdk::Error> {
/// let client: ResourceClient<Pokemon> = ResourceClient::new()?;
///
/// let bulbasaur = client.get(1).await?;
/// assert_eq!(bulbasaur.name, "bulbasaur");
///
/// let page = client.list(Page::new(5, 0)).await?;
/// assert_eq!(page.results.len(), 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResourceClient<R> {
    connection: GetConnection,
    _resource: PhantomData<R>,
}

impl<R: Resource> ResourceClient<R> {
    /// Creates a client targeting the public PokeAPI service.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the HTTP client cannot be
    /// constructed.
    pub fn new() -> Result<Self> {
        Self::with_base_url(BASE_URL)
    }

    /// Creates a client targeting another API root (a test server or a
    /// self-hosted deployment).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self::from_connection(GetConnection::new(base_url)?))
    }

    pub(crate) fn from_connection(connection: GetConnection) -> Self {
        Self {
            connection,
            _resource: PhantomData,
        }
    }

    /// Fetches a single entity by id or name.
    ///
    /// Validation happens before any network access: an id must be positive
    /// and a name must be non-empty. A valid id is stringified for the path
    /// segment; a name is used verbatim.
    ///
    /// # Errors
    ///
    /// [`Error::NonPositiveId`] for `id <= 0`, [`Error::MissingIdentifier`]
    /// for an empty name, otherwise any transport or deserialization error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pokeapi_sdk::{models::Pokemon, ResourceClient};
    ///
    /// # async fn example() -> Result<(), pokeapi_sdk::Error> {
    /// let client: ResourceClient<Pokemon> = ResourceClient::new()?;
    ///
    /// let by_id = client.get(25).await?;
    /// let by_name = client.get("pikachu").await?;
    /// assert_eq!(by_id.id, by_name.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(&self, selector: impl Into<Selector>) -> Result<R> {
        let selector = selector.into();

        let segment = match &selector {
            Selector::Id(id) => {
                if *id <= 0 {
                    return Err(Error::NonPositiveId {
                        resource: R::KIND,
                        id: *id,
                    });
                }
                id.to_string()
            }
            Selector::Name(name) => {
                if name.is_empty() {
                    return Err(Error::MissingIdentifier { resource: R::KIND });
                }
                name.clone()
            }
        };

        tracing::debug!(resource = R::KIND, segment = %segment, "Fetching entity");

        self.fetch(Params::Segment(&segment)).await
    }

    /// Fetches one page of the family's collection.
    ///
    /// Zero is permitted for both fields; `limit = 0` returns an empty
    /// `results` sequence per server semantics. The server is the authority
    /// on maximum page size.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLimit`] / [`Error::InvalidOffset`] for negative
    /// values, otherwise any transport or deserialization error.
    pub async fn list(&self, page: Page) -> Result<NamedAPIResourceList> {
        if page.limit < 0 {
            return Err(Error::InvalidLimit);
        }
        if page.offset < 0 {
            return Err(Error::InvalidOffset);
        }

        tracing::debug!(
            resource = R::KIND,
            limit = page.limit,
            offset = page.offset,
            "Fetching page"
        );

        self.fetch(Params::Page {
            limit: page.limit,
            offset: page.offset,
        })
        .await
    }

    /// Issues the request and maps the body in two stages: text to JSON
    /// (invalid-JSON error on failure), then JSON to the typed record
    /// (schema error on failure).
    async fn fetch<T: DeserializeOwned>(&self, params: Params<'_>) -> Result<T> {
        let response = self.connection.request(Method::GET, R::PATH, &params).await?;

        let body = response.text().await?;

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| {
                tracing::error!(resource = R::KIND, error = %e, "Response body is not JSON");
                Error::InvalidJson(e)
            })?;

        serde_json::from_value(value).map_err(|e| {
            tracing::error!(
                resource = R::KIND,
                error = %e,
                raw_response = %body,
                "Response does not match the expected schema"
            );
            Error::Schema {
                resource: R::KIND,
                source: e,
            }
        })
    }
}
