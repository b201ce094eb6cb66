//! HTTP transport for the PokeAPI.
//!
//! The [`Connection`] trait defines the seam between endpoint clients and the
//! wire: building a request URL and performing a request. [`GetConnection`]
//! is the concrete GET-only implementation; a future write-capable transport
//! would be a sibling implementor, not a subclass.

use crate::{Error, Result};
use http::Method;
use std::time::Duration;
use url::Url;

/// Root URL of the public PokeAPI service.
pub const BASE_URL: &str = "https://pokeapi.co/api/v2";

/// User-agent header sent with every request.
const USER_AGENT: &str = "PokeSDK/1.0";

/// Fixed per-request timeout.
const TIMEOUT: Duration = Duration::from_secs(30);

/// How a request addresses a resource: either a single entity by path
/// segment, or a page of a collection by query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Params<'a> {
    /// Appended to the endpoint path as `{path}/{segment}`. The segment is a
    /// stringified id or a resource name, used verbatim.
    Segment(&'a str),

    /// Encoded as `{path}?limit={limit}&offset={offset}`.
    Page {
        /// Maximum number of entries in the page.
        limit: i64,
        /// Starting position within the collection.
        offset: i64,
    },
}

/// The transport seam: URL construction plus request execution.
#[allow(async_fn_in_trait)]
pub trait Connection {
    /// Builds the full request URL for `path` and `params`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyPath`] if `path` is empty, or
    /// [`Error::InvalidUrl`] if the composed text does not parse.
    fn build_url(&self, path: &str, params: &Params<'_>) -> Result<Url>;

    /// Performs a single request and returns the raw response on success.
    async fn request(
        &self,
        method: Method,
        path: &str,
        params: &Params<'_>,
    ) -> Result<reqwest::Response>;
}

/// GET-only HTTP transport.
///
/// Holds a connection-pooled `reqwest` client configured with the fixed
/// header set (`Accept: application/json`, the SDK user-agent) and the fixed
/// 30-second timeout. Cloning is cheap; clones share the pool.
#[derive(Debug, Clone)]
pub struct GetConnection {
    http: reqwest::Client,
    base_url: String,
}

impl GetConnection {
    /// Creates a transport targeting `base_url`.
    ///
    /// Production callers use [`BASE_URL`]; tests and self-hosted API
    /// deployments substitute their own host.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = http::HeaderMap::new();
        headers.insert(http::header::ACCEPT, http::HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| Error::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Classifies HTTP statuses and hands successful responses back
    /// unparsed.
    async fn handle_response(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();

        tracing::info!(status = status.as_u16(), "Received HTTP response");

        if status == http::StatusCode::NOT_FOUND {
            tracing::warn!(status = status.as_u16(), "Resource not found");
            return Err(Error::NotFound);
        }

        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), "Server error");
            return Err(Error::Server { status });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                response = %body,
                "Unexpected HTTP status"
            );
            return Err(Error::UnexpectedStatus { status, body });
        }

        Ok(response)
    }
}

impl Connection for GetConnection {
    fn build_url(&self, path: &str, params: &Params<'_>) -> Result<Url> {
        if path.is_empty() {
            return Err(Error::EmptyPath);
        }

        match params {
            Params::Segment(segment) => {
                let url = Url::parse(&format!("{}{}/{}", self.base_url, path, segment))?;
                Ok(url)
            }
            Params::Page { limit, offset } => {
                let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;
                url.query_pairs_mut()
                    .append_pair("limit", &limit.to_string())
                    .append_pair("offset", &offset.to_string());
                Ok(url)
            }
        }
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        params: &Params<'_>,
    ) -> Result<reqwest::Response> {
        if method != Method::GET {
            return Err(Error::UnsupportedMethod);
        }

        let url = self.build_url(path, params)?;

        tracing::debug!(method = %method, url = %url, "Executing HTTP request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(classify_transport_error)?;

        self.handle_response(response).await
    }
}

/// Maps a `reqwest` failure onto the SDK error taxonomy. Timeouts are
/// checked before connection failures; a timed-out connect counts as a
/// timeout.
fn classify_transport_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout
    } else if e.is_connect() {
        Error::Connect(e)
    } else {
        Error::Network(e)
    }
}
