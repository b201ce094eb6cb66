//! Error types for PokeAPI calls.
//!
//! Every failure an SDK operation can produce is a variant of [`Error`], each
//! carrying a human-readable message. Validation failures are raised locally
//! before any network activity; transport and deserialization failures carry
//! the underlying detail for debugging.

use http::StatusCode;

/// The error type for every PokeAPI SDK operation.
///
/// Variants fall into three groups: local validation guards (no network call
/// was made), transport/HTTP failures, and response deserialization failures.
///
/// # Examples
///
/// ```no_run
/// use pokeapi_sdk::{Error, PokeApi};
///
/// # async fn example() -> Result<(), Error> {
/// let api = PokeApi::new()?;
///
/// match api.get_pokemon(9999999).await {
///     Ok(pokemon) => println!("found {}", pokemon.name),
///     Err(Error::NotFound) => eprintln!("no such pokemon"),
///     Err(e) => eprintln!("request failed: {e}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The transport was asked to perform a method other than GET.
    ///
    /// This is a local guard; no network call is made.
    #[error("Only GET method is supported")]
    UnsupportedMethod,

    /// An empty endpoint path was passed to the URL builder.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// Neither a usable id nor a non-empty name was supplied.
    #[error("{resource} ID or name cannot be empty")]
    MissingIdentifier {
        /// The resource kind being requested ("Pokemon", "Generation").
        resource: &'static str,
    },

    /// An id of zero or below was supplied.
    ///
    /// The message includes the offending value.
    #[error("{resource} ID must be a positive number: {id}")]
    NonPositiveId {
        /// The resource kind being requested.
        resource: &'static str,
        /// The rejected id value.
        id: i64,
    },

    /// A negative `limit` was passed to a list operation.
    #[error("Limit must be a positive number")]
    InvalidLimit,

    /// A negative `offset` was passed to a list operation.
    #[error("Offset must be a positive number")]
    InvalidOffset,

    /// The server answered 404 for the requested resource.
    #[error("The requested resource was not found")]
    NotFound,

    /// The server answered with a 5xx status.
    #[error("A server error occurred")]
    Server {
        /// The HTTP status code.
        status: StatusCode,
    },

    /// The server answered with a non-2xx status outside 404/5xx.
    #[error("Network error occurred: unexpected status {status}")]
    UnexpectedStatus {
        /// The HTTP status code.
        status: StatusCode,
        /// The raw response body.
        body: String,
    },

    /// The request exceeded the fixed 30-second timeout.
    #[error("Request timed out")]
    Timeout,

    /// The connection could not be established (DNS failure, refused,
    /// reset before a response was received).
    #[error("Failed to connect to server")]
    Connect(#[source] reqwest::Error),

    /// Any other transport-level failure.
    #[error("Network error occurred: {0}")]
    Network(#[from] reqwest::Error),

    /// A composed request URL failed to parse.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The response body on a 2xx status was not valid JSON.
    #[error("Invalid JSON response from server")]
    InvalidJson(#[source] serde_json::Error),

    /// The response body was well-formed JSON but did not match the
    /// expected record shape (missing required fields, wrong types).
    ///
    /// Distinct from [`Error::InvalidJson`]: the HTTP call and the JSON
    /// parse both succeeded, only the typed mapping failed.
    #[error("Response does not match the expected {resource} schema: {source}")]
    Schema {
        /// The resource kind that was being deserialized.
        resource: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Returns `true` if this error is a local validation guard, meaning no
    /// network call was made.
    ///
    /// # Examples
    ///
    /// ```
    /// use pokeapi_sdk::Error;
    ///
    /// let err = Error::NonPositiveId { resource: "Pokemon", id: -1 };
    /// assert!(err.is_validation());
    ///
    /// assert!(!Error::NotFound.is_validation());
    /// ```
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedMethod
                | Error::EmptyPath
                | Error::MissingIdentifier { .. }
                | Error::NonPositiveId { .. }
                | Error::InvalidLimit
                | Error::InvalidOffset
        )
    }

    /// Returns the HTTP status code if this error carries one.
    ///
    /// `NotFound` reports 404; `Server` and `UnexpectedStatus` report the
    /// status the server answered with. Other variants have none.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::NotFound => Some(StatusCode::NOT_FOUND),
            Error::Server { status } => Some(*status),
            Error::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A specialized `Result` type for PokeAPI SDK operations.
pub type Result<T> = std::result::Result<T, Error>;
