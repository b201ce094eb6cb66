//! Common resource shapes shared across API responses.

use serde::{Deserialize, Serialize};

/// A reference to another API resource by name and URL.
///
/// The API uses these pervasively instead of embedding full objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedAPIResource {
    pub name: String,
    pub url: String,
}

/// One page of a paginated collection.
///
/// `results` preserves the server's declared order. `next` and `previous`
/// are the server's own navigation URLs and are absent at the collection
/// boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedAPIResourceList {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedAPIResource>,
}
