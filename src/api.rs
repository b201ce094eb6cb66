//! The top-level SDK entry point.

use crate::{
    client::{Page, ResourceClient, Selector},
    models::{Generation, NamedAPIResourceList, Pokemon},
    transport::{GetConnection, BASE_URL},
    Result,
};

/// Aggregates the per-family endpoint clients behind a single entry point.
///
/// `PokeApi` adds no logic of its own: every method delegates directly to
/// the corresponding family client, which is also reachable through the
/// public `pokemon` / `generation` fields. Construct it once per session;
/// it holds no mutable state, and clones share the connection pool.
///
/// # Examples
///
/// ```no_run
/// use pokeapi_sdk::{Page, PokeApi};
///
/// # async fn example() -> Result<(), pokeapi_sdk::Error> {
/// let api = PokeApi::new()?;
///
/// let pikachu = api.get_pokemon("pikachu").await?;
/// let first_page = api.list_pokemon(Page::default()).await?;
///
/// let gen1 = api.get_generation(1).await?;
/// let generations = api.list_generations(Page::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PokeApi {
    /// Client for the pokemon family.
    pub pokemon: ResourceClient<Pokemon>,
    /// Client for the generation family.
    pub generation: ResourceClient<Generation>,
}

impl PokeApi {
    /// Creates an SDK instance targeting the public PokeAPI service.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::Error::Configuration) if the
    /// HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        Self::with_base_url(BASE_URL)
    }

    /// Creates an SDK instance targeting another API root (a test server or
    /// a self-hosted deployment). Both family clients share one transport.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let connection = GetConnection::new(base_url)?;
        Ok(Self {
            pokemon: ResourceClient::from_connection(connection.clone()),
            generation: ResourceClient::from_connection(connection),
        })
    }

    /// Fetches a single pokemon by id or name.
    pub async fn get_pokemon(&self, selector: impl Into<Selector>) -> Result<Pokemon> {
        self.pokemon.get(selector).await
    }

    /// Fetches one page of the pokemon collection.
    pub async fn list_pokemon(&self, page: Page) -> Result<NamedAPIResourceList> {
        self.pokemon.list(page).await
    }

    /// Fetches a single generation by id or name.
    pub async fn get_generation(&self, selector: impl Into<Selector>) -> Result<Generation> {
        self.generation.get(selector).await
    }

    /// Fetches one page of the generation collection.
    pub async fn list_generations(&self, page: Page) -> Result<NamedAPIResourceList> {
        self.generation.list(page).await
    }
}
