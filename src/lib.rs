//! # pokeapi-sdk - A typed client SDK for the PokeAPI
//!
//! A small, type-safe client for the public read-only [PokeAPI] built on top
//! of `reqwest`. It validates identifiers before any network call, performs
//! a single GET per operation, normalizes every failure into one error type,
//! and deserializes responses into strongly-typed records.
//!
//! [PokeAPI]: https://pokeapi.co
//!
//! ## Quick Start
//!
//! ```no_run
//! use pokeapi_sdk::{Page, PokeApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pokeapi_sdk::Error> {
//!     let api = PokeApi::new()?;
//!
//!     // Fetch a single pokemon, by id or by name
//!     let bulbasaur = api.get_pokemon(1).await?;
//!     println!("#{} {}", bulbasaur.id, bulbasaur.name);
//!
//!     let pikachu = api.get_pokemon("pikachu").await?;
//!     for ability in &pikachu.abilities {
//!         if let Some(ability) = &ability.ability {
//!             println!("ability: {}", ability.name);
//!         }
//!     }
//!
//!     // Page through the collection
//!     let page = api.list_pokemon(Page::new(5, 0)).await?;
//!     println!("{} pokemon total", page.count);
//!
//!     // Generations expose the same surface
//!     let gen1 = api.get_generation("generation-i").await?;
//!     println!("main region: {}", gen1.main_region.name);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Typed records** - every resource deserializes into a declared struct
//!   with explicit optional-field semantics; unknown fields are ignored,
//!   missing required fields are a schema error
//! - **Local validation** - bad identifiers and pagination values fail
//!   before any network access
//! - **One error type** - validation, transport, and deserialization
//!   failures are all variants of [`Error`] with human-readable messages
//! - **Structured logging** - requests and failures are traced with
//!   `tracing`; install any subscriber to observe them
//! - **Shareable clients** - clients are stateless and cheaply cloneable;
//!   concurrent callers need no synchronization
//!
//! ## Error Handling
//!
//! Invalid JSON and schema mismatches are distinct failures, and both are
//! distinct from HTTP errors:
//!
//! ```no_run
//! use pokeapi_sdk::{Error, PokeApi};
//!
//! # async fn example() -> Result<(), Error> {
//! # let api = PokeApi::new()?;
//! match api.get_pokemon("missingno").await {
//!     Ok(pokemon) => println!("found {}", pokemon.name),
//!     Err(Error::NotFound) => eprintln!("resource does not exist"),
//!     Err(Error::Server { status }) => eprintln!("server-side failure: {status}"),
//!     Err(Error::Schema { resource, source }) => {
//!         eprintln!("{resource} response had an unexpected shape: {source}");
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod error;
pub mod models;
pub mod transport;

pub use api::PokeApi;
pub use client::{Page, Resource, ResourceClient, Selector};
pub use error::{Error, Result};
