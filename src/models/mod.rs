//! Typed records for PokeAPI resources.
//!
//! All records are populated by deserializing server JSON; calling code
//! never constructs them. Unknown fields in responses are ignored, missing
//! required fields fail deserialization with a schema error.

mod generation;
mod pokemon;
mod resource;

pub use generation::{Generation, LocalizedName};
pub use pokemon::{
    Pokemon, PokemonAbility, PokemonAbilityPast, PokemonCries, PokemonHeldItem,
    PokemonHeldItemVersion, PokemonMove, PokemonMoveVersion, PokemonSprites, PokemonStat,
    PokemonType, PokemonTypePast, VersionGameIndex,
};
pub use resource::{NamedAPIResource, NamedAPIResourceList};
