//! Records for the pokemon resource family.

use super::resource::NamedAPIResource;
use crate::client::Resource;
use serde::{Deserialize, Serialize};

/// An ability slot, with the hidden flag the games use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonAbility {
    pub is_hidden: bool,
    pub slot: i64,
    pub ability: Option<NamedAPIResource>,
}

/// One of a pokemon's types and its slot position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: i64,
    pub r#type: NamedAPIResource,
}

/// Type assignments the pokemon had in a previous generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonTypePast {
    pub generation: NamedAPIResource,
    pub types: Vec<PokemonType>,
}

/// Ability assignments the pokemon had in a previous generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonAbilityPast {
    pub generation: NamedAPIResource,
    pub abilities: Option<Vec<PokemonAbility>>,
}

/// Rarity of a held item in one game version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonHeldItemVersion {
    pub version: NamedAPIResource,
    pub rarity: i64,
}

/// An item the pokemon can hold, with per-version rarity entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonHeldItem {
    pub item: NamedAPIResource,
    pub version_details: Vec<PokemonHeldItemVersion>,
}

/// How a move is learned in one version group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonMoveVersion {
    pub move_learn_method: NamedAPIResource,
    pub version_group: NamedAPIResource,
    pub level_learned_at: i64,
    pub order: Option<i64>,
}

/// A move the pokemon can learn, with per-version-group learn entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonMove {
    pub r#move: NamedAPIResource,
    pub version_group_details: Vec<PokemonMoveVersion>,
}

/// A base stat value and its effort yield.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub stat: NamedAPIResource,
    pub effort: i64,
    pub base_stat: i64,
}

/// Sprite image URLs. Every slot is optional; not all pokemon have every
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub front_female: Option<String>,
    pub front_shiny_female: Option<String>,
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
    pub back_female: Option<String>,
    pub back_shiny_female: Option<String>,
}

/// Audio URLs for the pokemon's cry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonCries {
    pub latest: String,
    pub legacy: String,
}

/// The pokemon's index number within one game version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionGameIndex {
    pub game_index: i64,
    pub version: NamedAPIResource,
}

/// A pokemon with its attributes, stats, moves, and version data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: i64,
    pub name: String,
    pub base_experience: i64,
    pub height: i64,
    pub is_default: bool,
    pub order: i64,
    pub weight: i64,
    pub abilities: Vec<PokemonAbility>,
    pub forms: Vec<NamedAPIResource>,
    pub game_indices: Vec<VersionGameIndex>,
    pub held_items: Vec<PokemonHeldItem>,
    pub location_area_encounters: String,
    pub moves: Vec<PokemonMove>,
    pub past_types: Vec<PokemonTypePast>,
    pub past_abilities: Vec<PokemonAbilityPast>,
    pub sprites: PokemonSprites,
    pub cries: PokemonCries,
    pub species: NamedAPIResource,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<PokemonType>,
}

impl Resource for Pokemon {
    const PATH: &'static str = "/pokemon";
    const KIND: &'static str = "Pokemon";
}
