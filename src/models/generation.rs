//! Records for the generation resource family.

use super::resource::NamedAPIResource;
use crate::client::Resource;
use serde::{Deserialize, Serialize};

/// A localized name and the language it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    pub language: NamedAPIResource,
}

/// A game generation: its main region and the resources it introduced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub id: i64,
    pub name: String,
    pub abilities: Vec<NamedAPIResource>,
    pub names: Vec<LocalizedName>,
    pub main_region: NamedAPIResource,
    pub moves: Vec<NamedAPIResource>,
    pub pokemon_species: Vec<NamedAPIResource>,
    pub types: Vec<NamedAPIResource>,
    pub version_groups: Vec<NamedAPIResource>,
}

impl Resource for Generation {
    const PATH: &'static str = "/generation";
    const KIND: &'static str = "Generation";
}
