//! Catalog entities as served by the Tyradex API.
//!
//! Upstream leaves many fields `null` (regional forms, the placeholder entry
//! at number 0), so scalars and collections decode `null` or a missing key as
//! their default and the nested relations are `Option`s.

use pokedex_core::types::DbId;
use serde::{Deserialize, Deserializer, Serialize};

/// A single Pokémon entry. Immutable once fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub pokedex_id: DbId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub generation: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: Name,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sprites: Sprites,
    #[serde(default, deserialize_with = "null_as_default")]
    pub types: Vec<PokemonType>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub talents: Vec<Talent>,
    #[serde(default)]
    pub stats: Option<Stats>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resistances: Vec<Resistance>,
    #[serde(default)]
    pub evolution: Option<Evolution>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub height: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weight: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub egg_groups: Vec<String>,
    #[serde(default)]
    pub sexe: Option<SexRatio>,
    #[serde(default)]
    pub catch_rate: Option<i32>,
    #[serde(default)]
    pub level_100: Option<i64>,
}

/// Localized display names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Name {
    #[serde(default, deserialize_with = "null_as_default")]
    pub fr: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub en: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub jp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default, deserialize_with = "null_as_default")]
    pub regular: String,
    #[serde(default)]
    pub shiny: Option<String>,
}

/// Category tag (fire, water, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PokemonType {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Talent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Hidden talent.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tc: bool,
}

/// Base stat block. Upstream abbreviates attack/defense/speed in French.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub hp: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub atk: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub def: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub spe_atk: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub spe_def: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vit: i32,
}

impl Stats {
    /// Base stat total.
    pub fn total(&self) -> i32 {
        self.hp + self.atk + self.def + self.spe_atk + self.spe_def + self.vit
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resistance {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub multiplier: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evolution {
    #[serde(default, deserialize_with = "null_as_default")]
    pub pre: Vec<EvolutionStep>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub next: Vec<EvolutionStep>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mega: Vec<MegaEvolution>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvolutionStep {
    #[serde(default, deserialize_with = "null_as_default")]
    pub pokedex_id: DbId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub condition: String,
}

/// Mega evolutions carry an orb rather than a Pokédex number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MegaEvolution {
    #[serde(default, deserialize_with = "null_as_default")]
    pub orbe: String,
    #[serde(default)]
    pub sprites: Option<Sprites>,
}

/// Percentages of male/female individuals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SexRatio {
    #[serde(default, deserialize_with = "null_as_default")]
    pub male: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub female: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
