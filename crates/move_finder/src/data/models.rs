//! JSON deserialization structures for Showdown data files.
//!
//! Only the fields the finder needs are declared; everything else in the
//! upstream files is ignored.

use serde::Deserialize;
use std::collections::BTreeMap;

/// One entry of `pokedex.json`.
#[derive(Deserialize, Debug, Clone)]
pub struct PokedexEntry {
    pub num: i32,
    pub name: String,
    #[serde(rename = "baseSpecies")]
    pub base_species: Option<String>,
    pub forme: Option<String>,
    #[serde(rename = "isNonstandard")]
    pub is_nonstandard: Option<String>,
    /// Explicit introduction generation, when the data provides one.
    pub gen: Option<u8>,
    pub prevo: Option<String>,
    #[serde(rename = "changesFrom")]
    pub changes_from: Option<String>,
    #[serde(rename = "battleOnly")]
    pub battle_only: Option<BattleOnly>,
}

impl PokedexEntry {
    /// Species whose learnset stands in when this one has none of its own.
    pub fn learnset_fallback(&self) -> Option<&str> {
        match &self.battle_only {
            Some(BattleOnly::One(name)) if self.base_species.as_deref() != Some(name.as_str()) => {
                Some(name.as_str())
            }
            _ => self
                .changes_from
                .as_deref()
                .or(self.base_species.as_deref()),
        }
    }
}

/// `battleOnly` is a single species for most in-battle formes and a list
/// for a few (e.g. Necrozma-Ultra).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum BattleOnly {
    One(String),
    Many(Vec<String>),
}

/// One entry of `moves.json`.
#[derive(Deserialize, Debug, Clone)]
pub struct MoveEntry {
    pub num: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: String,
    pub category: String,
    #[serde(rename = "isNonstandard")]
    pub is_nonstandard: Option<String>,
    pub gen: Option<u8>,
}

/// One entry of `learnsets.json`.
///
/// Tag lists are kept as raw JSON so a malformed list degrades to a
/// negative decision instead of failing the whole file.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct LearnsetEntry {
    #[serde(default)]
    pub learnset: Option<BTreeMap<String, serde_json::Value>>,
}

/// `isNonstandard` value for entries that existed in earlier generations only.
pub const NONSTANDARD_PAST: &str = "Past";
