//! Shared helpers for the move_finder integration tests.
//!
//! Two kinds of catalog are available: the sample catalog under the
//! workspace `data/` directory, and small in-memory catalogs assembled with
//! [`CatalogBuilder`].

#![allow(dead_code)]

pub mod fixtures;

use move_finder::{CatalogEntry, Dex, Generation, GenerationDex};
use serde_json::{json, Map, Value};
use std::path::PathBuf;

/// Workspace `data/` directory.
pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

/// The sample catalog shipped with the workspace.
pub fn sample_dex() -> Dex {
    Dex::load(&data_dir()).expect("sample catalog should load")
}

pub fn snapshot(dex: &Dex, gen: u32) -> GenerationDex {
    dex.generation(Generation::new(gen).expect("valid generation"))
        .expect("snapshot should build")
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn names<T: CatalogEntry>(entries: &[&T]) -> Vec<String> {
    entries.iter().map(|e| e.name().to_string()).collect()
}

/// Builds a tiny Showdown-shaped catalog in memory.
#[derive(Default)]
pub struct CatalogBuilder {
    pokedex: Map<String, Value>,
    moves: Map<String, Value>,
    learnsets: Map<String, Value>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn species(mut self, name: &str, num: i32) -> Self {
        self.pokedex.insert(
            move_finder::to_id(name),
            json!({ "num": num, "name": name }),
        );
        self
    }

    /// Add an alternate forme of `base`.
    pub fn forme(mut self, name: &str, num: i32, base: &str, forme: &str) -> Self {
        self.pokedex.insert(
            move_finder::to_id(name),
            json!({ "num": num, "name": name, "baseSpecies": base, "forme": forme }),
        );
        self
    }

    /// Mark `prevo` as the pre-evolution of an already added species.
    pub fn prevo(mut self, species: &str, prevo: &str) -> Self {
        if let Some(entry) = self
            .pokedex
            .get_mut(&move_finder::to_id(species))
            .and_then(Value::as_object_mut)
        {
            entry.insert("prevo".to_string(), json!(prevo));
        }
        self
    }

    pub fn move_(mut self, name: &str, num: i32, move_type: &str) -> Self {
        self.moves.insert(
            move_finder::to_id(name),
            json!({ "num": num, "name": name, "type": move_type, "category": "Special" }),
        );
        self
    }

    /// Add source tags for one species/move pair.
    pub fn learns(mut self, species: &str, move_name: &str, tags: &[&str]) -> Self {
        let entry = self
            .learnsets
            .entry(move_finder::to_id(species))
            .or_insert_with(|| json!({ "learnset": {} }));
        if let Some(table) = entry.get_mut("learnset").and_then(Value::as_object_mut) {
            table.insert(move_finder::to_id(move_name), json!(tags));
        }
        self
    }

    pub fn build(self) -> Dex {
        Dex::from_json(
            &Value::Object(self.pokedex).to_string(),
            &Value::Object(self.moves).to_string(),
            &Value::Object(self.learnsets).to_string(),
        )
        .expect("in-memory catalog should parse")
    }
}
