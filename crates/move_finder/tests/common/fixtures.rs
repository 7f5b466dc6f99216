//! Fixture data structures for search tests.
//!
//! These types are deserialized from `tests/fixtures/search_cases.json`.

use move_finder::{SearchLogic, SearchResult};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Root structure for the search fixture file.
#[derive(Deserialize)]
pub struct SearchFixture {
    #[allow(dead_code)]
    pub meta: Option<serde_json::Value>,
    pub cases: Vec<SearchCase>,
}

/// One end-to-end search: pasted text in, filtered roster out.
#[derive(Deserialize, Debug, Clone)]
pub struct SearchCase {
    pub id: String,
    pub gen: u32,
    /// Pasted roster text (comma/newline separated).
    pub roster: String,
    /// Pasted move text.
    pub moves: String,
    #[serde(default)]
    pub logic: SearchLogic,
    pub expected: Vec<ExpectedResult>,
    #[serde(default)]
    pub unresolved_species: Vec<String>,
    #[serde(default)]
    pub unresolved_moves: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExpectedResult {
    pub member: String,
    pub learnable_moves: Vec<String>,
}

impl From<&SearchResult> for ExpectedResult {
    fn from(result: &SearchResult) -> Self {
        ExpectedResult {
            member: result.member.clone(),
            learnable_moves: result.learnable_moves.clone(),
        }
    }
}

impl SearchFixture {
    pub fn path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/search_cases.json")
    }

    pub fn load() -> Result<Self, String> {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("failed to open {}: {e}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| format!("failed to parse {}: {e}", path.display()))
    }
}
