use move_finder::{Generation, SearchLogic, SearchResult};
use serde::Serialize;

/// Outcome of a batch resolution, as printed by `resolve` and `search`.
#[derive(Serialize, Debug, Clone)]
pub struct ResolveReport<T> {
    pub resolved: Vec<T>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<String>,
}

/// Whether a search actually ran. "Nothing to search" and "searched, no
/// matches" are reported differently.
#[derive(Serialize, Debug, Clone)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchState {
    NotSearched { reason: String },
    Completed { results: Vec<SearchRow> },
}

#[derive(Serialize, Debug, Clone)]
pub struct SearchRow {
    pub member: String,
    pub learnable_moves: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MoveMethods>,
}

impl From<SearchResult> for SearchRow {
    fn from(result: SearchResult) -> Self {
        SearchRow {
            member: result.member,
            learnable_moves: result.learnable_moves,
            methods: Vec::new(),
        }
    }
}

/// How one move is obtained ("TM", "level-up", ...).
#[derive(Serialize, Debug, Clone)]
pub struct MoveMethods {
    #[serde(rename = "move")]
    pub move_name: String,
    pub methods: Vec<&'static str>,
}

#[derive(Serialize, Debug, Clone)]
pub struct SearchReport {
    pub generation: Generation,
    pub logic: SearchLogic,
    pub roster: Vec<String>,
    pub moves: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unresolved_pokemon: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unresolved_moves: Vec<String>,
    #[serde(flatten)]
    pub state: SearchState,
}
