//! Free-text name resolution against a catalog.
//!
//! Matching is exact after normalization: a query resolves when its
//! canonical form equals an entry's id, or when it equals an entry's display
//! name ignoring case. There is no typo tolerance; anything else is
//! reported back as unresolved.

use crate::data::catalog::{Catalog, CatalogEntry};
use crate::id::to_id;

/// Maximum number of autocomplete suggestions.
pub const SUGGESTION_LIMIT: usize = 10;

/// Resolve one query to the first matching catalog entry.
pub fn resolve<'a, T: CatalogEntry>(query: &str, catalog: &'a Catalog<T>) -> Option<&'a T> {
    let key = to_id(query);
    let by_id = if key.is_empty() {
        None
    } else {
        catalog.position(&key)
    };

    // The name fallback only matters if it hits an entry before the id match.
    let search_end = by_id.unwrap_or(catalog.len());
    let lowered = query.to_lowercase();
    catalog.as_slice()[..search_end]
        .iter()
        .find(|entry| entry.name().to_lowercase() == lowered)
        .or_else(|| by_id.map(|pos| &catalog.as_slice()[pos]))
}

/// Outcome of resolving a pasted list of names.
#[derive(Debug)]
pub struct BatchResolution<'a, T> {
    /// Newly resolved entries, deduplicated, in first-seen order.
    pub resolved: Vec<&'a T>,
    /// Tokens that matched nothing, as typed (trimmed).
    pub unresolved: Vec<String>,
}

impl<'a, T: CatalogEntry> BatchResolution<'a, T> {
    /// Display names of the resolved entries.
    pub fn resolved_names(&self) -> Vec<String> {
        self.resolved.iter().map(|entry| entry.name().to_string()).collect()
    }
}

/// Split pasted text on commas and newlines into trimmed, non-empty tokens.
pub fn split_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Resolve a comma/newline separated list.
///
/// Entries whose name is already in `selected` are dropped silently, as are
/// repeats within the input.
pub fn resolve_batch<'a, T: CatalogEntry>(
    text: &str,
    catalog: &'a Catalog<T>,
    selected: &[String],
) -> BatchResolution<'a, T> {
    let mut resolved: Vec<&'a T> = Vec::new();
    let mut unresolved = Vec::new();

    for token in split_tokens(text) {
        match resolve(token, catalog) {
            Some(entry) => {
                let already_selected = selected.iter().any(|name| name == entry.name());
                let repeated = resolved.iter().any(|seen| seen.id() == entry.id());
                if !already_selected && !repeated {
                    resolved.push(entry);
                }
            }
            None => unresolved.push(token.to_string()),
        }
    }

    BatchResolution {
        resolved,
        unresolved,
    }
}

/// Autocomplete: entries whose name contains `query` (case-insensitive),
/// skipping names in `exclude`, in catalog order.
pub fn suggest<'a, T: CatalogEntry>(
    query: &str,
    catalog: &'a Catalog<T>,
    exclude: &[String],
    limit: usize,
) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|entry| entry.name().to_lowercase().contains(&needle))
        .filter(|entry| !exclude.iter().any(|name| name == entry.name()))
        .take(limit)
        .collect()
}
