//! Catalog records and the ordered, id-unique collection that holds them.

use crate::error::{DexError, DexResult};
use crate::id::Id;
use serde::Serialize;
use std::collections::HashMap;

/// A species available in a generation snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Species {
    pub name: String,
    pub id: Id,
    /// National dex number
    pub num: u16,
}

/// A move available in a generation snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Move {
    pub name: String,
    pub id: Id,
    /// Elemental type ("Electric", "Normal", ...)
    #[serde(rename = "type")]
    pub move_type: String,
    /// "Physical", "Special" or "Status"
    pub category: String,
}

/// Anything the name resolver can match against.
pub trait CatalogEntry {
    /// Noun used in diagnostics ("species", "move").
    const KIND: &'static str;

    fn name(&self) -> &str;
    fn id(&self) -> &Id;
}

impl CatalogEntry for Species {
    const KIND: &'static str = "species";

    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn id(&self) -> &Id {
        &self.id
    }
}

impl CatalogEntry for Move {
    const KIND: &'static str = "move";

    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn id(&self) -> &Id {
        &self.id
    }
}

/// Ordered set of entries, unique by canonical id. Immutable once built.
#[derive(Clone, Debug)]
pub struct Catalog<T> {
    entries: Vec<T>,
    positions: HashMap<Id, usize>,
}

impl<T: CatalogEntry> Catalog<T> {
    /// Build a catalog, keeping the given order. A repeated id is an error.
    pub fn from_entries(entries: Vec<T>) -> DexResult<Self> {
        let mut positions = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            if positions.insert(entry.id().clone(), pos).is_some() {
                return Err(DexError::DuplicateId {
                    kind: T::KIND,
                    id: entry.id().to_string(),
                });
            }
        }
        Ok(Catalog { entries, positions })
    }

    /// Exact lookup by canonical id.
    #[inline]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.position(id).map(|pos| &self.entries[pos])
    }

    /// Catalog position of an id.
    #[inline]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
