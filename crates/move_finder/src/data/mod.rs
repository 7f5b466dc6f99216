//! Catalog data: JSON models, ordered catalogs and generation snapshots.

pub mod catalog;
pub mod dex;
pub mod models;

pub use catalog::{Catalog, CatalogEntry, Move, Species};
pub use dex::{Dex, GenerationDex};
