//! move_finder - Which of my Pokémon can learn these moves?
//!
//! Resolves free-text species and move names against a generation-scoped
//! Showdown catalog, decodes learnset source tags, and filters a roster by
//! a set of moves with AND/OR logic.

/// Canonical id normalization
pub mod id;

/// Error types
pub mod error;

/// Generation numbers and labels
pub mod generation;

/// Catalog loading and generation snapshots
pub mod data;

/// Free-text name resolution
pub mod resolver;

/// Learnset source tags and the acquisition decoder
pub mod learnset;

/// Roster search
pub mod search;

/// Sprite server naming
pub mod sprites;

// Re-export commonly used types
pub use data::{Catalog, CatalogEntry, Dex, GenerationDex, Move, Species};
pub use error::{DexError, DexResult, LearnsetError, LearnsetResult};
pub use generation::Generation;
pub use id::{to_id, Id};
pub use learnset::{AcquisitionDecoder, AcquisitionRecord, LearnsetSource, Learnsets, SourceKinds};
pub use resolver::{resolve, resolve_batch, suggest, BatchResolution, SUGGESTION_LIMIT};
pub use search::{
    filter_by_moves, filter_by_moves_concurrent, DecideFn, LearnDecider, SearchLogic,
    SearchResult,
};
