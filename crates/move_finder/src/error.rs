//! Error types.
//!
//! Only misuse and unreadable catalogs are errors. Missing or malformed
//! learnset data is an ordinary `false`, and unresolved user input is
//! reported as data by the resolver.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a catalog or constructing core values.
#[derive(Debug, Error)]
pub enum DexError {
    /// Source tags carry a single generation digit, so only 1-9 exist.
    #[error("unsupported generation {0}: learnset tags encode generations 1-9 only")]
    UnsupportedGeneration(u32),

    /// Two entries of one generation snapshot share a canonical id.
    #[error("duplicate {kind} id '{id}' in generation catalog")]
    DuplicateId { kind: &'static str, id: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors surfaced by a learnability decision.
///
/// The search engine catches every one of these at the decision boundary
/// and counts the pair as not learnable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LearnsetError {
    /// The decision was asked about a species the catalog cannot resolve.
    #[error("unknown species '{0}'")]
    UnknownSpecies(String),

    /// The decision was asked about a move the catalog cannot resolve.
    #[error("unknown move '{0}'")]
    UnknownMove(String),

    /// The backing learnset source failed to produce a record.
    #[error("learnset source unavailable: {0}")]
    SourceUnavailable(String),
}

/// Result alias for catalog operations.
pub type DexResult<T> = Result<T, DexError>;

/// Result alias for learnability decisions.
pub type LearnsetResult<T> = Result<T, LearnsetError>;
