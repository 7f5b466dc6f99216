//! Roster search: which members can learn which of the requested moves.
//!
//! The search is stateless. Each call builds a fresh [`EligibilityMap`] by
//! asking a [`LearnDecider`] about every member/move pair, then reduces it
//! with AND or OR logic. Output order is roster order, and each member's
//! moves are listed in request order.

pub mod eligibility;
pub mod filter;

pub use eligibility::{EligibilityMap, MemberEligibility};
pub use filter::apply_logic;

use crate::error::LearnsetResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, instrument};

// ============================================================================
// Types
// ============================================================================

/// How per-move eligibility combines into membership of the result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchLogic {
    /// Member must learn every requested move.
    And,
    /// Member must learn at least one requested move.
    #[default]
    Or,
}

impl SearchLogic {
    /// Whether a member that learned `learned` of `requested` moves is kept.
    #[inline]
    pub fn accepts(self, learned: usize, requested: usize) -> bool {
        match self {
            SearchLogic::And => requested > 0 && learned == requested,
            SearchLogic::Or => learned > 0,
        }
    }
}

impl fmt::Display for SearchLogic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchLogic::And => f.write_str("and"),
            SearchLogic::Or => f.write_str("or"),
        }
    }
}

impl FromStr for SearchLogic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "and" | "all" => Ok(SearchLogic::And),
            "or" | "any" => Ok(SearchLogic::Or),
            other => Err(format!("unknown search logic '{other}' (expected 'and' or 'or')")),
        }
    }
}

/// One roster member that satisfied the search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Species display name.
    pub member: String,
    /// Requested moves this member can learn, in request order.
    pub learnable_moves: Vec<String>,
}

// ============================================================================
// Decision Seam
// ============================================================================

/// Answers one "can `member` learn `move_name`" question.
///
/// Implementations may suspend (lazy or remote learnset data). An `Err` is
/// never fatal to a search; the engine logs it and treats the pair as not
/// learnable.
#[async_trait]
pub trait LearnDecider: Send + Sync {
    async fn decide(&self, member: &str, move_name: &str) -> LearnsetResult<bool>;
}

#[async_trait]
impl<D: LearnDecider + ?Sized> LearnDecider for Arc<D> {
    async fn decide(&self, member: &str, move_name: &str) -> LearnsetResult<bool> {
        (**self).decide(member, move_name).await
    }
}

/// Adapts an async closure `(member, move) -> LearnsetResult<bool>` into a
/// [`LearnDecider`].
pub struct DecideFn<F>(pub F);

#[async_trait]
impl<F, Fut> LearnDecider for DecideFn<F>
where
    F: Fn(String, String) -> Fut + Send + Sync,
    Fut: Future<Output = LearnsetResult<bool>> + Send,
{
    async fn decide(&self, member: &str, move_name: &str) -> LearnsetResult<bool> {
        (self.0)(member.to_string(), move_name.to_string()).await
    }
}

impl<F> fmt::Debug for DecideFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DecideFn(..)")
    }
}

// ============================================================================
// Search
// ============================================================================

/// Filter `roster` down to the members that can learn `moves` under `logic`.
///
/// An empty roster or an empty move list yields no results without
/// consulting the decider. Decisions are made one pair at a time.
#[instrument(level = "debug", skip_all, fields(members = roster.len(), moves = moves.len(), logic = %logic))]
pub async fn filter_by_moves<D: LearnDecider + ?Sized>(
    roster: &[String],
    moves: &[String],
    logic: SearchLogic,
    decider: &D,
) -> Vec<SearchResult> {
    if roster.is_empty() || moves.is_empty() {
        return Vec::new();
    }
    let map = EligibilityMap::build(roster, moves, decider).await;
    let results = apply_logic(map, logic);
    debug!(matched = results.len(), "search finished");
    results
}

/// Like [`filter_by_moves`], but members are evaluated concurrently.
/// Produces exactly the same output.
#[instrument(level = "debug", skip_all, fields(members = roster.len(), moves = moves.len(), logic = %logic))]
pub async fn filter_by_moves_concurrent<D: LearnDecider + ?Sized>(
    roster: &[String],
    moves: &[String],
    logic: SearchLogic,
    decider: &D,
) -> Vec<SearchResult> {
    if roster.is_empty() || moves.is_empty() {
        return Vec::new();
    }
    let map = EligibilityMap::build_concurrent(roster, moves, decider).await;
    let results = apply_logic(map, logic);
    debug!(matched = results.len(), "concurrent search finished");
    results
}
