//! Roster x move cross product.
//!
//! Every requested pair goes through the decider exactly once. A decider
//! error is logged and counted as "not learnable"; it never aborts the
//! search.

use super::LearnDecider;
use futures::future::join_all;
use tracing::{trace, warn};

/// Moves one roster member was found to learn, in request order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberEligibility {
    pub member: String,
    pub learnable: Vec<String>,
}

impl MemberEligibility {
    #[inline]
    pub fn learned_count(&self) -> usize {
        self.learnable.len()
    }
}

/// Per-member eligibility for one search, in roster order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EligibilityMap {
    requested: usize,
    members: Vec<MemberEligibility>,
}

impl EligibilityMap {
    /// Evaluate every pair, one decision at a time.
    pub async fn build<D: LearnDecider + ?Sized>(
        roster: &[String],
        moves: &[String],
        decider: &D,
    ) -> Self {
        let mut members = Vec::with_capacity(roster.len());
        for member in roster {
            members.push(evaluate_member(decider, member, moves).await);
        }
        EligibilityMap {
            requested: moves.len(),
            members,
        }
    }

    /// Evaluate members concurrently. Moves of one member are still decided
    /// in order, and members come back in roster order.
    pub async fn build_concurrent<D: LearnDecider + ?Sized>(
        roster: &[String],
        moves: &[String],
        decider: &D,
    ) -> Self {
        let members = join_all(
            roster
                .iter()
                .map(|member| evaluate_member(decider, member, moves)),
        )
        .await;
        EligibilityMap {
            requested: moves.len(),
            members,
        }
    }

    /// Number of moves asked about.
    #[inline]
    pub fn requested(&self) -> usize {
        self.requested
    }

    pub fn into_members(self) -> Vec<MemberEligibility> {
        self.members
    }
}

async fn evaluate_member<D: LearnDecider + ?Sized>(
    decider: &D,
    member: &str,
    moves: &[String],
) -> MemberEligibility {
    let mut learnable = Vec::new();
    for move_name in moves {
        match decider.decide(member, move_name).await {
            Ok(true) => learnable.push(move_name.clone()),
            Ok(false) => {}
            Err(err) => {
                warn!(member, move_name = %move_name, %err, "learnability check failed, counting as not learnable");
            }
        }
    }
    trace!(member, learned = learnable.len(), "member evaluated");
    MemberEligibility {
        member: member.to_string(),
        learnable,
    }
}
