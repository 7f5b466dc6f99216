//! AND/OR reduction of an eligibility map into search results.

use super::eligibility::EligibilityMap;
use super::{SearchLogic, SearchResult};

/// Keep the members that satisfy `logic`, preserving roster order.
pub fn apply_logic(map: EligibilityMap, logic: SearchLogic) -> Vec<SearchResult> {
    let requested = map.requested();
    map.into_members()
        .into_iter()
        .filter(|member| logic.accepts(member.learned_count(), requested))
        .map(|member| SearchResult {
            member: member.member,
            learnable_moves: member.learnable,
        })
        .collect()
}
