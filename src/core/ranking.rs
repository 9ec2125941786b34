use crate::models::RankedAnimal;

/// Order ranked animals by score, highest first
///
/// `sort_by` is stable: animals with equal scores keep the order they were
/// supplied in. No secondary key is applied.
pub fn rank_by_score(ranked: &mut [RankedAnimal]) {
    ranked.sort_by(|a, b| b.result.score.cmp(&a.result.score));
}
