use crate::models::RankedCandidate;

/// Sorts scored candidates so that the best match comes first.
///
/// ### Sorting Order:
/// - **Primary:** similarity score, descending.
/// - **Secondary:** tie-break score, descending.
/// - **Tertiary:** candidate index, ascending, so that the first occurrence in
///   the original list wins any remaining tie.
///
/// ### Example:
/// ```rust
/// use customer_name_matcher::{sort_ranked_candidates, RankedCandidate};
///
/// let mut ranked = vec![
///     RankedCandidate { candidate_index: 0, similarity_score: 0.5, tie_break_score: 0.5 },
///     RankedCandidate { candidate_index: 1, similarity_score: 1.0, tie_break_score: 0.4 },
///     RankedCandidate { candidate_index: 2, similarity_score: 1.0, tie_break_score: 1.0 },
///     RankedCandidate { candidate_index: 3, similarity_score: 1.0, tie_break_score: 1.0 },
/// ];
///
/// sort_ranked_candidates(&mut ranked);
///
/// let order: Vec<usize> = ranked.iter().map(|r| r.candidate_index).collect();
/// assert_eq!(order, vec![2, 3, 1, 0]);
/// ```
pub fn sort_ranked_candidates(ranked_candidates: &mut [RankedCandidate]) {
    ranked_candidates.sort_by(|a, b| {
        b.similarity_score
            .partial_cmp(&a.similarity_score)
            .unwrap_or(std::cmp::Ordering::Equal) // Handle NaN gracefully
            .then_with(|| {
                b.tie_break_score
                    .partial_cmp(&a.tie_break_score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .then_with(|| a.candidate_index.cmp(&b.candidate_index))
    });
}
