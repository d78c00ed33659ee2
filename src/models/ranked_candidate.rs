use crate::types::{CandidateIndex, SimilarityScore};

/// A candidate's scores against a single query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedCandidate {
    /// Position in the caller's original candidate list.
    pub candidate_index: CandidateIndex,
    /// Primary score, compared against the acceptance threshold.
    pub similarity_score: SimilarityScore,
    /// Whole-string edit ratio, only used to order equal similarity scores.
    pub tie_break_score: SimilarityScore,
}
