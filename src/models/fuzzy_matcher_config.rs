#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatcherConfig {
    /// Best candidate is only accepted at or above this similarity.
    pub min_similarity_threshold: f32,
    /// Shorter strings are compared globally instead of by substring alignment.
    pub min_partial_alignment_length: usize,
    /// Similarity assigned when the query spells out a candidate's word initials.
    pub acronym_match_score: f32,
    /// Rejects a match when differently named candidates share the top score,
    /// e.g. a query of just "Inc" or "Company".
    pub reject_ambiguous_matches: bool,
}
