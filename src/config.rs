use crate::models::FuzzyMatcherConfig;

// Calibrated against the reference roster scenarios: a 5-char query may differ
// from some run of whole words of a candidate by at most one edit, a 10-char
// query by two.
pub const DEFAULT_FUZZY_MATCHER_CONFIG: &FuzzyMatcherConfig = &FuzzyMatcherConfig {
    min_similarity_threshold: 0.75,
    min_partial_alignment_length: 3,
    acronym_match_score: 0.90,
    reject_ambiguous_matches: true,
};
