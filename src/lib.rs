#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_FUZZY_MATCHER_CONFIG;
mod constants;
pub use constants::{NOT_FOUND_INDEX, STOP_WORDS};
pub mod models;
pub use models::{
    Error, FuzzyMatcher, FuzzyMatcherConfig, NameNormalizer, RankedCandidate, SimilarityScorer,
};
pub mod types;
mod utils;
pub use types::{CandidateIndex, CandidateName, CandidateNameList, SimilarityScore};
pub use utils::{
    read_candidate_name_list_from_path, read_candidate_name_list_from_reader,
    read_candidate_name_list_from_string, sort_ranked_candidates,
};

/// Returns the index of the candidate that best matches `query`, or
/// `NOT_FOUND_INDEX` (`-1`) if no candidate clears the similarity threshold.
///
/// The index always refers to the caller's original `candidates` slice.
pub fn fuzzy_search<S: AsRef<str>>(query: &str, candidates: &[S]) -> isize {
    fuzzy_search_with_custom_config(DEFAULT_FUZZY_MATCHER_CONFIG, query, candidates)
}

/// Same as `fuzzy_search`, with a caller-supplied `FuzzyMatcherConfig`.
pub fn fuzzy_search_with_custom_config<S: AsRef<str>>(
    fuzzy_matcher_config: &FuzzyMatcherConfig,
    query: &str,
    candidates: &[S],
) -> isize {
    let fuzzy_matcher = FuzzyMatcher::new(fuzzy_matcher_config);

    match fuzzy_matcher.find_best_match(query, candidates) {
        // A slice can never hold more than `isize::MAX` elements
        Some(candidate_index) => candidate_index as isize,
        None => NOT_FOUND_INDEX,
    }
}

/// Same as `fuzzy_search`, but with `None` in place of the `-1` sentinel.
pub fn find_best_match<S: AsRef<str>>(query: &str, candidates: &[S]) -> Option<CandidateIndex> {
    FuzzyMatcher::new(DEFAULT_FUZZY_MATCHER_CONFIG).find_best_match(query, candidates)
}

/// Scores every candidate against `query` and returns all of them, best first.
///
/// Unlike `fuzzy_search`, no threshold is applied.
pub fn rank_candidates<S: AsRef<str>>(query: &str, candidates: &[S]) -> Vec<RankedCandidate> {
    FuzzyMatcher::new(DEFAULT_FUZZY_MATCHER_CONFIG).rank(query, candidates)
}
