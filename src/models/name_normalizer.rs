use crate::constants::{STOP_WORDS, STRIPPED_PUNCTUATION};
use crate::types::CandidateIndex;
use std::collections::HashSet;

/// Produces the canonical comparison form of a company or customer name, so
/// that punctuation and boilerplate suffixes ("LLC", "Logistics") do not
/// influence similarity scoring.
///
/// Note: This explicitly does not modify the case of the surviving tokens.
/// Case folding is left to the `SimilarityScorer`.
#[derive(Debug, Clone)]
pub struct NameNormalizer {
    /// Preprocessed (lowercased) stop words for filtering tokens.
    pre_processed_stop_words: HashSet<String>,
}

impl Default for NameNormalizer {
    fn default() -> Self {
        Self::customer_name_normalizer()
    }
}

impl NameNormalizer {
    /// Creates a normalizer which filters the default `STOP_WORDS`.
    pub fn customer_name_normalizer() -> Self {
        Self::with_stop_words(STOP_WORDS)
    }

    /// Creates a normalizer which filters a custom set of stop words.
    pub fn with_stop_words(stop_words: &[&str]) -> Self {
        Self {
            pre_processed_stop_words: Self::preprocess_stop_words(stop_words),
        }
    }

    /// Normalizes a single name.
    ///
    /// Steps, in order:
    /// 1. Delete every `,` and `.` (which may fuse tokens, e.g. `C.H.` -> `CH`).
    /// 2. Split on single spaces.
    /// 3. Drop tokens equal to a stop word, ignoring case.
    /// 4. Rejoin with single spaces.
    ///
    /// Consecutive spaces produce empty tokens, which survive the rejoin.
    pub fn normalize(&self, text: &str) -> String {
        let stripped: String = text
            .chars()
            .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
            .collect();

        stripped
            .split(' ')
            .filter(|token| !self.is_stop_word(token))
            .collect::<Vec<&str>>()
            .join(" ")
    }

    /// Normalizes every name, carrying each one's original position along.
    pub fn normalize_all<S: AsRef<str>>(&self, names: &[S]) -> Vec<(CandidateIndex, String)> {
        names
            .iter()
            .enumerate()
            .map(|(candidate_index, name)| (candidate_index, self.normalize(name.as_ref())))
            .collect()
    }

    fn is_stop_word(&self, token: &str) -> bool {
        self.pre_processed_stop_words
            .contains(token.to_lowercase().as_str())
    }

    fn preprocess_stop_words(stop_words: &[&str]) -> HashSet<String> {
        stop_words.iter().map(|word| word.to_lowercase()).collect()
    }
}
