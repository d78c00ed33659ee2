use crate::models::FuzzyMatcherConfig;
use crate::types::SimilarityScore;
use crate::utils::{acronym, substring_edit_distance};
use strsim::osa_distance;

/// Scores how closely a query corresponds to a candidate name.
///
/// Both inputs are expected to have been passed through `fold_name`, which
/// takes care of case and symbol differences.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityScorer {
    min_partial_alignment_length: usize,
    acronym_match_score: SimilarityScore,
}

impl SimilarityScorer {
    pub fn new(config: &FuzzyMatcherConfig) -> Self {
        Self {
            min_partial_alignment_length: config.min_partial_alignment_length,
            acronym_match_score: config.acronym_match_score,
        }
    }

    /// Returns `(similarity_score, tie_break_score)`, both in `0.0..=1.0`.
    ///
    /// The similarity aligns the shorter string against its best-fitting run
    /// of whole words of the longer one, so a name buried in extra words (or
    /// extra words trailing a name) still scores highly, while a short name
    /// hidden inside a longer word ("ups" in "groupsource") does not. A query
    /// spelling out the candidate's word initials scores at least
    /// `acronym_match_score`.
    ///
    /// The tie-break score is the plain whole-string edit ratio, which favors
    /// the candidate closest in overall shape among equally similar ones.
    pub fn score(
        &self,
        folded_query: &str,
        folded_candidate: &str,
    ) -> (SimilarityScore, SimilarityScore) {
        if folded_query.is_empty() || folded_candidate.is_empty() {
            return (0.0, 0.0);
        }

        let query_chars: Vec<char> = folded_query.chars().collect();
        let candidate_chars: Vec<char> = folded_candidate.chars().collect();

        let tie_break_score =
            Self::global_ratio(folded_query, folded_candidate, &query_chars, &candidate_chars);

        let (shorter, longer) = if candidate_chars.len() < query_chars.len() {
            (&candidate_chars, &query_chars)
        } else {
            (&query_chars, &candidate_chars)
        };

        let mut similarity_score = if shorter.len() >= self.min_partial_alignment_length {
            let distance = substring_edit_distance(shorter, longer);

            1.0 - distance as SimilarityScore / shorter.len() as SimilarityScore
        } else {
            tie_break_score
        };

        if self.is_acronym_match(folded_query, folded_candidate) {
            similarity_score = similarity_score.max(self.acronym_match_score);
        }

        (similarity_score.clamp(0.0, 1.0), tie_break_score)
    }

    fn global_ratio(
        folded_query: &str,
        folded_candidate: &str,
        query_chars: &[char],
        candidate_chars: &[char],
    ) -> SimilarityScore {
        let max_len = query_chars.len().max(candidate_chars.len());
        if max_len == 0 {
            return 0.0;
        }

        let distance = osa_distance(folded_query, folded_candidate);

        1.0 - distance as SimilarityScore / max_len as SimilarityScore
    }

    fn is_acronym_match(&self, folded_query: &str, folded_candidate: &str) -> bool {
        if folded_candidate.split_whitespace().count() < 2 {
            return false;
        }

        let compact_query: String = folded_query.split_whitespace().collect();
        if compact_query.chars().count() < 2 {
            return false;
        }

        compact_query == acronym(folded_candidate)
    }
}
