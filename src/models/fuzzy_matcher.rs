use crate::models::{FuzzyMatcherConfig, NameNormalizer, RankedCandidate, SimilarityScorer};
use crate::types::{CandidateIndex, SimilarityScore};
use crate::utils::{fold_name, sort_ranked_candidates};
use log::debug;

const SIMILARITY_SCORE_EPSILON: SimilarityScore = 1e-6;

/// Resolves a free-text name to the closest entry of a candidate list.
///
/// Holds no per-query state: every call normalizes and scores the candidates
/// from scratch, so one matcher can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher<'a> {
    config: &'a FuzzyMatcherConfig,
    normalizer: NameNormalizer,
    scorer: SimilarityScorer,
}

impl<'a> FuzzyMatcher<'a> {
    pub fn new(config: &'a FuzzyMatcherConfig) -> Self {
        Self {
            config,
            normalizer: NameNormalizer::customer_name_normalizer(),
            scorer: SimilarityScorer::new(config),
        }
    }

    /// Uses a custom normalizer (e.g. with a different stop word list).
    pub fn with_normalizer(config: &'a FuzzyMatcherConfig, normalizer: NameNormalizer) -> Self {
        Self {
            config,
            normalizer,
            scorer: SimilarityScorer::new(config),
        }
    }

    /// Returns the original index of the best candidate, or `None` when the
    /// list is empty, the query is blank, or no candidate reaches
    /// `min_similarity_threshold`.
    ///
    /// A candidate identical to the query always wins (the first one, if it
    /// appears more than once). With `reject_ambiguous_matches`, a query that
    /// fits several differently named candidates equally well (a generic word
    /// such as "Inc") is not found.
    pub fn find_best_match<S: AsRef<str>>(
        &self,
        query: &str,
        candidates: &[S],
    ) -> Option<CandidateIndex> {
        if query.trim().is_empty() {
            return None;
        }

        if let Some(candidate_index) = candidates
            .iter()
            .position(|candidate| candidate.as_ref() == query)
        {
            debug!("Exact match for {:?} at index {}", query, candidate_index);
            return Some(candidate_index);
        }

        let ranked_candidates = self.rank(query, candidates);
        let best = *ranked_candidates.first()?;

        if best.similarity_score < self.config.min_similarity_threshold {
            debug!(
                "No match for {:?}; best was index {} ({:.3})",
                query, best.candidate_index, best.similarity_score
            );
            return None;
        }

        if self.config.reject_ambiguous_matches
            && self.is_ambiguous(query, candidates, &ranked_candidates)
        {
            debug!(
                "Ambiguous match for {:?}; differently named candidates share the top score ({:.3})",
                query, best.similarity_score
            );
            return None;
        }

        debug!(
            "Best match for {:?} is index {} ({:.3})",
            query, best.candidate_index, best.similarity_score
        );
        Some(best.candidate_index)
    }

    /// Whether the top score is shared by candidates that fold to different
    /// names, unless the best of them is the query itself.
    ///
    /// Repeated entries of the same name are not ambiguous.
    fn is_ambiguous<S: AsRef<str>>(
        &self,
        query: &str,
        candidates: &[S],
        ranked_candidates: &[RankedCandidate],
    ) -> bool {
        let Some(best) = ranked_candidates.first() else {
            return false;
        };

        let folded_name = |candidate_index: CandidateIndex| {
            fold_name(&self.normalizer.normalize(candidates[candidate_index].as_ref()))
        };

        let best_folded_name = folded_name(best.candidate_index);
        if best_folded_name == fold_name(&self.normalizer.normalize(query)) {
            return false;
        }

        ranked_candidates
            .iter()
            .skip(1)
            .take_while(|ranked_candidate| {
                (best.similarity_score - ranked_candidate.similarity_score).abs()
                    < SIMILARITY_SCORE_EPSILON
            })
            .any(|ranked_candidate| folded_name(ranked_candidate.candidate_index) != best_folded_name)
    }

    /// Scores every candidate and returns them best first.
    ///
    /// A blank query yields an empty ranking.
    pub fn rank<S: AsRef<str>>(&self, query: &str, candidates: &[S]) -> Vec<RankedCandidate> {
        let folded_query = fold_name(&self.normalizer.normalize(query));

        if folded_query.is_empty() || candidates.is_empty() {
            return Vec::new();
        }

        let mut ranked_candidates: Vec<RankedCandidate> = self
            .normalizer
            .normalize_all(candidates)
            .into_iter()
            .map(|(candidate_index, normalized_candidate)| {
                let folded_candidate = fold_name(&normalized_candidate);
                let (similarity_score, tie_break_score) =
                    self.scorer.score(&folded_query, &folded_candidate);

                debug!(
                    "{:?} vs {:?}: similarity {:.3}, tie-break {:.3}",
                    folded_query, folded_candidate, similarity_score, tie_break_score
                );

                RankedCandidate {
                    candidate_index,
                    similarity_score,
                    tie_break_score,
                }
            })
            .collect();

        sort_ranked_candidates(&mut ranked_candidates);

        ranked_candidates
    }

    /// The normalized form a name is reduced to before scoring.
    pub fn normalize(&self, name: &str) -> String {
        self.normalizer.normalize(name)
    }
}
