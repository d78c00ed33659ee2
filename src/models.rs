pub mod error;
pub use error::Error;

pub mod fuzzy_matcher;
pub use fuzzy_matcher::FuzzyMatcher;

pub mod fuzzy_matcher_config;
pub use fuzzy_matcher_config::FuzzyMatcherConfig;

pub mod name_normalizer;
pub use name_normalizer::NameNormalizer;

pub mod ranked_candidate;
pub use ranked_candidate::RankedCandidate;

pub mod similarity_scorer;
pub use similarity_scorer::SimilarityScorer;
