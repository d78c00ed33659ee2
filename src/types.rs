// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents the name of a customer (company) as an owned `String`.
pub type CandidateName = String;

/// An ordered roster of customer names. Position in the list is significant,
/// since matches are reported as indexes into it.
pub type CandidateNameList = Vec<CandidateName>;

/// Position of a candidate within the caller's original (un-normalized) list.
pub type CandidateIndex = usize;

/// A similarity in the range `0.0..=1.0`, where `1.0` is an exact match.
pub type SimilarityScore = f32;

/// Edit operations needed to turn one string into another.
pub type EditDistance = usize;
