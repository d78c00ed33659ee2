/// Tokens dropped (case-insensitively) from names before they are compared.
///
/// Note: `,` and `.` can never match, since both characters are deleted from
/// the name before it is split into tokens.
pub const STOP_WORDS: &[&str] = &["logistics", "transport", "llc", ",", "."];

/// Characters deleted outright (not replaced with a space) during normalization.
pub const STRIPPED_PUNCTUATION: &[char] = &[',', '.'];

/// Returned by `fuzzy_search` when no candidate is an acceptable match.
pub const NOT_FOUND_INDEX: isize = -1;
