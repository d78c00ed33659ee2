/// Collects the first character of every whitespace-separated word.
///
/// Expects a name already passed through `fold_name`.
pub fn acronym(folded_name: &str) -> String {
    folded_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acronym_of_multi_word_name() {
        assert_eq!(acronym("integrity express"), "ie");
        assert_eq!(acronym("total quality tql"), "tqt");
    }

    #[test]
    fn test_acronym_of_empty_name() {
        assert_eq!(acronym(""), "");
    }
}
