/// Folds a name into the form compared by the `SimilarityScorer`.
///
/// Lowercases every character, drops anything that is neither alphanumeric
/// nor whitespace (e.g. `!`, `(`, `&`), and collapses whitespace runs into a
/// single space with no leading or trailing space.
pub fn fold_name(text: &str) -> String {
    text.chars()
        .flat_map(|c| c.to_lowercase())
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_name_lowercases_and_drops_symbols() {
        assert_eq!(
            fold_name("TOTAL QUALITY (TQL)"),
            "total quality tql".to_string()
        );
        assert_eq!(fold_name("Pepsi Company Inc!"), "pepsi company inc");
    }

    #[test]
    fn test_fold_name_collapses_whitespace() {
        assert_eq!(fold_name("  pepsi \t company  inc "), "pepsi company inc");
    }

    #[test]
    fn test_fold_name_keeps_digits() {
        assert_eq!(fold_name("Priority 1 Inc"), "priority 1 inc");
    }

    #[test]
    fn test_fold_name_symbols_only() {
        assert_eq!(fold_name("!?& ()"), "");
    }
}
