use crate::types::EditDistance;

/// Smallest optimal-string-alignment distance between `pattern` and any run
/// of whole words of `text` (Sellers' approximate substring search, anchored
/// to word boundaries).
///
/// Operations are insertion, deletion, substitution and transposition of two
/// adjacent characters, each costing one. Whole words of `text` before and
/// after the aligned run are free, so a pattern matching complete words of
/// `text` has a distance of `0`. Starting or ending inside a word costs the
/// skipped characters of that word, e.g. `ups` against `groupsource`.
///
/// Expects whitespace-normalized input (single spaces between words).
///
/// Runs in O(|pattern| x |text|) time, keeping three rows of the table.
pub fn substring_edit_distance(pattern: &[char], text: &[char]) -> EditDistance {
    let pattern_len = pattern.len();
    let text_len = text.len();

    if pattern_len == 0 {
        return 0;
    }
    if text_len == 0 {
        return pattern_len;
    }

    let mut prev_prev_row: Vec<EditDistance> = vec![0; text_len + 1];
    let mut prev_row: Vec<EditDistance> = vec![0; text_len + 1];
    let mut current_row: Vec<EditDistance> = vec![0; text_len + 1];

    // Row 0: an alignment starts for free at the start of a word, and pays
    // for every character skipped since the last word start otherwise
    for j in 1..=text_len {
        prev_row[j] = if text[j - 1] == ' ' {
            0
        } else {
            prev_row[j - 1] + 1
        };
    }

    for i in 1..=pattern_len {
        current_row[0] = i;

        for j in 1..=text_len {
            let substitution_cost = if pattern[i - 1] == text[j - 1] { 0 } else { 1 };

            let mut distance = (prev_row[j] + 1) // Deletion
                .min(current_row[j - 1] + 1) // Insertion
                .min(prev_row[j - 1] + substitution_cost); // Substitution

            if i > 1
                && j > 1
                && pattern[i - 1] == text[j - 2]
                && pattern[i - 2] == text[j - 1]
            {
                distance = distance.min(prev_prev_row[j - 2] + 1); // Transposition
            }

            current_row[j] = distance;
        }

        std::mem::swap(&mut prev_prev_row, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut current_row);
    }

    // An alignment ends at the end of a word
    (1..=text_len)
        .filter(|&j| j == text_len || text[j] == ' ')
        .map(|j| prev_row[j])
        .min()
        .unwrap_or(pattern_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(pattern: &str, text: &str) -> EditDistance {
        let pattern: Vec<char> = pattern.chars().collect();
        let text: Vec<char> = text.chars().collect();

        substring_edit_distance(&pattern, &text)
    }

    #[test]
    fn test_contained_pattern_has_zero_distance() {
        assert_eq!(distance("tql", "total quality tql"), 0);
        assert_eq!(distance("pepsi", "pepsi company inc"), 0);
        assert_eq!(distance("hunt", "jb hunt inc"), 0);
    }

    #[test]
    fn test_identical_strings() {
        assert_eq!(distance("midlink", "midlink"), 0);
    }

    #[test]
    fn test_single_substitution() {
        assert_eq!(distance("convoy", "the convey fleet"), 1);
    }

    #[test]
    fn test_adjacent_transposition_costs_one() {
        assert_eq!(distance("hnut", "jb hunt inc"), 1);
    }

    #[test]
    fn test_pattern_longer_than_text() {
        // The trailing "co" has nothing left to align with
        assert_eq!(distance("pepsico", "pepsi"), 2);
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(distance("", "anything"), 0);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(distance("cowan", ""), 5);
    }

    #[test]
    fn test_unrelated_short_pattern() {
        // Closest is "company" (substitute w->m, insert p and y)
        assert_eq!(distance("cowan", "allen lund company"), 3);
    }

    #[test]
    fn test_pattern_inside_a_word_pays_for_the_rest_of_it() {
        // "ups" sits inside "groupsource"; the best whole word is "freight"
        assert!(distance("ups", "groupsource freight") >= 3);
        // "fabco" needs a leading "f" and a trailing "o" around "abc"
        assert_eq!(distance("abc", "fabco freight"), 2);
        // Five trailing characters of "arrivederci" are left over
        assert!(distance("arrive", "arrivederci foods") >= 2);
    }

    #[test]
    fn test_pattern_spanning_several_words() {
        assert_eq!(distance("company inc", "pepsi company inc"), 0);
        assert_eq!(distance("pepsi company inc", "pepsi company inc hello world"), 0);
    }

    #[test]
    fn test_pattern_starting_mid_word() {
        // Skipping "total qual" is not free; "tql" is a whole word though
        assert_eq!(distance("ity", "total quality"), 4);
        assert_eq!(distance("tql", "total quality tql"), 0);
    }
}
