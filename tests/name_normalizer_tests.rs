use customer_name_matcher::NameNormalizer;

#[cfg(test)]
mod customer_name_normalizer_tests {
    use super::*;

    #[test]
    fn test_removes_commas_and_periods() {
        let normalizer = NameNormalizer::customer_name_normalizer();

        assert_eq!(
            normalizer.normalize("Pepsi Logistics Company, Inc."),
            "Pepsi Company Inc"
        );
    }

    #[test]
    fn test_periods_fuse_initials() {
        let normalizer = NameNormalizer::customer_name_normalizer();

        assert_eq!(normalizer.normalize("C.H. Robinson"), "CH Robinson");
        assert_eq!(normalizer.normalize("J.B. Hunt Transport, Inc."), "JB Hunt Inc");
    }

    #[test]
    fn test_stop_words_are_case_insensitive() {
        let normalizer = NameNormalizer::customer_name_normalizer();

        assert_eq!(normalizer.normalize("MIDLINK LOGISTICS"), "MIDLINK");
        assert_eq!(normalizer.normalize("MidLink logistics"), "MidLink");
        assert_eq!(
            normalizer.normalize("Integrity Express Logistics LLC"),
            "Integrity Express"
        );
    }

    #[test]
    fn test_keeps_case_of_surviving_tokens() {
        let normalizer = NameNormalizer::customer_name_normalizer();

        assert_eq!(normalizer.normalize("VarStar Alliance, LLC"), "VarStar Alliance");
    }

    #[test]
    fn test_stop_word_must_match_whole_token() {
        let normalizer = NameNormalizer::customer_name_normalizer();

        assert_eq!(
            normalizer.normalize("Boomerang Transportation"),
            "Boomerang Transportation"
        );
        // Symbols other than `,` and `.` are left for the scorer to handle
        assert_eq!(
            normalizer.normalize("TOTAL QUALITY LOGISTICS (TQL)"),
            "TOTAL QUALITY (TQL)"
        );
    }

    #[test]
    fn test_only_stop_words() {
        let normalizer = NameNormalizer::customer_name_normalizer();

        assert_eq!(normalizer.normalize("Logistics, LLC."), "");
        assert_eq!(normalizer.normalize(",.,"), "");
    }

    #[test]
    fn test_empty_string() {
        let normalizer = NameNormalizer::customer_name_normalizer();

        assert_eq!(normalizer.normalize(""), "");
    }

    #[test]
    fn test_preserves_consecutive_spaces() {
        let normalizer = NameNormalizer::customer_name_normalizer();

        assert_eq!(normalizer.normalize("Allen  Lund"), "Allen  Lund");
        assert_eq!(normalizer.normalize("pepsi company inc. "), "pepsi company inc ");
    }

    #[test]
    fn test_dropped_token_between_spaces() {
        let normalizer = NameNormalizer::customer_name_normalizer();

        assert_eq!(normalizer.normalize("Cowan Logistics Inc"), "Cowan Inc");
    }

    #[test]
    fn test_normalize_all_keeps_positions() {
        let normalizer = NameNormalizer::customer_name_normalizer();

        let normalized = normalizer.normalize_all(&["Cowan LLC", "Cowan", "Convoy"]);

        assert_eq!(
            normalized,
            vec![
                (0, "Cowan".to_string()),
                (1, "Cowan".to_string()),
                (2, "Convoy".to_string())
            ]
        );
    }
}

#[cfg(test)]
mod custom_stop_words_tests {
    use super::*;

    #[test]
    fn test_custom_stop_words() {
        let normalizer = NameNormalizer::with_stop_words(&["Inc", "Company"]);

        assert_eq!(
            normalizer.normalize("Pepsi Logistics Company, Inc."),
            "Pepsi Logistics"
        );
    }

    #[test]
    fn test_no_stop_words() {
        let normalizer = NameNormalizer::with_stop_words(&[]);

        assert_eq!(normalizer.normalize("MIDLINK LOGISTICS"), "MIDLINK LOGISTICS");
    }
}
