use customer_name_matcher::{
    fuzzy_search_with_custom_config, read_candidate_name_list_from_path, CandidateNameList,
    FuzzyMatcherConfig,
};
use std::{fs, path::Path};

pub mod constants;
use constants::{DEFAULT_ROSTER_FILE_NAME, TEST_DATA_FILES_DIRECTORY};
pub mod models;
pub use models::EvaluationResult;

// Helper function to get the value of the first line starting with `prefix`
fn get_directive(content: &str, prefix: &str) -> Option<String> {
    content.lines().find_map(|line| {
        line.strip_prefix(prefix)
            .map(|value| value.trim_start().to_string())
    })
}

/// Loads a roster CSV from the test data directory.
pub fn load_roster(file_name: &str) -> CandidateNameList {
    let roster_path = TEST_DATA_FILES_DIRECTORY.join(file_name);

    read_candidate_name_list_from_path(&roster_path)
        .unwrap_or_else(|e| panic!("Failed to load roster {:?}: {}", roster_path, e))
}

// Helper function to run the test for each file in the directory
//
// Test files consist of directive lines:
// - `QUERY:` the raw query; everything after the first space is kept verbatim
//   (including trailing whitespace)
// - `EXPECTED:` the expected index, or -1
// - `ROSTER:` optional roster file name under `tests/test_data_files`
// - `COMMENT:` ignored
pub fn run_test_for_file(
    test_file_path: &Path,
    fuzzy_matcher_config: &FuzzyMatcherConfig,
) -> EvaluationResult {
    let content = fs::read_to_string(test_file_path).expect("Failed to read test file");

    let query = get_directive(&content, "QUERY:")
        .unwrap_or_else(|| panic!("{:?} - Missing QUERY: line", test_file_path));

    let expected_index: isize = get_directive(&content, "EXPECTED:")
        .unwrap_or_else(|| panic!("{:?} - Missing EXPECTED: line", test_file_path))
        .trim()
        .parse()
        .unwrap_or_else(|e| panic!("{:?} - Invalid EXPECTED: value: {}", test_file_path, e));

    let roster_file_name = get_directive(&content, "ROSTER:")
        .map(|name| name.trim().to_string())
        .unwrap_or_else(|| DEFAULT_ROSTER_FILE_NAME.to_string());

    let candidate_names = load_roster(&roster_file_name);

    let actual_index =
        fuzzy_search_with_custom_config(fuzzy_matcher_config, &query, &candidate_names);

    EvaluationResult::new(
        &test_file_path.to_string_lossy(),
        &query,
        expected_index,
        actual_index,
    )
}
