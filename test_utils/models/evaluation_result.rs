use customer_name_matcher::NOT_FOUND_INDEX;
use std::fmt;

/// Outcome of running a single query test file.
#[derive(Debug)]
pub struct EvaluationResult {
    pub test_file_path: String,
    pub query: String,
    pub expected_index: isize,
    pub actual_index: isize,
}

impl EvaluationResult {
    pub fn new(
        test_file_path: &str,
        query: &str,
        expected_index: isize,
        actual_index: isize,
    ) -> Self {
        Self {
            test_file_path: test_file_path.to_string(),
            query: query.to_string(),
            expected_index,
            actual_index,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.expected_index == self.actual_index
    }

    /// A match was returned where none was expected.
    pub fn is_false_positive(&self) -> bool {
        self.expected_index == NOT_FOUND_INDEX && self.actual_index != NOT_FOUND_INDEX
    }

    /// No match was returned where one was expected.
    pub fn is_false_negative(&self) -> bool {
        self.expected_index != NOT_FOUND_INDEX && self.actual_index == NOT_FOUND_INDEX
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Query {:?}: expected {}, got {}",
            self.test_file_path, self.query, self.expected_index, self.actual_index
        )
    }
}
