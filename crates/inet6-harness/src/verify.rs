//! Output comparison and verification.

use serde::{Deserialize, Serialize};

/// Result of verifying a single fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Name of the test case.
    pub case_name: String,
    /// Function exercised by the case.
    pub function: String,
    /// Whether output and rejection kind both matched.
    pub passed: bool,
    /// Expected output.
    pub expected: String,
    /// Actual output from inet6-core.
    pub actual: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_error: Option<String>,
    /// Diagnostics logged while the case ran.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<String>,
    /// Diff if the case failed.
    pub diff: Option<String>,
}

/// Aggregate verification summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    /// Total cases run.
    pub total: usize,
    /// Cases passed.
    pub passed: usize,
    /// Cases failed.
    pub failed: usize,
    /// Individual results.
    pub results: Vec<VerificationResult>,
}

impl VerificationSummary {
    /// Build a summary from a list of results.
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;
        Self {
            total,
            passed,
            failed,
            results,
        }
    }

    /// Returns true if all cases passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Iterate over failing results.
    pub fn failures(&self) -> impl Iterator<Item = &VerificationResult> {
        self.results.iter().filter(|r| !r.passed)
    }

    /// Merge several summaries, keeping result order.
    #[must_use]
    pub fn merge(summaries: impl IntoIterator<Item = Self>) -> Self {
        Self::from_results(summaries.into_iter().flat_map(|s| s.results).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, passed: bool) -> VerificationResult {
        VerificationResult {
            case_name: name.to_string(),
            function: String::from("inet6_aton"),
            passed,
            expected: String::from("01020304"),
            actual: String::from(if passed { "01020304" } else { "NULL" }),
            expected_error: None,
            actual_error: None,
            diagnostics: Vec::new(),
            diff: None,
        }
    }

    #[test]
    fn summary_counts() {
        let summary = VerificationSummary::from_results(vec![
            result("a", true),
            result("b", false),
            result("c", true),
        ]);
        assert_eq!((summary.total, summary.passed, summary.failed), (3, 2, 1));
        assert!(!summary.all_passed());
        assert_eq!(
            summary.failures().map(|r| r.case_name.as_str()).collect::<Vec<_>>(),
            vec!["b"]
        );
    }

    #[test]
    fn merge_keeps_order() {
        let first = VerificationSummary::from_results(vec![result("a", true)]);
        let second = VerificationSummary::from_results(vec![result("b", true)]);
        let merged = VerificationSummary::merge([first, second]);
        assert_eq!(merged.total, 2);
        assert!(merged.all_passed());
        assert_eq!(merged.results[1].case_name, "b");
    }
}
