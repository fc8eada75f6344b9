//! Test execution engine.

use inet6_core::InetError;

use crate::diagnostics;
use crate::diff;
use crate::error::HarnessError;
use crate::exec::execute_fixture_case;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::verify::VerificationResult;

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    /// Only run cases for this function, when set.
    pub function: Option<String>,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
            function: None,
        }
    }

    /// Restrict the run to cases of one function.
    #[must_use]
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        diagnostics::install();
        fixture_set
            .cases
            .iter()
            .filter(|case| {
                self.function
                    .as_deref()
                    .is_none_or(|function| function == case.function)
            })
            .map(verify_case)
            .collect()
    }
}

fn verify_case(case: &FixtureCase) -> VerificationResult {
    let (execution, diagnostics) =
        diagnostics::capture(|| execute_fixture_case(&case.function, &case.inputs));

    let (actual, actual_error, mut notes) = match execution {
        Ok(run) => (run.output, run.error.map(|e| e.name().to_string()), Vec::new()),
        Err(err) => (format!("unsupported:{err}"), None, Vec::new()),
    };

    if let Some(kind) = case.expected_error.as_deref()
        && InetError::from_name(kind).is_none()
    {
        notes.push(HarnessError::UnknownErrorKind(kind.to_string()).to_string());
    }

    let error_matches = case
        .expected_error
        .as_ref()
        .is_none_or(|expected| actual_error.as_ref() == Some(expected));
    let passed = notes.is_empty() && actual == case.expected_output && error_matches;

    let diff = if passed {
        None
    } else {
        let mut out = diff::render_diff(
            &diff::case_text(&case.expected_output, case.expected_error.as_deref()),
            &diff::case_text(&actual, actual_error.as_deref()),
        );
        for note in notes {
            out.push_str(&format!("{note}\n"));
        }
        Some(out)
    };

    VerificationResult {
        case_name: case.name.clone(),
        function: case.function.clone(),
        passed,
        expected: case.expected_output.clone(),
        actual,
        expected_error: case.expected_error.clone(),
        actual_error,
        diagnostics,
        diff,
    }
}
