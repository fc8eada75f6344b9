//! Diff rendering for fixture comparison.

/// Render a line diff between expected and actual output.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let mut out = String::new();
    out.push_str("--- expected\n");
    out.push_str("+++ actual\n");
    let mut expected_lines = expected.lines();
    let mut actual_lines = actual.lines();
    let mut line = 0;
    loop {
        line += 1;
        match (expected_lines.next(), actual_lines.next()) {
            (None, None) => break,
            (Some(e), Some(a)) if e == a => {}
            (e, a) => {
                out.push_str(&format!("@@ line {line} @@\n"));
                if let Some(e) = e {
                    out.push_str(&format!("-{e}\n"));
                }
                if let Some(a) = a {
                    out.push_str(&format!("+{a}\n"));
                }
            }
        }
    }
    out
}

/// Text block compared for a fixture case: the output, then the rejection
/// kind when there is one.
#[must_use]
pub fn case_text(output: &str, error: Option<&str>) -> String {
    match error {
        Some(kind) => format!("{output}\nerror: {kind}"),
        None => output.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs() {
        assert_eq!(render_diff("::1", "::1"), "[identical]");
    }

    #[test]
    fn reports_changed_line() {
        let diff = render_diff(
            &case_text("NULL", Some("NotAnAddress")),
            &case_text("NULL", Some("InvalidLength")),
        );
        assert_eq!(
            diff,
            "--- expected\n+++ actual\n@@ line 2 @@\n-error: NotAnAddress\n+error: InvalidLength\n"
        );
    }

    #[test]
    fn reports_missing_line() {
        let diff = render_diff(&case_text("NULL", Some("NotAnAddress")), "01020304");
        assert!(diff.contains("-NULL\n+01020304\n"));
        assert!(diff.contains("@@ line 2 @@\n-error: NotAnAddress\n"));
    }
}
