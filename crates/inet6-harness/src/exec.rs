//! Fixture execution against inet6-core.
//!
//! Outputs use the SQL rendering of the functions under test: binary
//! results as lower-case hex, predicates as `1`/`0`, no result as `NULL`.

use inet6_core::{InetError, inet};

use crate::error::HarnessError;

/// Rendering of "no result".
pub const NULL_OUTPUT: &str = "NULL";

/// Functions a fixture case may name.
pub const SUPPORTED_FUNCTIONS: &[&str] = &[
    "inet6_aton",
    "inet6_ntoa",
    "parse_v4",
    "parse_v6",
    "is_ipv4",
    "is_ipv6",
    "is_ipv4_compat",
    "is_ipv4_mapped",
];

/// Outcome of running one fixture case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRun {
    /// Rendered output, `NULL` on rejection.
    pub output: String,
    /// Rejection kind, if any.
    pub error: Option<InetError>,
}

impl CaseRun {
    fn value(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            error: None,
        }
    }

    fn rejected(error: InetError) -> Self {
        Self {
            output: String::from(NULL_OUTPUT),
            error: Some(error),
        }
    }

    fn from_result<T>(result: Result<T, InetError>, render: impl FnOnce(T) -> String) -> Self {
        match result {
            Ok(value) => Self::value(render(value)),
            Err(err) => Self::rejected(err),
        }
    }

    fn flag(value: bool) -> Self {
        Self::value(if value { "1" } else { "0" })
    }
}

/// Run `function` on `inputs` and render the result.
pub fn execute_fixture_case(
    function: &str,
    inputs: &serde_json::Value,
) -> Result<CaseRun, HarnessError> {
    let run = match function {
        "inet6_aton" => CaseRun::from_result(inet::parse_address(text_input(inputs)?), |addr| {
            hex::encode(addr.as_bytes())
        }),
        "inet6_ntoa" => CaseRun::from_result(inet::format_address(&bytes_input(inputs)?), |s| s),
        "parse_v4" => CaseRun::from_result(inet::parse_v4(text_input(inputs)?), hex::encode),
        "parse_v6" => CaseRun::from_result(inet::parse_v6(text_input(inputs)?), hex::encode),
        "is_ipv4" => CaseRun::flag(inet::is_ipv4(text_input(inputs)?)),
        "is_ipv6" => CaseRun::flag(inet::is_ipv6(text_input(inputs)?)),
        "is_ipv4_compat" => CaseRun::flag(inet::is_ipv4_compat(&bytes_input(inputs)?)),
        "is_ipv4_mapped" => CaseRun::flag(inet::is_ipv4_mapped(&bytes_input(inputs)?)),
        other => return Err(HarnessError::UnsupportedFunction(other.to_string())),
    };
    Ok(run)
}

fn text_input(inputs: &serde_json::Value) -> Result<&str, HarnessError> {
    inputs
        .get("text")
        .and_then(serde_json::Value::as_str)
        .ok_or(HarnessError::MissingInput { field: "text" })
}

fn bytes_input(inputs: &serde_json::Value) -> Result<Vec<u8>, HarnessError> {
    let encoded = inputs
        .get("bytes")
        .and_then(serde_json::Value::as_str)
        .ok_or(HarnessError::MissingInput { field: "bytes" })?;
    Ok(hex::decode(encoded)?)
}
