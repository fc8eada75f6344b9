//! Fixture capture.
//!
//! Evaluates the built-in case table against inet6-core and serializes
//! inputs/outputs as fixture sets for later verification. The table covers
//! the reference INET6_ATON/INET6_NTOA vectors plus per-parser rejection
//! kinds.

use crate::error::HarnessError;
use crate::exec::execute_fixture_case;
use crate::fixtures::{FixtureCase, FixtureSet};

/// Fixture schema version written by [`capture_fixture_sets`].
pub const FIXTURE_VERSION: &str = "v1";

/// One family of captured operations: `(function, input)` pairs.
pub struct CaptureFamily {
    pub family: &'static str,
    pub cases: &'static [(&'static str, &'static str)],
}

const ATON: &[(&str, &str)] = &[
    ("inet6_aton", "0.0.0.0"),
    ("inet6_aton", "00.00.00.00"),
    ("inet6_aton", "000.000.000.000"),
    ("inet6_aton", "1.2.3.4"),
    ("inet6_aton", "01.02.03.04"),
    ("inet6_aton", "001.002.003.004"),
    ("inet6_aton", "255.255.255.255"),
    ("inet6_aton", "::"),
    ("inet6_aton", "0::0"),
    ("inet6_aton", "1::2"),
    ("inet6_aton", "0::"),
    ("inet6_aton", "1::"),
    ("inet6_aton", "::0"),
    ("inet6_aton", "::1"),
    ("inet6_aton", "1:2:3:4:5:6:7:8"),
    ("inet6_aton", "::2:3:4:5:6:7:8"),
    ("inet6_aton", "1::3:4:5:6:7:8"),
    ("inet6_aton", "1:2:3:4:5:6:7::"),
    ("inet6_aton", "0000:0000::0000:0001"),
    ("inet6_aton", "1234:5678:9abc:def0:4321:8765:cba9:0fed"),
    ("inet6_aton", "1020:3040:5060:7080:90A0:B0C0:D0E0:F010"),
    ("inet6_aton", "::C0A8:0102"),
    ("inet6_aton", "::192.168.1.2"),
    ("inet6_aton", "::FfFf:C0a8:0102"),
    ("inet6_aton", "::ffff:192.168.1.2"),
    ("inet6_aton", "::ABCD:1.2.3.4"),
    ("inet6_aton", "::1.2.3.00"),
    ("inet6_aton", "::FFFF:01.2.3.4"),
    ("inet6_aton", "1.2.3"),
    ("inet6_aton", "1.2.3."),
    ("inet6_aton", "1..3.4"),
    ("inet6_aton", "-1.2.3.4"),
    ("inet6_aton", "1.2.3.256"),
    ("inet6_aton", "1.2.3.4.5"),
    ("inet6_aton", "0001.2.3.4"),
    ("inet6_aton", "0x1.2.3.4"),
    ("inet6_aton", "1.2.3.4:80"),
    ("inet6_aton", "1.2.3.4/32"),
    ("inet6_aton", "mysql.com"),
    ("inet6_aton", "2014-02-28 09:00:00"),
    ("inet6_aton", ":::"),
    ("inet6_aton", ":1:2:3"),
    ("inet6_aton", "1:2:3:"),
    ("inet6_aton", "::00001"),
    ("inet6_aton", "::12345"),
    ("inet6_aton", "1020::3040::5060"),
    ("inet6_aton", "::ABCZ"),
    ("inet6_aton", "::0x1.2.3.4"),
    ("inet6_aton", "::FFFF:a.b.c.d"),
    ("inet6_aton", "::1.2.3.4:ABCD"),
    ("inet6_aton", "1234"),
    ("inet6_aton", "0123456789abcdef"),
];

const NTOA: &[(&str, &str)] = &[
    ("inet6_ntoa", "c0a801"),
    ("inet6_ntoa", "c0a80102"),
    ("inet6_ntoa", "c0a8010203"),
    ("inet6_ntoa", "0102030405060708090a0b0c0d0e0f"),
    ("inet6_ntoa", "0102030405060708090a0b0c0d0e0f10"),
    ("inet6_ntoa", "0102030405060708090a0b0c0d0e0f1011"),
    ("inet6_ntoa", "31323334"),
    ("inet6_ntoa", "30313233343536373839616263646566"),
    ("inet6_ntoa", "00000000000000000000000000000000"),
    ("inet6_ntoa", "00000000000000000000000000000001"),
    ("inet6_ntoa", "00010000000000000000000000000000"),
    ("inet6_ntoa", "000000000000000000000000c0a80102"),
    ("inet6_ntoa", "00000000000000000000ffffc0a80102"),
    ("inet6_ntoa", "00000000000000000000fffec0a80102"),
    ("inet6_ntoa", "00010000000200000000000000000003"),
];

const V4: &[(&str, &str)] = &[
    ("parse_v4", "1.2.3.4"),
    ("parse_v4", "1.2.3"),
    ("parse_v4", "1.2.3.4.5"),
    ("parse_v4", "1..22.33"),
    ("parse_v4", "11.22.33."),
    ("parse_v4", "11.22.33"),
    ("parse_v4", "1.2.3.256"),
    ("parse_v4", "0001.2.3.4"),
    ("parse_v4", "a.2.3.4"),
    ("parse_v4", "1.2.3.4.5.6.7.8"),
];

const V6: &[(&str, &str)] = &[
    ("parse_v6", "::"),
    ("parse_v6", ":"),
    ("parse_v6", ":1:2:3"),
    ("parse_v6", "1:2:3:"),
    ("parse_v6", "1020::3040::5060"),
    ("parse_v6", "1:2:3:4:5:6:7:8:9"),
    ("parse_v6", "1:2:3:4:5:6:7:8:9:a"),
    ("parse_v6", "1:2:3:4:5:6:7"),
    ("parse_v6", "1:2:3:4::5:6:7:8"),
    ("parse_v6", "1:2:3:4:5:6:7:1.2.3.4"),
    ("parse_v6", "::0x1.2.3.4"),
    ("parse_v6", "::12345"),
    ("parse_v6", "::ABCZ"),
    ("parse_v6", "a1.2.3.4"),
];

const PREDICATES: &[(&str, &str)] = &[
    ("is_ipv4", "10.0.5.9"),
    ("is_ipv4", "10.0.5.256"),
    ("is_ipv4", "::1"),
    ("is_ipv6", "10.0.5.9"),
    ("is_ipv6", "10::a"),
    ("is_ipv6", "::10.0.5.9"),
    ("is_ipv4_compat", "0000000000000000000000000a000509"),
    ("is_ipv4_compat", "00000000000000000000000000000001"),
    ("is_ipv4_compat", "00000000000000000000ffff0a000509"),
    ("is_ipv4_compat", "0a000509"),
    ("is_ipv4_mapped", "00000000000000000000ffff0a000509"),
    ("is_ipv4_mapped", "0000000000000000000000000a000509"),
    ("is_ipv4_mapped", "0a000509"),
];

/// The built-in case table, one entry per fixture family.
pub const FAMILIES: &[CaptureFamily] = &[
    CaptureFamily {
        family: "inet6/aton",
        cases: ATON,
    },
    CaptureFamily {
        family: "inet6/ntoa",
        cases: NTOA,
    },
    CaptureFamily {
        family: "inet6/v4",
        cases: V4,
    },
    CaptureFamily {
        family: "inet6/v6",
        cases: V6,
    },
    CaptureFamily {
        family: "inet6/predicates",
        cases: PREDICATES,
    },
];

/// Input field a function reads its argument from.
#[must_use]
pub fn input_field(function: &str) -> &'static str {
    match function {
        "inet6_ntoa" | "is_ipv4_compat" | "is_ipv4_mapped" => "bytes",
        _ => "text",
    }
}

/// File name a family is written under, e.g. `inet6_aton.json`.
#[must_use]
pub fn fixture_file_name(family: &str) -> String {
    format!("{}.json", family.replace('/', "_"))
}

/// Evaluate one family into a fixture set.
pub fn capture_family(
    family: &CaptureFamily,
    captured_at: &str,
) -> Result<FixtureSet, HarnessError> {
    let mut cases = Vec::with_capacity(family.cases.len());
    for &(function, input) in family.cases {
        let inputs = serde_json::json!({ input_field(function): input });
        let run = execute_fixture_case(function, &inputs)?;
        cases.push(FixtureCase {
            name: format!("{function}({input})"),
            function: function.to_string(),
            inputs,
            expected_output: run.output,
            expected_error: run.error.map(|e| e.name().to_string()),
        });
    }
    Ok(FixtureSet {
        version: FIXTURE_VERSION.to_string(),
        family: family.family.to_string(),
        captured_at: captured_at.to_string(),
        cases,
    })
}

/// Evaluate the whole case table.
pub fn capture_fixture_sets(captured_at: &str) -> Result<Vec<FixtureSet>, HarnessError> {
    FAMILIES
        .iter()
        .map(|family| capture_family(family, captured_at))
        .collect()
}
