//! Conformance harness for inet6-core.
//!
//! This crate provides:
//! - Fixture capture: evaluate the built-in case table into JSON fixture sets
//! - Fixture verify: compare inet6-core against checked-in fixtures
//! - Diagnostic capture: collect the codec's `log` records per case
//! - Report generation: markdown + JSON conformance reports
//! - Structured logging: JSONL run logs and artifact indexes

#![forbid(unsafe_code)]

pub mod capture;
pub mod diagnostics;
pub mod diff;
pub mod error;
pub mod exec;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
