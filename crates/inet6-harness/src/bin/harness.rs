//! CLI entrypoint for the inet6 conformance harness.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};

use inet6_harness::capture::{capture_fixture_sets, fixture_file_name};
use inet6_harness::diagnostics;
use inet6_harness::structured_log::{
    ArtifactIndex, LogEmitter, LogEntry, LogLevel, Outcome, now_utc, validate_log_file,
};
use inet6_harness::{ConformanceReport, FixtureSet, TestRunner, VerificationSummary};

/// Conformance tooling for inet6-core.
#[derive(Debug, Parser)]
#[command(name = "inet6-harness")]
#[command(about = "Conformance testing harness for inet6-core")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify inet6-core against fixture files.
    Verify {
        /// Fixture JSON file, or a directory of them.
        #[arg(long)]
        fixture: PathBuf,
        /// Only run cases for this function.
        #[arg(long)]
        function: Option<String>,
        /// Output report path (markdown; JSON is written alongside).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Convert address text to hex bytes.
    Aton {
        text: String,
    },
    /// Convert hex bytes to address text.
    Ntoa {
        hex: String,
    },
    /// Validate a structured JSONL log file.
    ValidateLog {
        #[arg(long)]
        log: PathBuf,
    },
    /// Regenerate fixture files from the built-in case table.
    Capture {
        /// Output directory for fixture JSON files.
        #[arg(long)]
        output: PathBuf,
        /// Optional fixed capture timestamp.
        #[arg(long)]
        timestamp: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    diagnostics::install();

    match cli.command {
        Command::Verify {
            fixture,
            function,
            report,
            log,
            timestamp,
        } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let fixture_sets = FixtureSet::load_all(&fixture)?;
            if fixture_sets.is_empty() {
                return Err(format!("No fixture JSON files found in {}", fixture.display()).into());
            }
            let timestamp = timestamp.unwrap_or_else(now_utc);
            let report_doc = verify(&fixture_sets, function.as_deref(), log.as_deref(), timestamp)?;

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );
            for failure in report_doc.summary.failures() {
                eprintln!("FAIL {}", failure.case_name);
            }

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;

                if let Some(log_path) = &log {
                    let run_id = format!("run-{}", std::process::id());
                    let mut index = ArtifactIndex::new(run_id, CAMPAIGN);
                    index.add_file(log_path, "log")?;
                    index.add_file(&report_path, "report")?;
                    index.add_file(&json_path, "report")?;
                    let index_path = report_path.with_extension("index.json");
                    std::fs::write(&index_path, index.to_json()?)?;
                    eprintln!("Wrote artifact index to {}", index_path.display());
                }
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::Aton { text } => {
            let (result, lines) = diagnostics::capture(|| inet6_core::parse_address(&text));
            for line in &lines {
                eprintln!("{line}");
            }
            match result {
                Ok(addr) => println!("{}", hex::encode(addr.as_bytes())),
                Err(_) => println!("NULL"),
            }
        }
        Command::Ntoa { hex } => {
            let bytes = hex::decode(hex.trim())?;
            let (result, lines) = diagnostics::capture(|| inet6_core::format_address(&bytes));
            for line in &lines {
                eprintln!("{line}");
            }
            println!("{}", result.as_deref().unwrap_or("NULL"));
        }
        Command::ValidateLog { log } => {
            let (line_count, errors) = validate_log_file(&log)?;
            for error in &errors {
                eprintln!("{error}");
            }
            eprintln!(
                "Validated {} lines in {}: {} errors",
                line_count,
                log.display(),
                errors.len()
            );
            if !errors.is_empty() {
                return Err("Structured log validation failed".into());
            }
        }
        Command::Capture { output, timestamp } => {
            eprintln!("Capturing fixtures to {}", output.display());
            std::fs::create_dir_all(&output)?;
            let captured_at = timestamp.unwrap_or_else(now_utc);
            for set in capture_fixture_sets(&captured_at)? {
                let path = output.join(fixture_file_name(&set.family));
                std::fs::write(&path, set.to_json()? + "\n")?;
                eprintln!("Wrote {} cases to {}", set.cases.len(), path.display());
            }
        }
    }

    Ok(())
}

const CAMPAIGN: &str = "fixture-verify";

fn verify(
    fixture_sets: &[FixtureSet],
    function: Option<&str>,
    log_path: Option<&Path>,
    timestamp: String,
) -> Result<ConformanceReport, Box<dyn std::error::Error>> {
    let started = Instant::now();
    let mut runner = TestRunner::new(CAMPAIGN);
    if let Some(function) = function {
        runner = runner.with_function(function);
    }

    let mut emitter = match log_path {
        Some(path) => Some(LogEmitter::to_file(
            path,
            CAMPAIGN,
            &format!("run-{}", std::process::id()),
        )?),
        None => None,
    };
    if let Some(emitter) = emitter.as_mut() {
        emitter.emit(LogLevel::Info, "run_start")?;
    }

    let mut summaries = Vec::with_capacity(fixture_sets.len());
    for set in fixture_sets {
        let results = runner.run(set);
        if let Some(emitter) = emitter.as_mut() {
            let cases = set
                .cases
                .iter()
                .filter(|case| function.is_none_or(|f| f == case.function));
            for (case, result) in cases.zip(&results) {
                emitter.emit_entry(LogEntry::for_case(result, case.inputs.clone()))?;
            }
        }
        summaries.push(VerificationSummary::from_results(results));
    }
    let summary = VerificationSummary::merge(summaries);

    if let Some(emitter) = emitter.as_mut() {
        let outcome = if summary.all_passed() {
            Outcome::Pass
        } else {
            Outcome::Fail
        };
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        emitter.emit_entry(
            LogEntry::new("", LogLevel::Info, "run_end")
                .with_outcome(outcome)
                .with_duration_ms(duration_ms)
                .with_details(serde_json::json!({
                    "total": summary.total,
                    "passed": summary.passed,
                    "failed": summary.failed,
                })),
        )?;
        emitter.flush()?;
    }

    Ok(ConformanceReport {
        title: String::from("inet6 Conformance Report"),
        families: fixture_sets.iter().map(|set| set.family.clone()).collect(),
        timestamp,
        summary,
    })
}
