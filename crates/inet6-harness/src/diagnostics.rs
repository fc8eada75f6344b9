//! Capture of codec diagnostics.
//!
//! inet6-core reports every rejection through the `log` facade. The harness
//! installs [`DiagnosticSink`] as the process logger and collects the
//! records emitted on the current thread while a [`capture`] closure runs,
//! so verification results can carry the rejection reason.

use std::cell::RefCell;
use std::sync::OnceLock;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable that mirrors captured diagnostics to stderr.
pub const ECHO_ENV: &str = "INET6_HARNESS_ECHO";

static SINK: OnceLock<DiagnosticSink> = OnceLock::new();
static INSTALLED: OnceLock<bool> = OnceLock::new();

thread_local! {
    static CAPTURED: RefCell<Option<Vec<String>>> = const { RefCell::new(None) };
}

/// `log::Log` implementation that buffers records per thread.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticSink {
    echo: bool,
}

impl DiagnosticSink {
    #[must_use]
    pub fn new(echo: bool) -> Self {
        Self { echo }
    }

    /// Reads the echo switch from [`ECHO_ENV`].
    #[must_use]
    pub fn from_env() -> Self {
        let echo = std::env::var(ECHO_ENV)
            .is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
        Self::new(echo)
    }

    #[must_use]
    pub fn echoes(&self) -> bool {
        self.echo
    }
}

impl Log for DiagnosticSink {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= LevelFilter::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        if self.echo {
            eprintln!("[{}] {}: {message}", record.level(), record.target());
        }
        CAPTURED.with(|captured| {
            if let Some(buffer) = captured.borrow_mut().as_mut() {
                buffer.push(message);
            }
        });
    }

    fn flush(&self) {}
}

/// Install the sink as the global logger, configured from the environment.
///
/// Idempotent. Returns `false` when another logger already owns the
/// facade, in which case [`capture`] collects nothing.
pub fn install() -> bool {
    *INSTALLED.get_or_init(|| {
        let sink = SINK.get_or_init(DiagnosticSink::from_env);
        let installed = log::set_logger(sink).is_ok();
        if installed {
            log::set_max_level(LevelFilter::Debug);
        }
        installed
    })
}

/// Run `f`, returning its result and the diagnostics it logged on this
/// thread, in emission order.
pub fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let previous = CAPTURED.with(|captured| captured.replace(Some(Vec::new())));
    let value = f();
    let lines = CAPTURED.with(|captured| captured.replace(previous));
    (value, lines.unwrap_or_default())
}
