//! Diagnostic reporting for swallowed failures
//!
//! Queries never propagate errors to the caller; instead every caught
//! failure is handed to a sink. The sink is injectable so tests can
//! assert on reported failures without capturing output streams.

use log::error;

/// Receives the errors the query functions catch and swallow.
///
/// `operation` names the query that failed (e.g. `"git_hash"`),
/// `error` is the human-readable cause.
pub trait DiagnosticSink {
    fn report(&self, operation: &str, error: &str);
}

/// Default sink: forwards failures to `log::error!`.
///
/// A no-op until a logger is installed; binaries wanting failures on
/// stderr can initialize `env_logger`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, operation: &str, error: &str) {
        error!("{}: {}", operation, error);
    }
}
