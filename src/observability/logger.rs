//! Structured JSON logger.
//!
//! - One log line = one event
//! - Synchronous, no buffering
//! - Deterministic key ordering (sorted map keys)

use std::fmt;
use std::io::{self, Write};

use serde_json::{Map, Value};

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace,
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous structured logger writing one JSON object per line.
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields to stdout.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        let mut stdout = io::stdout();
        // Log output is best-effort; a closed pipe must not take the
        // process down.
        let _ = writeln!(stdout, "{}", line);
    }

    /// Log to stderr (for errors).
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        let mut stderr = io::stderr();
        let _ = writeln!(stderr, "{}", line);
    }

    /// Renders one log line. serde_json's map keeps keys sorted, so output
    /// ordering is deterministic.
    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut map = Map::new();
        map.insert("event".into(), Value::String(event.to_string()));
        map.insert(
            "severity".into(),
            Value::String(severity.as_str().to_string()),
        );
        for (key, value) in fields {
            map.insert((*key).to_string(), Value::String((*value).to_string()));
        }
        Value::Object(map).to_string()
    }
}
