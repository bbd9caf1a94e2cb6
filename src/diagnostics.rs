//! Diagnostic sink: fire-and-forget `(event, payload)` records.
//!
//! The running app sends diagnostics to `tracing`; the subscriber writes them to
//! a log file because the terminal belongs to the UI.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

pub const DIAGNOSTICS_TARGET: &str = "comm_tracker::diagnostics";

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub event: &'static str,
    pub payload: Value,
}

impl Diagnostic {
    pub fn new(event: &'static str, payload: Value) -> Self {
        Self { event, payload }
    }
}

pub trait DiagnosticSink {
    fn log(&self, event: &str, payload: &Value);
}

/// Emits each diagnostic as an `info` event on [`DIAGNOSTICS_TARGET`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, event: &str, payload: &Value) {
        tracing::info!(target: DIAGNOSTICS_TARGET, event, payload = %payload, "diagnostic");
    }
}

/// Keeps every diagnostic in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    entries: Arc<Mutex<Vec<(String, Value)>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(String, Value)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn events(&self) -> Vec<String> {
        self.entries().into_iter().map(|(event, _)| event).collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn log(&self, event: &str, payload: &Value) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((event.to_string(), payload.clone()));
        }
    }
}

/// Install the global subscriber, appending to `path`.
///
/// `RUST_LOG` wins over `level` when set.
pub fn init_logging(path: &Path, level: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create log dir {}", parent.display()))?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level {level:?}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("install log subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recording_sink_shares_buffer_between_clones() {
        let sink = RecordingSink::new();
        let handle = sink.clone();
        sink.log("export_requested", &json!({ "format": "csv" }));
        handle.log("company_added", &json!({ "name": "" }));

        assert_eq!(handle.events(), vec!["export_requested", "company_added"]);
        assert_eq!(sink.entries()[0].1["format"], "csv");
    }

    #[test]
    fn test_tracing_sink_is_silent_without_subscriber() {
        TracingSink.log("export_requested", &json!({ "format": "pdf" }));
    }
}
