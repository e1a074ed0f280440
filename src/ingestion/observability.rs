use std::path::PathBuf;
use std::time::Duration;

use crate::error::BikeshareError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (operation failed).
    Error,
    /// Critical error (missing data files and other I/O failures).
    Critical,
}

impl IngestionSeverity {
    /// Classify a load failure.
    pub fn for_error(e: &BikeshareError) -> Self {
        match e {
            BikeshareError::Io(_) | BikeshareError::DataSourceNotFound { .. } => Self::Critical,
            BikeshareError::Csv(err) => match err.kind() {
                ::csv::ErrorKind::Io(_) => Self::Critical,
                _ => Self::Error,
            },
            BikeshareError::EmptyDataset { .. } => Self::Warning,
            BikeshareError::Config(_)
            | BikeshareError::InvalidConfig { .. }
            | BikeshareError::SchemaMismatch { .. }
            | BikeshareError::ParseError { .. } => Self::Error,
        }
    }
}

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    /// City being loaded.
    pub city: String,
    /// Backing file.
    pub path: PathBuf,
}

/// Stats reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionStats {
    /// Rows read from the source file.
    pub rows: usize,
    /// Wall time spent reading and parsing.
    pub elapsed: Duration,
}

/// Observer interface for load outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait IngestionObserver: Send + Sync {
    /// Called when a load succeeds.
    fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    /// Called when a load fails.
    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &BikeshareError) {}

    /// Called when a failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &BikeshareError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Forwards load events to the [`log`] facade.
#[derive(Debug, Default)]
pub struct LogObserver;

impl IngestionObserver for LogObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        log::info!(
            "[ingest][ok] city={} path={} rows={} elapsed={:?}",
            ctx.city,
            ctx.path.display(),
            stats.rows,
            stats.elapsed
        );
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &BikeshareError) {
        log::warn!(
            "[ingest][{:?}] city={} path={} err={}",
            severity,
            ctx.city,
            ctx.path.display(),
            error
        );
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &BikeshareError) {
        log::error!(
            "[ALERT][ingest][{:?}] city={} path={} err={}",
            severity,
            ctx.city,
            ctx.path.display(),
            error
        );
    }
}
