//! Ingestion entrypoints.
//!
//! Most callers go through [`crate::trips::load`]. This module provides the layer below it:
//!
//! - [`ingest_from_path`] reads one city's CSV into an in-memory [`crate::types::DataSet`],
//!   turning a missing or unreadable file into [`BikeshareError::DataSourceNotFound`]
//! - success/failure/alerts are reported to an optional [`IngestionObserver`]
//!
//! The CSV reader itself lives in [`csv`].

pub mod csv;
pub mod observability;

use std::fmt;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::error::{BikeshareError, BikeshareResult};
use crate::types::{DataSet, Schema};

pub use observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats, LogObserver};

/// Options controlling ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

impl IngestionOptions {
    /// Options reporting to the [`log`] facade.
    pub fn logged() -> Self {
        Self {
            observer: Some(Arc::new(LogObserver)),
            ..Default::default()
        }
    }
}

/// Read `city`'s CSV at `path` using `schema`.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row count and timing stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
pub fn ingest_from_path(
    city: &str,
    path: impl AsRef<Path>,
    schema: &Schema,
    options: &IngestionOptions,
) -> BikeshareResult<DataSet> {
    let path = path.as_ref();
    let ctx = IngestionContext {
        city: city.to_string(),
        path: path.to_path_buf(),
    };

    let started = Instant::now();
    let result = File::open(path)
        .map_err(|source| BikeshareError::DataSourceNotFound {
            city: ctx.city.clone(),
            path: ctx.path.clone(),
            source,
        })
        .and_then(|file| {
            let mut rdr = csv::reader_builder().from_reader(file);
            csv::ingest_csv_from_reader(&mut rdr, schema)
        });

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(ds) => obs.on_success(
                &ctx,
                IngestionStats {
                    rows: ds.row_count(),
                    elapsed: started.elapsed(),
                },
            ),
            Err(e) => {
                let sev = IngestionSeverity::for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}
