//! The `Snapshot` type: one immutable fetch of the sensor table, plus the
//! control derivations (host options, temperature bounds) computed against it.

use crate::types::schema::{columns, DEFAULT_TEMPERATURE_BOUNDS};
use chrono::{DateTime, Utc};
use polars::prelude::*;
use std::collections::HashSet;

/// All rows of the sensor table as fetched at one point in time.
///
/// A snapshot is never mutated after creation; every downstream operation
/// (filtering, aggregation, projection) derives a new frame from it. Cloning
/// is cheap because polars frames share their column buffers.
///
/// Instances normally come out of the snapshot cache via
/// [`crate::Dashboard::snapshot`]; tests construct them directly from
/// in-memory frames.
#[derive(Debug, Clone)]
pub struct Snapshot {
    frame: DataFrame,
    fetched_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(frame: DataFrame, fetched_at: DateTime<Utc>) -> Self {
        Self { frame, fetched_at }
    }

    /// The underlying frame, read-only.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// When this snapshot was fetched from the warehouse. Renderers surface
    /// this as an "as of" hint; the cache does not use it (TTL accounting is
    /// monotonic and lives in the cache slot).
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Schema capability check. Optional columns (`HOSTNAME` in particular)
    /// are probed through this rather than by trying an operation and
    /// catching its failure.
    pub fn has_column(&self, name: &str) -> bool {
        self.frame
            .get_column_names()
            .iter()
            .any(|c| c.as_str() == name)
    }

    /// Distinct non-null host values in first-seen row order: the option set
    /// for the host multi-select, all of which are selected by default.
    ///
    /// Returns an empty list when the `HOSTNAME` column is absent.
    pub fn host_options(&self) -> Result<Vec<String>, PolarsError> {
        if !self.has_column(columns::HOSTNAME) {
            return Ok(Vec::new());
        }
        let hosts = self.frame.column(columns::HOSTNAME)?.str()?;
        let mut seen = HashSet::new();
        let mut options = Vec::new();
        for host in hosts.into_iter().flatten() {
            if seen.insert(host) {
                options.push(host.to_string());
            }
        }
        Ok(options)
    }

    /// Min/max of `TEMPERATURE` over the whole (unfiltered) snapshot: the
    /// bounds of the range slider and its default span. An empty snapshot, or
    /// one where every temperature is null, falls back to
    /// [`DEFAULT_TEMPERATURE_BOUNDS`].
    pub fn temperature_bounds(&self) -> Result<(f64, f64), PolarsError> {
        let temps = self
            .frame
            .column(columns::TEMPERATURE)?
            .cast(&DataType::Float64)?;
        let temps = temps.f64()?;
        match (temps.min(), temps.max()) {
            (Some(min), Some(max)) => Ok((min, max)),
            _ => Ok(DEFAULT_TEMPERATURE_BOUNDS),
        }
    }
}
