//! This module provides the main entry point for the weatherboard client.
//! It ties the warehouse source, the snapshot cache, the filter pipeline and
//! the output surfaces into a single render pass per user interaction.

use crate::aggregate::{summarize, Summary};
use crate::error::WeatherboardError;
use crate::filtering::{apply_filters, FilterParams};
use crate::output::charts::{catalog_charts, ChartData};
use crate::output::export::{export_csv, CsvExport};
use crate::output::table::table_view;
use crate::snapshot::cache::{SnapshotCache, SNAPSHOT_TTL};
use crate::snapshot::source::WarehouseClient;
use crate::types::schema::DEFAULT_TABLE;
use crate::types::snapshot::Snapshot;
use bon::bon;
use polars::prelude::DataFrame;
use serde::Serialize;
use std::time::{Duration, Instant};

/// The values a renderer needs to draw the two filter controls: the host
/// multi-select options (all selected by default) and the temperature slider
/// bounds (full span selected by default).
///
/// Both are derived from the *unfiltered* snapshot, so the slider bounds do
/// not narrow when hosts are deselected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Controls {
    pub host_options: Vec<String>,
    pub temperature_bounds: (f64, f64),
}

/// Everything one render pass produces: controls, the four metric values,
/// the chart series, the projected table and the CSV download.
///
/// The filtered view itself is an intermediate and is dropped once these
/// outputs are derived.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub controls: Controls,
    pub summary: Summary,
    pub charts: Vec<ChartData>,
    pub table: DataFrame,
    pub export: CsvExport,
}

/// The main client for rendering the weather dashboard.
///
/// A `Dashboard` owns a [`SnapshotCache`] over a [`WarehouseClient`]; every
/// [`render`](Dashboard::render) call reuses the cached snapshot within the
/// TTL window and recomputes the whole view synchronously.
///
/// # Examples
///
/// ```no_run
/// # use weatherboard::{Dashboard, WeatherboardError};
/// # async fn run() -> Result<(), WeatherboardError> {
/// let dashboard = Dashboard::connect()
///     .base_url("https://warehouse.internal")
///     .call();
///
/// // Default controls: all hosts, full temperature span, no search.
/// let view = dashboard.render().call().await?;
/// println!("{} records", view.summary.record_count);
///
/// // Narrow to one host and a temperature band.
/// let view = dashboard
///     .render()
///     .hosts(vec!["pi-attic".to_string()])
///     .temperature((60.0, 100.0))
///     .call()
///     .await?;
/// println!("{} records after filtering", view.summary.record_count);
/// # Ok(())
/// # }
/// ```
pub struct Dashboard {
    cache: SnapshotCache<WarehouseClient>,
}

#[bon]
impl Dashboard {
    /// Creates a dashboard client for a warehouse endpoint.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.base_url(impl Into<String>)`: **Required.** Root URL of the
    ///   SQL-over-HTTP endpoint.
    /// * `.table(impl Into<String>)`: Optional. Fully qualified table to
    ///   query. Defaults to `DEMO.DEMO.WEATHER_DATA`.
    /// * `.ttl(Duration)`: Optional. Snapshot cache lifetime. Defaults to
    ///   600 seconds.
    #[builder]
    pub fn connect(
        base_url: impl Into<String>,
        table: Option<String>,
        ttl: Option<Duration>,
    ) -> Self {
        let table = table.unwrap_or_else(|| DEFAULT_TABLE.to_string());
        let ttl = ttl.unwrap_or(SNAPSHOT_TTL);
        Self {
            cache: SnapshotCache::new(WarehouseClient::new(base_url, table), ttl),
        }
    }

    /// Returns the current snapshot, fetching from the warehouse only when
    /// the cached one has outlived the TTL.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherboardError::DataUnavailable`] when the fetch fails
    /// (connectivity, HTTP status, CSV parse, missing required column).
    pub async fn snapshot(&self) -> Result<Snapshot, WeatherboardError> {
        Ok(self.cache.get_or_refresh(Instant::now()).await?)
    }

    /// Runs one full render pass: load (or reuse) the snapshot, apply the
    /// filter controls, and derive metrics, charts, table and export.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.hosts(Vec<String>)`: Optional. Selected hosts; defaults to all.
    /// * `.temperature((f64, f64))`: Optional. Inclusive range; defaults to
    ///   the snapshot's full span.
    /// * `.ip_search(String)`: Optional. Case-insensitive substring for
    ///   `IPADDRESS`; defaults to no search.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherboardError::DataUnavailable`] when the snapshot
    /// cannot be loaded (nothing is rendered in that case) and
    /// [`WeatherboardError::Polars`] if a dataframe operation fails.
    #[builder]
    pub async fn render(
        &self,
        hosts: Option<Vec<String>>,
        temperature: Option<(f64, f64)>,
        ip_search: Option<String>,
    ) -> Result<DashboardView, WeatherboardError> {
        let snapshot = self.snapshot().await?;
        let params = FilterParams {
            hosts,
            temperature,
            ip_search,
        };
        build_view(&snapshot, &params)
    }
}

/// The pure part of the render pass: given a loaded snapshot and the filter
/// parameters, derive every output. Same inputs, same view.
pub fn build_view(
    snapshot: &Snapshot,
    params: &FilterParams,
) -> Result<DashboardView, WeatherboardError> {
    let controls = Controls {
        host_options: snapshot.host_options()?,
        temperature_bounds: snapshot.temperature_bounds()?,
    };
    let filtered = apply_filters(snapshot, params)?;
    let summary = summarize(&filtered)?;
    let charts = catalog_charts(&filtered)?;
    let table = table_view(&filtered)?;
    let export = export_csv(&filtered)?;
    Ok(DashboardView {
        controls,
        summary,
        charts,
        table,
        export,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::schema::columns;
    use chrono::Utc;
    use polars::df;

    fn two_host_snapshot() -> Snapshot {
        let frame = df!(
            columns::SYSTEMTIME => ["2024-05-01 12:00:00", "2024-05-01 12:00:05"],
            columns::HOSTNAME => ["h1", "h2"],
            columns::IPADDRESS => ["10.0.0.1", "10.0.0.2"],
            columns::TEMPERATURE => [70.0, 90.0],
            columns::HUMIDITY => [40.0, 50.0],
            columns::PRESSURE => [1013.0, 1009.0],
        )
        .unwrap();
        Snapshot::new(frame, Utc::now())
    }

    #[test]
    fn end_to_end_single_host_band() -> Result<(), WeatherboardError> {
        let params = FilterParams {
            hosts: Some(vec!["h1".to_string()]),
            temperature: Some((60.0, 100.0)),
            ip_search: None,
        };
        let view = build_view(&two_host_snapshot(), &params)?;

        assert_eq!(view.summary.record_count, 1);
        assert_eq!(view.summary.avg_temperature, Some(70.0));
        assert_eq!(view.summary.avg_humidity, Some(40.0));
        assert_eq!(view.summary.avg_pressure, Some(1013.0));

        // Controls keep reflecting the unfiltered snapshot.
        assert_eq!(view.controls.host_options, vec!["h1", "h2"]);
        assert_eq!(view.controls.temperature_bounds, (70.0, 90.0));

        // One table row for h1.
        assert_eq!(view.table.height(), 1);
        assert_eq!(
            view.table.column(columns::IPADDRESS)?.str()?.get(0),
            Some("10.0.0.1")
        );

        // Export: header plus exactly the surviving row.
        let text = String::from_utf8(view.export.bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("SYSTEMTIME,HOSTNAME,IPADDRESS"));
        assert!(lines[1].contains("h1"));
        assert!(!text.contains("h2"));
        Ok(())
    }

    #[test]
    fn charts_cover_the_present_catalog_entries() -> Result<(), WeatherboardError> {
        let view = build_view(&two_host_snapshot(), &FilterParams::default())?;
        // CPU/MEMORY columns are absent, so the two scatters and the lux
        // histogram drop out.
        let titles: Vec<&str> = view.charts.iter().map(|c| c.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Temperature Distribution",
                "Humidity Distribution",
                "Pressure Distribution",
            ]
        );
        Ok(())
    }

    #[test]
    fn empty_snapshot_renders_na_state() -> Result<(), WeatherboardError> {
        let frame = df!(
            columns::SYSTEMTIME => Vec::<String>::new(),
            columns::HOSTNAME => Vec::<String>::new(),
            columns::IPADDRESS => Vec::<String>::new(),
            columns::TEMPERATURE => Vec::<f64>::new(),
            columns::HUMIDITY => Vec::<f64>::new(),
            columns::PRESSURE => Vec::<f64>::new(),
        )
        .unwrap();
        let view = build_view(&Snapshot::new(frame, Utc::now()), &FilterParams::default())?;

        assert_eq!(view.controls.temperature_bounds, (0.0, 100.0));
        assert!(view.controls.host_options.is_empty());
        assert_eq!(view.summary.record_count, 0);
        assert_eq!(view.summary.avg_temperature, None);
        assert_eq!(view.table.height(), 0);
        Ok(())
    }
}
