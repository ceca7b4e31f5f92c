use crate::types::schema::columns;
use crate::types::snapshot::Snapshot;
use crate::types::view::FilteredView;
use polars::prelude::{col, lit, IntoLazy, LazyFrame, NamedFrom, PolarsError, Series};
use serde::{Deserialize, Serialize};

/// The state of the three filter controls for one render pass.
///
/// `None` means the control is at its default: every host selected, the full
/// temperature span, an empty search box. Parameters are independent AND
/// predicates; their application order never changes the resulting rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterParams {
    /// Hosts selected in the multi-select. `Some(vec![])` is a legitimate
    /// state (everything deselected) and matches no rows.
    pub hosts: Option<Vec<String>>,
    /// Inclusive temperature range `(low, high)`.
    pub temperature: Option<(f64, f64)>,
    /// Case-insensitive substring matched against `IPADDRESS`.
    pub ip_search: Option<String>,
}

pub trait SensorFrameFilterExt {
    /// Keeps rows whose `HOSTNAME` is one of `hosts`. Null hostnames never
    /// match.
    ///
    /// # Arguments
    /// * `hosts`: The selected host set.
    ///
    /// # Returns
    /// A new `LazyFrame` with the filter applied.
    fn filter_hosts(self, hosts: &[String]) -> LazyFrame;

    /// Keeps rows whose `TEMPERATURE` lies within `[low, high]` (inclusive).
    /// Null temperatures never match.
    ///
    /// # Arguments
    /// * `low`: The lower bound (inclusive).
    /// * `high`: The upper bound (inclusive).
    ///
    /// # Returns
    /// A new `LazyFrame` with the filter applied.
    fn filter_temperature(self, low: f64, high: f64) -> LazyFrame;

    /// Keeps rows whose `IPADDRESS` contains `needle`, compared
    /// case-insensitively. Null addresses never match.
    ///
    /// # Arguments
    /// * `needle`: The substring to look for.
    ///
    /// # Returns
    /// A new `LazyFrame` with the filter applied.
    fn filter_ip_contains(self, needle: &str) -> LazyFrame;
}

impl SensorFrameFilterExt for LazyFrame {
    fn filter_hosts(self, hosts: &[String]) -> LazyFrame {
        let selected = Series::new("selected_hosts".into(), hosts.to_vec());
        self.filter(col(columns::HOSTNAME).is_in(lit(selected)))
    }

    fn filter_temperature(self, low: f64, high: f64) -> LazyFrame {
        self.filter(
            col(columns::TEMPERATURE)
                .gt_eq(lit(low))
                .and(col(columns::TEMPERATURE).lt_eq(lit(high))),
        )
    }

    fn filter_ip_contains(self, needle: &str) -> LazyFrame {
        // Lowercase both sides; comparisons against null stay null and the
        // row is dropped.
        let needle = needle.to_lowercase();
        self.filter(
            col(columns::IPADDRESS)
                .str()
                .to_lowercase()
                .str()
                .contains_literal(lit(needle)),
        )
    }
}

/// Narrows a snapshot to the rows satisfying every active filter.
///
/// The pipeline is pure: the same snapshot and parameters always produce the
/// same view, in original row order, with no side effects. An empty result is
/// a valid state, not an error.
///
/// Defaults are resolved against the *unfiltered* snapshot: the host
/// selection falls back to [`Snapshot::host_options`] and the temperature
/// range to [`Snapshot::temperature_bounds`], so the slider bounds stay
/// stable regardless of the host selection. The host filter runs whenever the
/// `HOSTNAME` column exists (dropping null hostnames even under the default
/// selection) and is a no-op when it does not; the temperature predicate
/// always runs; the search predicate runs only for a non-empty needle.
pub fn apply_filters(
    snapshot: &Snapshot,
    params: &FilterParams,
) -> Result<FilteredView, PolarsError> {
    let mut lf = snapshot.frame().clone().lazy();

    if snapshot.has_column(columns::HOSTNAME) {
        let selected = match params.hosts.clone() {
            Some(hosts) => hosts,
            None => snapshot.host_options()?,
        };
        lf = lf.filter_hosts(&selected);
    }

    let (low, high) = match params.temperature {
        Some(range) => range,
        None => snapshot.temperature_bounds()?,
    };
    lf = lf.filter_temperature(low, high);

    if let Some(needle) = params.ip_search.as_deref() {
        if !needle.is_empty() {
            lf = lf.filter_ip_contains(needle);
        }
    }

    Ok(FilteredView::new(lf.collect()?))
}
