//! The fixed chart catalog and the series extraction behind it.
//!
//! The crate does not draw anything: histograms ship their non-null values
//! (the renderer bins them, [`HISTOGRAM_BINS`] wide), scatters ship their
//! point list with an optional host label per point for color grouping.

use crate::types::schema::columns;
use crate::types::view::FilteredView;
use polars::prelude::{DataType, PolarsError};
use serde::{Deserialize, Serialize};

/// Bin count for every histogram in the catalog.
pub const HISTOGRAM_BINS: usize = 30;

/// One chart the dashboard always tries to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSpec {
    Histogram {
        title: &'static str,
        column: &'static str,
    },
    Scatter {
        title: &'static str,
        x: &'static str,
        y: &'static str,
    },
}

impl ChartSpec {
    /// Columns this chart cannot be drawn without. The host color label is
    /// not among them; scatters degrade to unlabeled points.
    fn required_columns(&self) -> Vec<&'static str> {
        match self {
            ChartSpec::Histogram { column, .. } => vec![column],
            ChartSpec::Scatter { x, y, .. } => vec![x, y],
        }
    }
}

/// The six charts of the dashboard, in display order.
pub const CHART_CATALOG: [ChartSpec; 6] = [
    ChartSpec::Histogram {
        title: "Temperature Distribution",
        column: columns::TEMPERATURE,
    },
    ChartSpec::Histogram {
        title: "Humidity Distribution",
        column: columns::HUMIDITY,
    },
    ChartSpec::Scatter {
        title: "CPU Usage vs CPU Temp",
        x: columns::CPU,
        y: columns::CPUTEMPF,
    },
    ChartSpec::Scatter {
        title: "Memory vs Device Temp",
        x: columns::MEMORY,
        y: columns::DEVICETEMPERATURE,
    },
    ChartSpec::Histogram {
        title: "Pressure Distribution",
        column: columns::PRESSURE,
    },
    ChartSpec::Histogram {
        title: "Light (Lux) Distribution",
        column: columns::LUX,
    },
];

/// One point of a host-colored scatter. `host` is `None` when the row has no
/// hostname or the column is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub host: Option<String>,
}

/// Display-ready series for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartData {
    Histogram {
        title: String,
        values: Vec<f64>,
        bins: usize,
    },
    Scatter {
        title: String,
        points: Vec<ScatterPoint>,
    },
}

impl ChartData {
    pub fn title(&self) -> &str {
        match self {
            ChartData::Histogram { title, .. } => title,
            ChartData::Scatter { title, .. } => title,
        }
    }
}

/// Extracts the series for one chart spec, or `None` when a required column
/// is absent from the view.
pub fn chart_data(
    view: &FilteredView,
    spec: &ChartSpec,
) -> Result<Option<ChartData>, PolarsError> {
    if spec
        .required_columns()
        .iter()
        .any(|&c| !view.has_column(c))
    {
        return Ok(None);
    }

    let data = match *spec {
        ChartSpec::Histogram { title, column } => {
            let values = f64_values(view, column)?
                .into_iter()
                .flatten()
                .collect();
            ChartData::Histogram {
                title: title.to_string(),
                values,
                bins: HISTOGRAM_BINS,
            }
        }
        ChartSpec::Scatter { title, x, y } => {
            let xs = f64_values(view, x)?;
            let ys = f64_values(view, y)?;
            let hosts = host_labels(view)?;
            let mut points = Vec::new();
            for (i, (x_val, y_val)) in xs.into_iter().zip(ys).enumerate() {
                // A point needs both coordinates.
                if let (Some(x), Some(y)) = (x_val, y_val) {
                    points.push(ScatterPoint {
                        x,
                        y,
                        host: hosts.as_ref().and_then(|h| h[i].clone()),
                    });
                }
            }
            ChartData::Scatter {
                title: title.to_string(),
                points,
            }
        }
    };
    Ok(Some(data))
}

/// Walks [`CHART_CATALOG`] in order, skipping charts whose columns the view
/// does not have.
pub fn catalog_charts(view: &FilteredView) -> Result<Vec<ChartData>, PolarsError> {
    let mut charts = Vec::with_capacity(CHART_CATALOG.len());
    for spec in &CHART_CATALOG {
        if let Some(data) = chart_data(view, spec)? {
            charts.push(data);
        }
    }
    Ok(charts)
}

fn f64_values(view: &FilteredView, name: &str) -> Result<Vec<Option<f64>>, PolarsError> {
    let values = view.frame().column(name)?.cast(&DataType::Float64)?;
    Ok(values.f64()?.into_iter().collect())
}

fn host_labels(view: &FilteredView) -> Result<Option<Vec<Option<String>>>, PolarsError> {
    if !view.has_column(columns::HOSTNAME) {
        return Ok(None);
    }
    let hosts = view.frame().column(columns::HOSTNAME)?.str()?;
    Ok(Some(
        hosts
            .into_iter()
            .map(|h| h.map(str::to_string))
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn histogram_carries_non_null_values_only() -> Result<(), PolarsError> {
        let view = FilteredView::new(df!(
            columns::TEMPERATURE => [Some(70.0), None, Some(80.0)],
        )?);
        let spec = &CHART_CATALOG[0];
        match chart_data(&view, spec)? {
            Some(ChartData::Histogram { title, values, bins }) => {
                assert_eq!(title, "Temperature Distribution");
                assert_eq!(values, vec![70.0, 80.0]);
                assert_eq!(bins, HISTOGRAM_BINS);
            }
            other => panic!("expected histogram, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn scatter_drops_incomplete_points_and_labels_by_host() -> Result<(), PolarsError> {
        let view = FilteredView::new(df!(
            columns::HOSTNAME => [Some("h1"), Some("h2"), None],
            columns::CPU => [Some(10.0), None, Some(30.0)],
            columns::CPUTEMPF => [Some(110.0), Some(120.0), Some(130.0)],
        )?);
        let spec = &ChartSpec::Scatter {
            title: "CPU Usage vs CPU Temp",
            x: columns::CPU,
            y: columns::CPUTEMPF,
        };
        match chart_data(&view, spec)? {
            Some(ChartData::Scatter { points, .. }) => {
                assert_eq!(
                    points,
                    vec![
                        ScatterPoint {
                            x: 10.0,
                            y: 110.0,
                            host: Some("h1".to_string())
                        },
                        ScatterPoint {
                            x: 30.0,
                            y: 130.0,
                            host: None
                        },
                    ]
                );
            }
            other => panic!("expected scatter, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn catalog_skips_charts_with_absent_columns() -> Result<(), PolarsError> {
        // Only temperature and pressure exist, so only their histograms render.
        let view = FilteredView::new(df!(
            columns::TEMPERATURE => [70.0],
            columns::PRESSURE => [1013.0],
        )?);
        let charts = catalog_charts(&view)?;
        let titles: Vec<&str> = charts.iter().map(|c| c.title()).collect();
        assert_eq!(
            titles,
            vec!["Temperature Distribution", "Pressure Distribution"]
        );
        Ok(())
    }

    #[test]
    fn empty_view_renders_empty_series() -> Result<(), PolarsError> {
        let view = FilteredView::new(df!(
            columns::TEMPERATURE => Vec::<f64>::new(),
            columns::HUMIDITY => Vec::<f64>::new(),
            columns::PRESSURE => Vec::<f64>::new(),
            columns::LUX => Vec::<f64>::new(),
        )?);
        let charts = catalog_charts(&view)?;
        assert_eq!(charts.len(), 4);
        for chart in charts {
            match chart {
                ChartData::Histogram { values, .. } => assert!(values.is_empty()),
                ChartData::Scatter { points, .. } => assert!(points.is_empty()),
            }
        }
        Ok(())
    }
}
