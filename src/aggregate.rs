use crate::types::schema::columns;
use crate::types::view::FilteredView;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Scalar summary statistics over a filtered view, one per metric widget.
///
/// `None` encodes the "N/A" state: the view was empty, or every value in the
/// column was null. Nulls never contribute to a mean and never count toward
/// its denominator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub avg_temperature: Option<f64>,
    pub avg_humidity: Option<f64>,
    pub avg_pressure: Option<f64>,
    pub record_count: usize,
}

/// Computes the metric-widget values for a filtered view.
pub fn summarize(view: &FilteredView) -> Result<Summary, PolarsError> {
    Ok(Summary {
        avg_temperature: column_mean(view.frame(), columns::TEMPERATURE)?,
        avg_humidity: column_mean(view.frame(), columns::HUMIDITY)?,
        avg_pressure: column_mean(view.frame(), columns::PRESSURE)?,
        record_count: view.height(),
    })
}

// Cast first so integer-typed CSV columns still average as floats.
fn column_mean(frame: &DataFrame, name: &str) -> Result<Option<f64>, PolarsError> {
    let values = frame.column(name)?.cast(&DataType::Float64)?;
    Ok(values.f64()?.mean())
}
