//! demos/graph_charts.rs
//!
//! Renders the dashboard's chart catalog with `plotlars` against a live
//! warehouse endpoint.
//!
//! To run this demo:
//! cargo run --example graph_charts --features demos

use plotlars::{Histogram, Plot, ScatterPlot, Text};
use std::error::Error;
use weatherboard::{apply_filters, columns, Dashboard, FilterParams};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let base_url =
        std::env::var("WAREHOUSE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

    let dashboard = Dashboard::connect().base_url(base_url).call();
    let snapshot = dashboard.snapshot().await?;
    let view = apply_filters(&snapshot, &FilterParams::default())?;
    let frame = view.frame();

    Histogram::builder()
        .data(frame)
        .x(columns::TEMPERATURE)
        .plot_title(Text::from("Temperature Distribution"))
        .build()
        .plot();

    if view.has_column(columns::CPU) && view.has_column(columns::CPUTEMPF) {
        ScatterPlot::builder()
            .data(frame)
            .x(columns::CPU)
            .y(columns::CPUTEMPF)
            .group(columns::HOSTNAME)
            .plot_title(Text::from("CPU Usage vs CPU Temp"))
            .build()
            .plot();
    }

    Ok(())
}
