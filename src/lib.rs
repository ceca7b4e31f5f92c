mod aggregate;
mod dashboard;
mod error;
mod filtering;
mod output;
mod snapshot;
mod types;

pub use error::WeatherboardError;
pub use dashboard::*;

pub use aggregate::{summarize, Summary};
pub use filtering::{apply_filters, FilterParams, SensorFrameFilterExt};

pub use output::charts::{
    catalog_charts, chart_data, ChartData, ChartSpec, ScatterPoint, CHART_CATALOG, HISTOGRAM_BINS,
};
pub use output::export::{export_csv, CsvExport, EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME};
pub use output::table::table_view;

pub use snapshot::cache::{FetchSnapshot, SnapshotCache, SNAPSHOT_TTL};
pub use snapshot::error::SnapshotError;
pub use snapshot::source::WarehouseClient;

pub use types::schema::{
    columns, DEFAULT_TABLE, DEFAULT_TEMPERATURE_BOUNDS, DISPLAY_COLUMNS, REQUIRED_COLUMNS,
};
pub use types::snapshot::Snapshot;
pub use types::view::FilteredView;
