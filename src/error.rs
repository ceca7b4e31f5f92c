use crate::snapshot::error::SnapshotError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherboardError {
    /// The snapshot could not be fetched; the render pass halts and nothing
    /// downstream of the load step runs.
    #[error(transparent)]
    DataUnavailable(#[from] SnapshotError),

    #[error("Failed processing DataFrame: {0}")]
    Polars(#[from] PolarsError),
}
