use polars::error::PolarsError;
use thiserror::Error;

/// Any failure while fetching a snapshot from the warehouse. Every variant is
/// a flavor of "data unavailable": the render pass halts on it and nothing
/// downstream runs.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Result download or decompression failed")]
    DownloadIo(#[from] std::io::Error),

    #[error("I/O error processing CSV result for table '{table}'")]
    CsvReadIo {
        table: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parsing error processing CSV result for table '{table}'")]
    CsvReadPolars {
        table: String,
        #[source]
        source: PolarsError,
    },

    #[error("Required column '{column}' missing from table '{table}'")]
    MissingColumn { table: String, column: String },

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
