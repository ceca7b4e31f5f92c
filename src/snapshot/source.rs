use crate::snapshot::cache::FetchSnapshot;
use crate::snapshot::error::SnapshotError;
use crate::types::schema::REQUIRED_COLUMNS;
use crate::types::snapshot::Snapshot;
use async_compression::tokio::bufread::GzipDecoder;
use chrono::Utc;
use futures_util::TryStreamExt;
use log::{info, warn};
use polars::frame::DataFrame;
use polars::prelude::*;
use reqwest::Client;
use std::io::Write;
use tempfile::NamedTempFile;
use tokio::io::AsyncReadExt;
use tokio::task;
use tokio_util::io::StreamReader;

/// Queries the warehouse's SQL-over-HTTP endpoint for the full sensor table.
///
/// One statement is ever issued: `SELECT * FROM <table>`. The endpoint
/// returns the result set as gzip-compressed CSV with a header row.
pub struct WarehouseClient {
    base_url: String,
    table: String,
    client: Client,
}

impl WarehouseClient {
    pub fn new(base_url: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            table: table.into(),
            client: Client::new(),
        }
    }

    /// The fully qualified table this client queries.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Runs the statement and collects the decompressed CSV bytes.
    async fn query(&self) -> Result<Vec<u8>, SnapshotError> {
        let url = format!("{}/query", self.base_url.trim_end_matches('/'));
        let statement = format!("SELECT * FROM {}", self.table);
        info!("Querying {} for table {}", url, self.table);

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({
                "statement": statement,
                "format": "csv+gzip",
            }))
            .send()
            .await
            .map_err(|e| SnapshotError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    SnapshotError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    SnapshotError::NetworkRequest(url, e)
                });
            }
        };

        let stream = response
            .bytes_stream()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e));
        let stream_reader = StreamReader::new(stream);
        let mut decoder = GzipDecoder::new(stream_reader);
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed).await?;
        info!(
            "Downloaded and decompressed {} bytes for table {}",
            decompressed.len(),
            self.table
        );
        Ok(decompressed)
    }

    /// Parses raw CSV bytes (header row included) into a DataFrame using a
    /// blocking task. Timestamp-looking columns are parsed as datetimes.
    async fn csv_to_dataframe(bytes: Vec<u8>, table: &str) -> Result<DataFrame, SnapshotError> {
        let table_owned = table.to_string();

        task::spawn_blocking(move || {
            let mut temp_file = NamedTempFile::new().map_err(|e| SnapshotError::CsvReadIo {
                table: table_owned.clone(),
                source: e,
            })?;
            temp_file
                .write_all(&bytes)
                .map_err(|e| SnapshotError::CsvReadIo {
                    table: table_owned.clone(),
                    source: e,
                })?;
            temp_file.flush().map_err(|e| SnapshotError::CsvReadIo {
                table: table_owned.clone(),
                source: e,
            })?;

            let df = CsvReadOptions::default()
                .with_has_header(true)
                .with_parse_options(CsvParseOptions::default().with_try_parse_dates(true))
                .try_into_reader_with_file_path(Some(temp_file.path().to_path_buf()))
                .map_err(|e| SnapshotError::CsvReadPolars {
                    table: table_owned.clone(),
                    source: e,
                })?
                .finish()
                .map_err(|e| SnapshotError::CsvReadPolars {
                    table: table_owned,
                    source: e,
                })?;

            Ok(df)
        })
        .await?
    }

    /// The optional columns may come and go between deployments; these may
    /// not. A violation here reads the same as a missing table downstream.
    fn ensure_required_columns(df: &DataFrame, table: &str) -> Result<(), SnapshotError> {
        for column in REQUIRED_COLUMNS {
            let present = df
                .get_column_names()
                .iter()
                .any(|c| c.as_str() == column);
            if !present {
                warn!("Table {} is missing required column {}", table, column);
                return Err(SnapshotError::MissingColumn {
                    table: table.to_string(),
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl FetchSnapshot for WarehouseClient {
    async fn fetch_snapshot(&self) -> Result<Snapshot, SnapshotError> {
        let bytes = self.query().await?;
        let df = Self::csv_to_dataframe(bytes, &self.table).await?;
        Self::ensure_required_columns(&df, &self.table)?;
        Ok(Snapshot::new(df, Utc::now()))
    }
}
