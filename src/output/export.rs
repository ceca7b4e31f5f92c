use crate::types::view::FilteredView;
use polars::prelude::{CsvWriter, PolarsError, SerWriter};

pub const EXPORT_FILE_NAME: &str = "weather_data.csv";
pub const EXPORT_CONTENT_TYPE: &str = "text/csv";

/// A downloadable CSV rendering of the current filtered view: UTF-8, header
/// row included, no index column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Serializes the full filtered view (all columns, not the table projection)
/// for the download button.
pub fn export_csv(view: &FilteredView) -> Result<CsvExport, PolarsError> {
    let mut frame = view.frame().clone();
    let mut bytes = Vec::new();
    CsvWriter::new(&mut bytes)
        .include_header(true)
        .finish(&mut frame)?;
    Ok(CsvExport {
        filename: EXPORT_FILE_NAME,
        content_type: EXPORT_CONTENT_TYPE,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::schema::columns;
    use polars::df;

    #[test]
    fn export_is_header_plus_rows() -> Result<(), PolarsError> {
        let view = FilteredView::new(df!(
            columns::HOSTNAME => ["h1"],
            columns::TEMPERATURE => [70.0],
            columns::IPADDRESS => ["10.0.0.1"],
        )?);
        let export = export_csv(&view)?;
        assert_eq!(export.filename, "weather_data.csv");
        assert_eq!(export.content_type, "text/csv");

        let text = String::from_utf8(export.bytes).expect("export must be UTF-8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["HOSTNAME,TEMPERATURE,IPADDRESS", "h1,70.0,10.0.0.1"]);
        Ok(())
    }

    #[test]
    fn empty_view_exports_header_only() -> Result<(), PolarsError> {
        let view = FilteredView::new(df!(
            columns::HOSTNAME => Vec::<String>::new(),
            columns::TEMPERATURE => Vec::<f64>::new(),
        )?);
        let export = export_csv(&view)?;
        let text = String::from_utf8(export.bytes).expect("export must be UTF-8");
        assert_eq!(text.lines().collect::<Vec<_>>(), vec!["HOSTNAME,TEMPERATURE"]);
        Ok(())
    }
}
