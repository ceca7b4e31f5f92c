use crate::types::schema::DISPLAY_COLUMNS;
use crate::types::view::FilteredView;
use polars::prelude::{DataFrame, PolarsError};

/// Projects a filtered view onto the fixed display columns, restricted to
/// those actually present, in display order.
pub fn table_view(view: &FilteredView) -> Result<DataFrame, PolarsError> {
    let present: Vec<&str> = DISPLAY_COLUMNS
        .iter()
        .copied()
        .filter(|&c| view.has_column(c))
        .collect();
    view.frame().select(present)
}
