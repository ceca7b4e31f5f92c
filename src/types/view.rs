//! The `FilteredView` type: the subset of a snapshot that survived the
//! currently active filters.

use polars::prelude::DataFrame;

/// A read-only view over the rows of a snapshot that passed every active
/// filter predicate, in original row order.
///
/// Views are recomputed from scratch by [`crate::apply_filters`] on every
/// render pass, never persisted, and discarded after the pass's outputs
/// (summary, charts, table, export) have been derived. Zero rows is a valid
/// state; downstream consumers render "N/A" rather than failing.
#[derive(Debug, Clone)]
pub struct FilteredView {
    frame: DataFrame,
}

impl FilteredView {
    pub(crate) fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.frame
            .get_column_names()
            .iter()
            .any(|c| c.as_str() == name)
    }
}
