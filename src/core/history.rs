use std::sync::Arc;

use crate::core::{DataPoint, series_builder::indexed_points};

/// Minimum number of entries needed before a history can be charted.
pub const MIN_CHARTABLE_HISTORY: usize = 2;

/// Append-only record of scalar results for one panel.
///
/// Entries are stored behind a shared slice: `append` and `clear` return a
/// new buffer and never touch the one they were called on, so an older
/// snapshot keeps its content and length.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryBuffer {
    entries: Arc<[f64]>,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self {
            entries: Arc::from(Vec::<f64>::new()),
        }
    }
}

/// Outcome of preparing a history for charting.
#[derive(Debug, Clone, PartialEq)]
pub enum HistorySeries {
    /// Fewer than [`MIN_CHARTABLE_HISTORY`] entries; callers show a placeholder.
    Insufficient { len: usize },
    Ready(Vec<DataPoint>),
}

impl HistoryBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            entries: values.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn append(&self, value: f64) -> Self {
        let entries = self.entries.iter().copied().chain(std::iter::once(value));
        Self {
            entries: entries.collect(),
        }
    }

    #[must_use]
    pub fn clear(&self) -> Self {
        Self::new()
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn latest(&self) -> Option<f64> {
        self.entries.last().copied()
    }

    /// Two-column view of the history with `x` = entry index.
    #[must_use]
    pub fn series(&self) -> HistorySeries {
        if self.entries.len() < MIN_CHARTABLE_HISTORY {
            return HistorySeries::Insufficient {
                len: self.entries.len(),
            };
        }
        HistorySeries::Ready(indexed_points(&self.entries, 0.0))
    }
}
