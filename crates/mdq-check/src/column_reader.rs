//! Column access for checkers.
//!
//! [`ColumnReader`] yields every cell of a column as text, keeping nulls
//! distinct from blank strings so findings can report the original cell.
//! [`ColumnRewrite`] collects per-row replacements and writes the column back
//! only when something changed.
//!
//! # Example
//!
//! ```ignore
//! let reader = ColumnReader::new(df);
//! let mut rewrite = ColumnRewrite::from_reader(&reader, "gender")?;
//! for (idx, value) in reader.values("gender")? {
//!     if value.as_deref() == Some("female") {
//!         rewrite.replace(idx, Some("F".to_string()));
//!     }
//! }
//! rewrite.apply(df)?;
//! ```

use mdq_common::any_to_string;
use polars::prelude::{AnyValue, Column, DataFrame, NamedFrom, Series};

use crate::error::{CheckError, Result};

/// Read-only view over the columns of a table.
#[derive(Debug)]
pub struct ColumnReader<'a> {
    df: &'a DataFrame,
}

impl<'a> ColumnReader<'a> {
    #[inline]
    pub fn new(df: &'a DataFrame) -> Self {
        Self { df }
    }

    /// Get the number of rows in the DataFrame.
    #[inline]
    pub fn height(&self) -> usize {
        self.df.height()
    }

    #[inline]
    pub fn has_column(&self, name: &str) -> bool {
        self.df.column(name).is_ok()
    }

    /// Get a column by name, failing with [`CheckError::ColumnNotFound`].
    pub fn column(&self, name: &str) -> Result<&'a Column> {
        self.df
            .column(name)
            .map_err(|_| CheckError::ColumnNotFound {
                column: name.to_string(),
            })
    }

    /// Cell text at `row_idx`; `None` for null cells and out-of-bounds rows.
    pub fn get(&self, column: &str, row_idx: usize) -> Option<String> {
        let series = self.df.column(column).ok()?;
        cell_text(series.get(row_idx).unwrap_or(AnyValue::Null))
    }

    /// Iterate over `(row_index, cell_text)` pairs of a column.
    pub fn values(&self, column: &str) -> Result<ColumnValueIter<'a>> {
        let column = self.column(column)?;
        Ok(ColumnValueIter {
            column,
            current: 0,
            len: self.df.height(),
        })
    }
}

fn cell_text(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        other => Some(any_to_string(other)),
    }
}

/// Iterator over cell text in a column.
pub struct ColumnValueIter<'a> {
    column: &'a Column,
    current: usize,
    len: usize,
}

impl Iterator for ColumnValueIter<'_> {
    type Item = (usize, Option<String>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.len {
            return None;
        }

        let idx = self.current;
        self.current += 1;

        let value = self.column.get(idx).unwrap_or(AnyValue::Null);
        Some((idx, cell_text(value)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len.saturating_sub(self.current);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ColumnValueIter<'_> {}

/// Pending replacements for one column.
///
/// Starts as a text copy of the column; [`ColumnRewrite::apply`] replaces the
/// column with a String column when at least one cell was replaced and leaves
/// it (and its dtype) untouched otherwise.
#[derive(Debug)]
pub struct ColumnRewrite {
    name: String,
    values: Vec<Option<String>>,
    modified: usize,
}

impl ColumnRewrite {
    pub fn from_reader(reader: &ColumnReader<'_>, column: &str) -> Result<Self> {
        let values = reader.values(column)?.map(|(_, value)| value).collect();
        Ok(Self {
            name: column.to_string(),
            values,
            modified: 0,
        })
    }

    /// Replace the cell at `row_idx`. No-op when the value is unchanged.
    pub fn replace(&mut self, row_idx: usize, value: Option<String>) {
        let Some(slot) = self.values.get_mut(row_idx) else {
            return;
        };
        if *slot != value {
            *slot = value;
            self.modified += 1;
        }
    }

    /// Number of cells replaced so far.
    pub fn modified(&self) -> usize {
        self.modified
    }

    /// Write the column back into `df` if anything changed.
    pub fn apply(self, df: &mut DataFrame) -> Result<usize> {
        if self.modified > 0 {
            let series = Series::new(self.name.as_str().into(), self.values);
            df.with_column(series)?;
        }
        Ok(self.modified)
    }
}
