//! Labeled tabular data.
//!
//! [`Table`] is a two-dimensional labeled table (named columns, rows of
//! values); [`Column`] is a single labeled column. These are the tabular
//! capability of the formatter: small tables render in full, large ones are
//! summarized by their head and tail.

use crate::value::Value;

// =============================================================================
// Table
// =============================================================================

/// A two-dimensional labeled table.
///
/// Rows are stored as plain vectors of [`Value`]; a row whose arity differs
/// from the column count is representable but fails rendering (the formatter
/// degrades it to an error annotation rather than propagating).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Creates an empty table with the given column names.
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Builder method to append a row.
    #[must_use]
    pub fn with_row<I>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.push_row(row);
        self
    }

    /// Appends a row.
    pub fn push_row<I>(&mut self, row: I)
    where
        I: IntoIterator<Item = Value>,
    {
        self.rows.push(row.into_iter().collect());
    }

    /// Returns the column names.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Column
// =============================================================================

/// A single labeled column of values.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Column {
    name: Option<String>,
    values: Vec<Value>,
}

impl Column {
    /// Creates an empty unnamed column.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a named column from an iterator of values.
    #[must_use]
    pub fn named<I>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self {
            name: Some(name.into()),
            values: values.into_iter().collect(),
        }
    }

    /// Creates an unnamed column from an iterator of values.
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self {
            name: None,
            values: values.into_iter().collect(),
        }
    }

    /// Returns the column name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the values.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
