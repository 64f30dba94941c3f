//! Type-directed, size-bounded value rendering.
//!
//! [`ValueFormatter`] dispatches on the runtime variant of a
//! [`Value`]: scalars and short values render canonically, larger
//! collections expand to one element per line, multi-line text is fenced,
//! and tabular data renders in full or summarized by head and tail depending
//! on row count. A final truncation pass applies uniformly to whatever the
//! dispatch produced.
//!
//! Rendering failures (a ragged table row) are caught here and degrade to an
//! error annotation beside the value's canonical representation; `format`
//! never fails.

use std::fmt::Write as _;
use std::ops::Range;

use dotlog_foundation::{Column, Result, Table, Value};

/// Marker appended when a rendered string is cut at the hard character limit.
pub const TRUNCATION_MARKER: &str = "\n... (truncated)";

// =============================================================================
// Options
// =============================================================================

/// Size thresholds for the formatter.
#[derive(Clone, Copy, Debug)]
pub struct FormatOptions {
    /// Row count above which tabular data is summarized by head and tail.
    pub summarize_after: usize,
    /// Rows shown at each edge of a summarized table.
    pub summary_edges: usize,
    /// Hard character limit applied after all type-directed rendering.
    pub hard_limit: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            summarize_after: 10,
            summary_edges: 5,
            hard_limit: 1000,
        }
    }
}

// =============================================================================
// Formatted
// =============================================================================

/// A rendered value plus truncation metadata.
///
/// Produced fresh for every formatted value; never cached or shared.
#[derive(Clone, Debug)]
pub struct Formatted {
    /// The rendered text, truncation marker included if it was cut.
    pub text: String,
    /// Whether the rendering exceeded the hard limit and was cut.
    pub truncated: bool,
    /// Character length of the rendering before truncation.
    pub original_len: usize,
}

// =============================================================================
// Value Formatter
// =============================================================================

/// Renders values to human-readable text, bounded in size.
#[derive(Clone, Debug, Default)]
pub struct ValueFormatter {
    options: FormatOptions,
}

impl ValueFormatter {
    /// Creates a formatter with default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a formatter with the given thresholds.
    #[must_use]
    pub fn with_options(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Builder method to set the hard character limit.
    #[must_use]
    pub fn with_hard_limit(mut self, limit: usize) -> Self {
        self.options.hard_limit = limit;
        self
    }

    /// Returns the formatter's thresholds.
    #[must_use]
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Formats a value.
    ///
    /// Dispatches on the value's runtime variant, then applies the hard
    /// character limit uniformly to the result.
    #[must_use]
    pub fn format(&self, value: &Value) -> Formatted {
        let text = self.render(value);
        let original_len = text.chars().count();
        if original_len > self.options.hard_limit {
            let mut cut: String = text.chars().take(self.options.hard_limit).collect();
            cut.push_str(TRUNCATION_MARKER);
            Formatted {
                text: cut,
                truncated: true,
                original_len,
            }
        } else {
            Formatted {
                text,
                truncated: false,
                original_len,
            }
        }
    }

    fn render(&self, value: &Value) -> String {
        // Tabular data dispatches before the length rule so an empty table
        // renders its marker instead of a shape stub.
        match value {
            Value::Table(table) => self
                .render_table(table)
                .unwrap_or_else(|e| format!("Table (error rendering: {e}): {}", value.repr())),
            Value::Column(column) => self.render_column(column),
            other => match other.length() {
                None | Some(0 | 1) => other.repr(),
                Some(_) => match other {
                    Value::Map(entries) => render_map_block(entries.iter()),
                    Value::List(items) => render_seq_block('[', ']', items.len(), items.iter()),
                    Value::Tuple(items) => render_seq_block('(', ')', items.len(), items.iter()),
                    Value::Set(items) => render_seq_block('{', '}', items.len(), items.iter()),
                    Value::Str(s) if s.contains('\n') => format!("'''\n{s}\n'''"),
                    _ => other.repr(),
                },
            },
        }
    }

    // -------------------------------------------------------------------------
    // Tabular rendering
    // -------------------------------------------------------------------------

    fn render_table(&self, table: &Table) -> Result<String> {
        if table.is_empty() {
            return Ok("Empty Table".to_string());
        }
        let (rows, cols) = table.shape();
        let header = format!("Table (shape: ({rows}, {cols})):");
        let edges = self.options.summary_edges.min(rows);
        // Summarizing only pays off when the edges leave a gap; otherwise
        // render in full (also keeps oversized edge settings in bounds).
        if rows <= self.options.summarize_after || edges * 2 >= rows {
            Ok(format!("{header}\n{}", render_grid(table, 0..rows)?))
        } else {
            Ok(format!(
                "{header}\n{}\n...\n{}",
                render_grid(table, 0..edges)?,
                render_grid(table, rows - edges..rows)?,
            ))
        }
    }

    fn render_column(&self, column: &Column) -> String {
        if column.is_empty() {
            return "Empty Column".to_string();
        }
        let len = column.len();
        let header = match column.name() {
            Some(name) => format!("Column (name: {name}, shape: ({len},)):"),
            None => format!("Column (shape: ({len},)):"),
        };
        let edges = self.options.summary_edges.min(len);
        if len <= self.options.summarize_after || edges * 2 >= len {
            format!("{header}\n{}", render_column_rows(column, 0..len))
        } else {
            format!(
                "{header}\n{}\n...\n{}",
                render_column_rows(column, 0..edges),
                render_column_rows(column, len - edges..len),
            )
        }
    }
}

// =============================================================================
// Block helpers
// =============================================================================

/// Brace-delimited block with one `key: value` pair per line. Keys render in
/// their human form, values canonically; no recursion into block formatting.
fn render_map_block<'a>(entries: impl Iterator<Item = (&'a Value, &'a Value)>) -> String {
    let mut out = String::from("{");
    for (key, value) in entries {
        let _ = write!(out, "\n  {key}: {}", value.repr());
    }
    out.push_str("\n}");
    out
}

/// Delimited block with one element's canonical representation per line,
/// comma-terminated except the last. The bracket style tags the variant.
fn render_seq_block<'a>(
    open: char,
    close: char,
    len: usize,
    items: impl Iterator<Item = &'a Value>,
) -> String {
    let mut out = String::new();
    out.push(open);
    for (i, item) in items.enumerate() {
        let _ = write!(out, "\n  {}", item.repr());
        if i + 1 < len {
            out.push(',');
        }
    }
    out.push('\n');
    out.push(close);
    out
}

/// Renders a contiguous row range of a table as an aligned grid with a row
/// index column and a column-name header line.
fn render_grid(table: &Table, range: Range<usize>) -> Result<String> {
    let columns = table.columns();
    let rows = &table.rows()[range.clone()];

    let mut cells: Vec<Vec<String>> = Vec::with_capacity(rows.len());
    for (offset, row) in rows.iter().enumerate() {
        if row.len() != columns.len() {
            return Err(dotlog_foundation::Error::ragged_row(
                range.start + offset,
                columns.len(),
                row.len(),
            ));
        }
        cells.push(row.iter().map(ToString::to_string).collect());
    }

    let idx_width = range.end.saturating_sub(1).to_string().len();
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 1);
    let mut head = " ".repeat(idx_width);
    for (i, name) in columns.iter().enumerate() {
        let _ = write!(head, "  {name:<width$}", width = widths[i]);
    }
    lines.push(head);
    for (offset, row) in cells.iter().enumerate() {
        let mut line = format!("{index:>idx_width$}", index = range.start + offset);
        for (i, cell) in row.iter().enumerate() {
            let _ = write!(line, "  {cell:<width$}", width = widths[i]);
        }
        lines.push(line);
    }

    Ok(lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Renders a contiguous value range of a column, one indexed value per line.
fn render_column_rows(column: &Column, range: Range<usize>) -> String {
    let idx_width = range.end.saturating_sub(1).to_string().len();
    let values = &column.values()[range.clone()];
    values
        .iter()
        .enumerate()
        .map(|(offset, value)| format!("{index:>idx_width$}  {value}", index = range.start + offset))
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Tests
// =============================================================================
