//! Table rendering for the environment report.
//!
//! The layout is fixed: four columns of 20/20/25/15 display columns, `+`
//! corners, `|` separators and a dashed rule after the header and after
//! every row block.

use super::wrap::wrap_lines;
use crate::secrets::{is_secret, MASK};

const NAME_WIDTH: usize = 20;
const VALUE_WIDTH: usize = 20;
const DESC_WIDTH: usize = 25;
const EXAMPLE_WIDTH: usize = 15;

const SEPARATOR: &str = "+----------------------+----------------------+---------------------------+-----------------+";

/// Rendering switches for the report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Replace values of secret-looking keys with a mask.
    pub mask_secrets: bool,
}

/// One declared variable as shown in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Full lookup key (`MODULE_VARNAME`).
    pub key: String,
    /// Resolved value, possibly empty.
    pub value: String,
    pub description: String,
    pub example: String,
    /// Marks the name cell with `*`.
    pub required: bool,
    /// Marks the example cell with `*` (the example doubles as the default).
    pub has_default: bool,
}

/// The four-column environment table.
///
/// # Example
///
/// ```
/// use envexist::report::{EnvTable, ReportOptions, TableRow};
///
/// let mut table = EnvTable::new(ReportOptions::default());
/// table.add_row(TableRow {
///     key: "DB_HOST".into(),
///     value: String::new(),
///     description: "database host".into(),
///     example: "localhost".into(),
///     required: true,
///     has_default: false,
/// });
///
/// let output = table.render();
/// assert!(output.contains("|*DB_HOST              |"));
/// ```
#[derive(Debug, Default)]
pub struct EnvTable {
    rows: Vec<TableRow>,
    options: ReportOptions,
}

impl EnvTable {
    /// Create an empty table.
    pub fn new(options: ReportOptions) -> Self {
        Self {
            rows: Vec::new(),
            options,
        }
    }

    /// Append a row; rows render in insertion order.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the header and every row block, each line ending in `\n`.
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(SEPARATOR);
        output.push('\n');
        output.push_str(&format!(
            "| {:<NAME_WIDTH$} | {:<VALUE_WIDTH$} | {:<DESC_WIDTH$} | {:<EXAMPLE_WIDTH$} |\n",
            "Name", "Value", "Description", "Example",
        ));
        output.push_str(SEPARATOR);
        output.push('\n');

        for row in &self.rows {
            self.render_row(row, &mut output);
            output.push_str(SEPARATOR);
            output.push('\n');
        }

        output
    }

    fn render_row(&self, row: &TableRow, output: &mut String) {
        let value = if self.options.mask_secrets && !row.value.is_empty() && is_secret(&row.key)
        {
            MASK
        } else {
            row.value.as_str()
        };

        let mut name = wrap_lines(&row.key, NAME_WIDTH);
        let mut value = wrap_lines(value, VALUE_WIDTH);
        let mut desc = wrap_lines(&row.description, DESC_WIDTH);
        let mut example = wrap_lines(&row.example, EXAMPLE_WIDTH);

        let height = [name.len(), value.len(), desc.len(), example.len()]
            .into_iter()
            .max()
            .unwrap_or(0);

        pad_cell(&mut name, height, NAME_WIDTH);
        pad_cell(&mut value, height, VALUE_WIDTH);
        pad_cell(&mut desc, height, DESC_WIDTH);
        pad_cell(&mut example, height, EXAMPLE_WIDTH);

        for i in 0..height {
            let first = i == 0;
            let required = if first && row.required { '*' } else { ' ' };
            let default = if first && row.has_default { '*' } else { ' ' };
            output.push_str(&format!(
                "|{required}{} | {} | {} |{default}{} |\n",
                name[i], value[i], desc[i], example[i],
            ));
        }
    }
}

/// Fill a wrapped cell with blank lines up to `height`.
fn pad_cell(lines: &mut Vec<String>, height: usize, width: usize) {
    if lines.len() < height {
        lines.resize(height, " ".repeat(width));
    }
}
