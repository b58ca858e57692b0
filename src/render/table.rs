//! Markdown table rendering.
//!
//! Columns are not padded to a common width: every cell gets the same fixed
//! padding, so the table stays valid markdown while each line keeps the
//! natural width of its own cells.

use crate::describe::DescriptorRow;
use serde::Deserialize;
use unicode_width::UnicodeWidthStr;

/// Markdown needs at least three dashes per rule cell.
const MIN_RULE_WIDTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    /// Written at the start and end of every line and between cells.
    pub delimiter: String,
    /// Written on both sides of every cell.
    pub padding: String,
    /// Fill for the rule line under the header.
    pub rule: String,
    pub line_break: String,
}

impl TableStyle {
    pub fn markdown() -> Self {
        Self {
            delimiter: "|".to_string(),
            padding: " ".to_string(),
            rule: "-".to_string(),
            line_break: "\n".to_string(),
        }
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        Self::markdown()
    }
}

/// Render descriptor rows under `header`.
pub fn render<S: AsRef<str>>(header: &[S], rows: &[DescriptorRow], style: &TableStyle) -> String {
    let cells: Vec<Vec<String>> = rows.iter().map(|row| row.cells().to_vec()).collect();
    render_matrix(header, &cells, style)
}

/// Render arbitrary rows of cells. Rows may have a different cell count than
/// the header; each is written as-is.
pub fn render_matrix<H: AsRef<str>>(
    header: &[H],
    rows: &[Vec<String>],
    style: &TableStyle,
) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_line(header.iter().map(|cell| cell.as_ref()), style));

    let rule: Vec<String> = header
        .iter()
        .map(|cell| style.rule.repeat(UnicodeWidthStr::width(cell.as_ref()).max(MIN_RULE_WIDTH)))
        .collect();
    lines.push(render_line(rule.iter().map(String::as_str), style));

    for row in rows {
        lines.push(render_line(row.iter().map(String::as_str), style));
    }

    lines.join(&style.line_break)
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, style: &TableStyle) -> String {
    let mut line = style.delimiter.clone();
    for cell in cells {
        line.push_str(&style.padding);
        line.push_str(cell);
        line.push_str(&style.padding);
        line.push_str(&style.delimiter);
    }
    line
}
