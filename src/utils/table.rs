//! Table rendering utilities for CLI outputs.

use super::colors::RESET;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: header.width(),
        }
    }
}

pub struct Row {
    pub cells: Vec<String>,
    /// ANSI prefix applied to the whole line, if any.
    pub color: Option<&'static str>,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    pub separator: String,
}

/// Pad on the right using display width, not byte length.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

impl Table {
    pub fn new(columns: Vec<Column>, separator: &str) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: separator.to_string(),
        }
    }

    pub fn add_row(&mut self, cells: Vec<String>, color: Option<&'static str>) {
        for (col, cell) in self.columns.iter_mut().zip(&cells) {
            col.width = col.width.max(cell.width());
        }
        self.rows.push(Row { cells, color });
    }

    fn total_width(&self) -> usize {
        let widths: usize = self.columns.iter().map(|c| c.width).sum();
        widths + 3 * self.columns.len().saturating_sub(1)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|c| pad_right(&c.header, c.width))
            .collect();
        out.push_str(header.join(" | ").trim_end());
        out.push('\n');
        out.push_str(&self.separator.repeat(self.total_width()));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    pad_right(row.cells.get(i).map(String::as_str).unwrap_or(""), col.width)
                })
                .collect();
            let line = cells.join(" | ");
            match row.color {
                Some(color) => out.push_str(&format!("{color}{}{RESET}", line.trim_end())),
                None => out.push_str(line.trim_end()),
            }
            out.push('\n');
        }

        out
    }
}
