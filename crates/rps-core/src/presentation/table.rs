//! Plain-text table rendering for the rules screen.

use crate::games::RulesTable;

/// Turns table data into printable text
pub trait TableRenderer {
    fn render(&self, table: &RulesTable) -> String;
}

/// Bordered table with left-justified, padded columns
#[derive(Clone, Copy, Debug, Default)]
pub struct AsciiTable;

impl AsciiTable {
    fn widths(table: &RulesTable) -> Vec<usize> {
        (0..table.column_count())
            .map(|c| {
                std::iter::once(&table.header)
                    .chain(&table.rows)
                    .filter_map(|row| row.get(c))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn border(widths: &[usize]) -> String {
        let mut line = String::from("+");
        for w in widths {
            line.push_str(&"-".repeat(w + 2));
            line.push('+');
        }
        line
    }

    fn line(cells: &[String], widths: &[usize]) -> String {
        let mut line = String::from("|");
        for (c, &w) in widths.iter().enumerate() {
            let cell = cells.get(c).map(String::as_str).unwrap_or("");
            line.push_str(&format!(" {cell:<w$} |"));
        }
        line
    }
}

impl TableRenderer for AsciiTable {
    fn render(&self, table: &RulesTable) -> String {
        let widths = Self::widths(table);
        let border = Self::border(&widths);
        let mut lines = vec![border.clone(), Self::line(&table.header, &widths), border.clone()];
        lines.extend(table.rows.iter().map(|row| Self::line(row, &widths)));
        lines.push(border);
        lines.join("\n")
    }
}
