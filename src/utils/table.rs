//! Table rendering utilities for CLI outputs.
//! Widths are measured in terminal columns so that names in non-Latin
//! scripts still line up.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Widen columns so that every cell fits.
    pub fn fit(&mut self) {
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(col) = self.columns.get_mut(i) {
                    col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
                }
            }
        }
    }

    pub fn render(&self, separator: char) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&separator.to_string().repeat(total));
        out.push('\n');

        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad(cell, col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_widens_to_content() {
        let mut t = Table::new(vec![Column::new("ID", 2), Column::new("Name", 4)]);
        t.add_row(vec!["1".into(), "Muhammad Ali".into()]);
        t.fit();
        assert_eq!(t.columns[1].width, 12);

        let out = t.render('-');
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("1  Muhammad Ali"));
    }
}
