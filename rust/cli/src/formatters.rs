//! Plain-text table and number formatting for terminal display.
//!
//! Tables are rendered as markdown so they read well in a terminal and can be
//! pasted straight into a chat or forum post.
//!
//! ## Example
//!
//! ```rust
//! use grandprix_cli::formatters::Table;
//!
//! let mut table = Table::new(["ID", "Name"]);
//! table.push_row(["1", "Ada"]);
//! let text = table.render();
//! assert!(text.contains("| ID | Name |"));
//! assert!(text.contains("| 1  | Ada  |"));
//! ```

/// A markdown table with an optional title line.
#[derive(Debug, Clone, Default)]
pub struct Table {
    title: Option<String>,
    heading: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(heading: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: None,
            heading: heading.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn render(&self) -> String {
        let columns = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.heading.len()))
            .max()
            .unwrap_or(0);
        let mut widths = vec![0usize; columns];
        for row in std::iter::once(&self.heading).chain(self.rows.iter()) {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut out = String::new();
        if let Some(title) = &self.title {
            out.push_str(&format!("**{}**\n\n", title));
        }
        out.push_str(&render_row(&self.heading, &widths));
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat((*w).max(1))).collect();
        out.push_str(&render_row(&rule, &widths));
        for row in &self.rows {
            out.push_str(&render_row(row, &widths));
        }
        out
    }
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            format!("{:<width$}", cell, width = *w)
        })
        .collect();
    format!("| {} |\n", padded.join(" | "))
}

/// Formats a score without trailing zeros: `1`, `1.5`, `0.667`.
pub fn format_number(value: f64) -> String {
    let rounded = format!("{:.3}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
