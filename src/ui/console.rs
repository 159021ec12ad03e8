//! Terminal console
//!
//! Line-oriented input plus the modal [`Prompt`] implementation used by the
//! submission pipeline. Prompts block until answered, matching the modal
//! message boxes of a desktop shell.

use std::io::{self, Write};

use crate::engine::Prompt;

pub struct Console {
    stdin: io::Stdin,
}

impl Console {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }

    /// Print a prompt and read one trimmed line.
    /// Returns `None` once input is closed.
    pub fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.stdin.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    pub fn say(&mut self, text: &str) {
        println!("{text}");
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for Console {
    fn notify(&mut self, title: &str, body: &str) {
        println!("\n=== {title} ===\n{body}");
    }

    fn confirm(&mut self, title: &str, body: &str) -> bool {
        println!("\n=== {title} ===\n{body}");
        loop {
            match self.read_line("[y/n] ") {
                None => return false,
                Some(answer) => match answer.to_lowercase().as_str() {
                    "y" | "yes" => return true,
                    "n" | "no" => return false,
                    _ => continue,
                },
            }
        }
    }
}

/// Render rows as a fixed-width text table with a header rule
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let format_row = |cells: &[String]| {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{cell:<width$}", width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut lines = vec![
        format_row(&header_cells),
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    ];
    lines.extend(rows.iter().map(|row| format_row(row)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_pads_columns() {
        let table = render_table(
            &["Order ID", "Status"],
            &[
                vec!["ORD123".to_string(), "Delivered".to_string()],
                vec!["ORD1".to_string(), "Pending".to_string()],
            ],
        );

        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines[0], "Order ID  Status");
        assert_eq!(lines[1], "--------  ---------");
        assert_eq!(lines[2], "ORD123    Delivered");
        assert_eq!(lines[3], "ORD1      Pending");
    }
}
