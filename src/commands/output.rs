//! Presentation helpers for command output.
//!
//! All rounding and colour-coding lives here: the engine returns full
//! precision, and styling is a pure function of already-computed values
//! (suitability tag, sign of savings).

use console::{measure_text_width, pad_str, style, Alignment};

use crate::model::Suitability;

/// Format a plain numeric value to 2 decimals for display.
pub fn fmt_value(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format a monetary value with the site currency symbol.
pub fn fmt_money(value: f64, currency: &str) -> String {
    if value < 0.0 {
        format!("-{}{:.2}", currency, -value)
    } else {
        format!("{}{:.2}", currency, value)
    }
}

/// Styled suitability cell: green OKAY, red NOT SUITABLE.
pub fn suitability_cell(suitability: Suitability) -> String {
    match suitability {
        Suitability::Okay => style(suitability.to_string()).green().bold().to_string(),
        Suitability::NotSuitable => style(suitability.to_string()).red().bold().to_string(),
    }
}

/// Styled savings cell: green when the baseline saves money, red when
/// the comparison lamp is the cheaper one. The value itself stays
/// unclamped and signed; the currency symbol lives in the column header.
pub fn savings_cell(value: f64) -> String {
    let text = fmt_value(value);
    if value >= 0.0 {
        style(text).green().to_string()
    } else {
        style(text).red().to_string()
    }
}

/// Simple left-aligned column table for terminal output.
///
/// Widths are computed with [`measure_text_width`] so styled (ANSI)
/// cells line up with plain ones.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        debug_assert_eq!(cells.len(), self.headers.len());
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Print the table with a bold header line and dashed separator.
    pub fn print(&self) {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| measure_text_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(measure_text_width(cell));
            }
        }

        let header_line: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, &w)| {
                style(pad_str(h, w, Alignment::Left, None).to_string())
                    .bold()
                    .to_string()
            })
            .collect();
        println!("  {}", header_line.join("  "));

        let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
        println!("  {}", "-".repeat(total));

        for row in &self.rows {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| pad_str(cell, w, Alignment::Left, None).to_string())
                .collect();
            println!("  {}", line.join("  "));
        }
    }
}

/// Print a section heading.
pub fn section(title: &str) {
    println!("\n{} {}", style("→").cyan(), style(title).bold());
    println!();
}
