//! Text and markup views of a decision matrix.
//!
//! The text view is a right-justified fixed-width table:
//!
//! ```text
//!    C0[▼ 0.1] C1[▲ 0.2] C2[▼ 0.3]
//! A0         1         2         3
//! A1         4         5         6
//! A2         7         8         9
//! [3 Alternatives x 3 Criteria]
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Dtype;

use super::DecisionMatrix;

/// Options controlling number formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Maximum number of decimals shown for float values.
    pub float_precision: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { float_precision: 6 }
    }
}

/// Formats floats with a shared number of decimals: the fewest (at least one)
/// that loses nothing at `precision`.
pub(crate) fn format_floats(values: &[f64], precision: usize) -> Vec<String> {
    let decimals = if precision == 0 {
        0
    } else {
        values
            .iter()
            .filter(|v| v.is_finite())
            .map(|v| {
                let s = format!("{:.*}", precision, v);
                let trailing = s.chars().rev().take_while(|c| *c == '0').count();
                precision - trailing.min(precision)
            })
            .max()
            .unwrap_or(0)
            .max(1)
    };

    values
        .iter()
        .map(|v| format_float(*v, decimals))
        .collect()
}

fn format_float(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// Formats one column according to its dtype.
pub(crate) fn format_values(values: &[f64], dtype: Dtype, precision: usize) -> Vec<String> {
    match dtype {
        Dtype::Int64 => values
            .iter()
            .map(|v| {
                if fits_i64(*v) {
                    format!("{}", *v as i64)
                } else {
                    format_float(*v, 0)
                }
            })
            .collect(),
        Dtype::Float64 => format_floats(values, precision),
    }
}

/// True when the value converts to `i64` without saturating.
pub(crate) fn fits_i64(value: f64) -> bool {
    // 2^63 is exact in f64; i64::MAX is not.
    const BOUND: f64 = 9_223_372_036_854_775_808.0;
    value.is_finite() && (-BOUND..BOUND).contains(&value)
}

/// Reserves a leading sign slot and right-justifies to a common width.
pub(crate) fn sign_pad(values: Vec<String>) -> Vec<String> {
    let padded: Vec<String> = values
        .into_iter()
        .map(|s| if s.starts_with('-') { s } else { format!(" {}", s) })
        .collect();
    let width = padded.iter().map(|s| s.chars().count()).max().unwrap_or(0);
    padded
        .into_iter()
        .map(|s| format!("{:>width$}", s, width = width))
        .collect()
}

/// Column headers combining criterion name, objective glyph and weight.
pub(crate) fn cow_headers(dm: &DecisionMatrix, options: &RenderOptions) -> Vec<String> {
    let weights = sign_pad(format_floats(dm.weights(), options.float_precision));
    dm.cnames()
        .iter()
        .zip(dm.objectives())
        .zip(weights)
        .map(|((name, objective), weight)| format!("{}[{}{}]", name, objective.glyph(), weight))
        .collect()
}

/// The "A Alternatives x C Criteria" footer.
pub(crate) fn dimensions(dm: &DecisionMatrix) -> String {
    let (a_number, c_number) = dm.shape();
    format!("{} Alternatives x {} Criteria", a_number, c_number)
}

/// Cell strings per column, in column-major order.
fn formatted_columns(dm: &DecisionMatrix, options: &RenderOptions) -> Vec<Vec<String>> {
    dm.mtx()
        .columns()
        .into_iter()
        .zip(dm.dtypes())
        .map(|(column, dtype)| format_values(&column.to_vec(), *dtype, options.float_precision))
        .collect()
}

/// Lays out a labelled grid: left-justified index, right-justified columns
/// separated by one space.
pub(crate) fn layout(headers: &[String], labels: &[String], columns: &[Vec<String>]) -> Vec<String> {
    let index_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let widths: Vec<usize> = headers
        .iter()
        .zip(columns)
        .map(|(header, cells)| {
            cells
                .iter()
                .map(|c| c.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(labels.len() + 1);

    let mut header_line = " ".repeat(index_width);
    for (header, width) in headers.iter().zip(&widths) {
        header_line.push_str(&format!(" {:>width$}", header, width = *width));
    }
    lines.push(header_line);

    for (row, label) in labels.iter().enumerate() {
        let mut line = format!("{:<width$}", label, width = index_width);
        for (cells, width) in columns.iter().zip(&widths) {
            let cell = cells.get(row).map(String::as_str).unwrap_or("");
            line.push_str(&format!(" {:>width$}", cell, width = *width));
        }
        lines.push(line);
    }

    lines
}

/// Renders the fixed-width text view.
pub fn render_text(dm: &DecisionMatrix, options: &RenderOptions) -> String {
    let headers = cow_headers(dm, options);
    let columns: Vec<Vec<String>> = formatted_columns(dm, options)
        .into_iter()
        .map(sign_pad)
        .collect();

    let mut lines = layout(&headers, dm.anames(), &columns);
    lines.push(format!("[{}]", dimensions(dm)));
    lines.join("\n")
}

/// Renders the minimal table markup view.
pub fn render_html(dm: &DecisionMatrix, options: &RenderOptions) -> String {
    let headers = cow_headers(dm, options);
    let columns = formatted_columns(dm, options);

    let mut html = String::new();
    html.push_str("<div class='decisionmatrix'>\n");
    html.push_str("<table>\n<thead>\n<tr>\n<th></th>\n");
    for header in &headers {
        html.push_str(&format!("<th>{}</th>\n", escape(header)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for (row, label) in dm.anames().iter().enumerate() {
        html.push_str(&format!("<tr>\n<th>{}</th>\n", escape(label)));
        for cells in &columns {
            let cell = cells.get(row).map(String::as_str).unwrap_or("");
            html.push_str(&format!("<td>{}</td>\n", cell));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n");
    html.push_str(&format!(
        "<em class='decisionmatrix-dim'>{}</em>\n",
        dimensions(dm)
    ));
    html.push_str("</div>");
    html
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
