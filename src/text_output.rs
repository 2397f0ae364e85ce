//! Plain-text output format for comparison tables
//!
//! Column-aligned layout shared by every table in the run, with the delta
//! column optionally painted with ANSI colors from the classifier verdict.

use crate::table::{MetricTable, Outcome, Row, NEUTRAL_DELTA};
use std::fmt::Write as _;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// ANSI color for a classifier verdict
pub fn ansi_color(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Improved => GREEN,
        Outcome::Regressed => RED,
        Outcome::Noise | Outcome::Ambiguous => YELLOW,
    }
}

/// One printed line before alignment
#[derive(Debug)]
struct TextLine {
    cols: Vec<String>,
    /// Column holding the delta, painted when colors are on
    delta_col: Option<usize>,
    outcome: Option<Outcome>,
}

impl TextLine {
    fn plain(cols: Vec<String>) -> Self {
        Self {
            cols,
            delta_col: None,
            outcome: None,
        }
    }
}

/// Plain-text output formatter
#[derive(Debug)]
pub struct TextOutput {
    colorized: bool,
}

impl TextOutput {
    /// Create a new text formatter
    pub fn new(colorized: bool) -> Self {
        Self { colorized }
    }

    fn header(table: &MetricTable) -> TextLine {
        let cols = if table.is_old_new_delta() && table.configs.len() == 2 {
            vec![
                "name".to_string(),
                format!("{} {}", table.configs[0], table.metric),
                format!("{} {}", table.configs[1], table.metric),
                "delta".to_string(),
            ]
        } else if table.configs.len() == 1 {
            vec!["name".to_string(), table.metric.clone()]
        } else {
            let mut cols = vec![format!("name \\ {}", table.metric)];
            cols.extend(table.configs.iter().cloned());
            cols
        };
        TextLine::plain(cols)
    }

    fn data_line(table: &MetricTable, row: &Row) -> TextLine {
        let scaler = row.scaler();
        let mut cols = vec![row.benchmark.clone()];
        cols.extend(row.metrics.iter().map(|m| m.format(&scaler)));

        if !table.is_old_new_delta() {
            return TextLine::plain(cols);
        }

        // Keep "~" visually aligned with the "%" of signed deltas
        let delta = if row.delta == NEUTRAL_DELTA {
            format!("{}   ", NEUTRAL_DELTA)
        } else {
            row.delta.clone()
        };
        let delta_col = cols.len();
        cols.push(delta);
        cols.push(row.note.clone());

        TextLine {
            cols,
            delta_col: Some(delta_col),
            outcome: row.outcome,
        }
    }

    fn lines(table: &MetricTable) -> Vec<TextLine> {
        let mut lines = vec![Self::header(table)];
        let mut group = "";
        for row in &table.rows {
            if row.group != group {
                group = &row.group;
                lines.push(TextLine::plain(vec![group.to_string()]));
            }
            lines.push(Self::data_line(table, row));
        }
        lines
    }

    /// Right-align `text` in `width` chars, painting only the text itself
    fn paint(&self, text: &str, width: usize, outcome: Option<Outcome>) -> String {
        let pad = " ".repeat(width.saturating_sub(text.chars().count()));
        match outcome {
            Some(outcome) if self.colorized => {
                format!("{}{}{}{}", pad, ansi_color(outcome), text, RESET)
            }
            _ => format!("{}{}", pad, text),
        }
    }

    /// Render all tables as aligned text
    pub fn render(&self, tables: &[MetricTable]) -> String {
        let tables: Vec<Vec<TextLine>> = tables.iter().map(Self::lines).collect();

        let mut widths: Vec<usize> = Vec::new();
        for line in tables.iter().flatten() {
            if line.cols.len() == 1 {
                continue;
            }
            if widths.len() < line.cols.len() {
                widths.resize(line.cols.len(), 0);
            }
            for (i, col) in line.cols.iter().enumerate() {
                widths[i] = widths[i].max(col.chars().count());
            }
        }

        let width = |i: usize| widths.get(i).copied().unwrap_or(0);

        let mut out = String::new();
        for (t, lines) in tables.iter().enumerate() {
            if t > 0 {
                out.push('\n');
            }
            let Some((header, data)) = lines.split_first() else {
                continue;
            };

            let mut line = String::new();
            let last = header.cols.len() - 1;
            for (i, col) in header.cols.iter().enumerate() {
                if i == 0 {
                    let _ = write!(line, "{:<w$}", col, w = width(0));
                } else if i == last {
                    let _ = write!(line, "  {}", col);
                } else {
                    let _ = write!(line, "  {:<w$}", col, w = width(i));
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');

            for text in data {
                let mut line = String::new();
                let last = text.cols.len() - 1;
                for (i, col) in text.cols.iter().enumerate() {
                    if text.cols.len() == 1 {
                        line.push_str(col);
                    } else if i == 0 {
                        let _ = write!(line, "{:<w$}", col, w = width(0));
                    } else if i == last && col.starts_with('(') {
                        // Notes such as "(p=0.008 n=5+5)" stay left-aligned
                        let _ = write!(line, "  {}", col);
                    } else {
                        let outcome = if text.delta_col == Some(i) {
                            text.outcome
                        } else {
                            None
                        };
                        line.push_str("  ");
                        line.push_str(&self.paint(col, width(i), outcome));
                    }
                }
                out.push_str(line.trim_end());
                out.push('\n');
            }
        }

        out
    }
}
