//! HTML output format for comparison tables
//!
//! Emits a single `<table>` element meant to be embedded in CI reports.
//! Benchmark and delta cells get a background color from the classifier
//! verdict when colors are enabled.

use crate::table::{MetricTable, Outcome, Row};

/// HTML output formatter
#[derive(Debug)]
pub struct HtmlOutput {
    colorized: bool,
}

impl HtmlOutput {
    /// Create a new HTML output formatter
    pub fn new(colorized: bool) -> Self {
        Self { colorized }
    }

    /// Escape HTML special characters to prevent XSS
    fn escape_html(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }

    /// `bgcolor` attribute for a row, empty when nothing should be painted
    fn color_attr(&self, outcome: Option<Outcome>) -> &'static str {
        if !self.colorized {
            return "";
        }
        match outcome {
            Some(Outcome::Improved) => " bgcolor='green'",
            Some(Outcome::Regressed) => " bgcolor='red'",
            _ => "",
        }
    }

    fn format_row(&self, row: &Row) -> String {
        let attr = self.color_attr(row.outcome);
        let scaler = row.scaler();

        let mut html = format!("<tr><td{}>{}", attr, Self::escape_html(&row.benchmark));
        for metric in &row.metrics {
            html.push_str("</td><td>");
            html.push_str(&Self::escape_html(&metric.format_mean(&scaler)));
            html.push_str(" ± ");
            html.push_str(&Self::escape_html(&metric.format_diff()));
        }
        html.push_str(&format!(
            "</td><td{}>{} {}</td></tr>\n",
            attr,
            Self::escape_html(&row.delta),
            Self::escape_html(&row.note)
        ));
        html
    }

    fn render_table(&self, table: &MetricTable, html: &mut String) {
        let columns = table.configs.len() + 2;

        html.push_str("<tbody>\n");
        html.push_str(&format!(
            "<tr><th/><th colspan='{}' class='metric'>{}</th><th>delta</th>\n</tr>\n",
            table.configs.len(),
            Self::escape_html(&table.metric)
        ));

        let mut group = "";
        for row in &table.rows {
            if row.group != group {
                group = &row.group;
                html.push_str(&format!(
                    "<tr><th class='group' colspan='{}'>{}</th></tr>\n",
                    columns,
                    Self::escape_html(group)
                ));
            }
            html.push_str(&self.format_row(row));
        }

        html.push_str("</tbody>\n");
    }

    /// Generate the HTML table, empty when there is nothing to show
    pub fn to_html(&self, tables: &[MetricTable]) -> String {
        let Some(first) = tables.first() else {
            return String::new();
        };

        let mut html = String::new();
        if first.is_old_new_delta() {
            html.push_str("<table border='1' class='benchstat oldnew'>\n");
        } else {
            html.push_str("<table border='1' class='benchstat'>\n");
        }

        html.push_str("<tr class='configs'><th/>");
        for config in &first.configs {
            html.push_str(&format!("<th>{}</th>", Self::escape_html(config)));
        }
        html.push_str("</tr>\n");

        for table in tables {
            self.render_table(table, &mut html);
        }

        html.push_str("</table>\n");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Metric;

    fn row(name: &str, group: &str, outcome: Outcome, pct: f64) -> Row {
        let mut row = Row::new(
            name,
            vec![
                Metric::constant(100.0, 5, "ns/op"),
                Metric::constant(100.0 + pct, 5, "ns/op"),
            ],
        )
        .with_group(group)
        .with_pct_delta(pct);
        row.outcome = Some(outcome);
        row
    }

    fn sample_table() -> MetricTable {
        MetricTable::new("time/op", vec!["old".into(), "new".into()]).with_rows(vec![
            row("BenchmarkSlower", "pkg: a", Outcome::Regressed, 50.0),
            row("BenchmarkFaster", "pkg: a", Outcome::Improved, -40.0),
            row("BenchmarkSame", "pkg: b", Outcome::Noise, 0.5),
        ])
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(HtmlOutput::escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(HtmlOutput::escape_html("a&b"), "a&amp;b");
        assert_eq!(HtmlOutput::escape_html("\"test\""), "&quot;test&quot;");
        assert_eq!(HtmlOutput::escape_html("'test'"), "&#39;test&#39;");
    }

    #[test]
    fn test_html_basic_structure() {
        let html = HtmlOutput::new(false).to_html(&[sample_table()]);
        assert!(html.starts_with("<table border='1' class='benchstat oldnew'>\n"));
        assert!(html.contains("<tr class='configs'><th/><th>old</th><th>new</th></tr>"));
        assert!(html.contains("<th colspan='2' class='metric'>time/op</th><th>delta</th>"));
        assert!(html.ends_with("</table>\n"));
    }

    #[test]
    fn test_html_group_rows() {
        let html = HtmlOutput::new(false).to_html(&[sample_table()]);
        assert_eq!(html.matches("class='group'").count(), 2);
        assert!(html.contains("<tr><th class='group' colspan='4'>pkg: a</th></tr>"));
    }

    #[test]
    fn test_html_colors_follow_outcome() {
        let html = HtmlOutput::new(true).to_html(&[sample_table()]);
        assert!(html.contains("<tr><td bgcolor='red'>BenchmarkSlower"));
        assert!(html.contains("<tr><td bgcolor='green'>BenchmarkFaster"));
        assert!(html.contains("<tr><td>BenchmarkSame"));
        assert!(html.contains("<td bgcolor='red'>+50.00% </td>"));
    }

    #[test]
    fn test_html_without_color() {
        let html = HtmlOutput::new(false).to_html(&[sample_table()]);
        assert!(!html.contains("bgcolor"));
    }

    #[test]
    fn test_html_cells() {
        let html = HtmlOutput::new(false).to_html(&[sample_table()]);
        assert!(html.contains("<tr><td>BenchmarkSlower</td><td>100ns ± 0%</td><td>150ns ± 0%</td>"));
    }

    #[test]
    fn test_html_escapes_user_text() {
        let mut table = sample_table();
        table.configs = vec!["<old>".into(), "new&".into()];
        table.rows[0].benchmark = "Benchmark<script>".to_string();
        table.rows[0].note = "p='0.01'".to_string();

        let html = HtmlOutput::new(false).to_html(&[table]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("Benchmark&lt;script&gt;"));
        assert!(html.contains("<th>&lt;old&gt;</th><th>new&amp;</th>"));
        assert!(html.contains("p=&#39;0.01&#39;"));
    }

    #[test]
    fn test_html_empty() {
        assert_eq!(HtmlOutput::new(true).to_html(&[]), "");
    }
}
