//! Report rendering: box-drawn tables, JSON and CSV.

use pricer_saccr::SaCcrReport;

use crate::config::OutputFormat;
use crate::{CliError, Result};

/// Renders a report in the requested format.
pub fn render(report: &SaCcrReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).map_err(|e| CliError::Render(e.to_string()))
        }
        OutputFormat::Csv => render_csv(report),
    }
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

/// Minimal box-drawing table.
struct Table {
    title: String,
    headers: Vec<String>,
    align: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// First column left aligned, the rest right aligned.
    fn new(title: &str, headers: &[&str]) -> Self {
        let align = (0..headers.len())
            .map(|i| if i == 0 { Align::Left } else { Align::Right })
            .collect();
        Self {
            title: title.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            align,
            rows: Vec::new(),
        }
    }

    fn left(mut self, column: usize) -> Self {
        if let Some(a) = self.align.get_mut(column) {
            *a = Align::Left;
        }
        self
    }

    fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }
        widths
    }

    fn render(&self) -> String {
        let widths = self.widths();
        let header_align = vec![Align::Left; self.headers.len()];

        let mut out = Vec::with_capacity(self.rows.len() + 5);
        out.push(self.title.clone());
        out.push(rule(&widths, '┌', '┬', '┐'));
        out.push(line(&self.headers, &widths, &header_align));
        out.push(rule(&widths, '├', '┼', '┤'));
        for row in &self.rows {
            out.push(line(row, &widths, &self.align));
        }
        out.push(rule(&widths, '└', '┴', '┘'));
        out.join("\n")
    }
}

fn rule(widths: &[usize], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(&mid.to_string()), right)
}

fn line(cells: &[String], widths: &[usize], align: &[Align]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(align)
        .map(|((cell, &w), align)| match align {
            Align::Left => format!(" {:<w$} ", cell, w = w),
            Align::Right => format!(" {:>w$} ", cell, w = w),
        })
        .collect();
    format!("│{}│", padded.join("│"))
}

fn money(value: f64) -> String {
    format!("{:.2}", value)
}

/// Renders the `INSTRUMENTS` and `FINALISED EAD` tables.
pub fn render_table(report: &SaCcrReport) -> String {
    let mut instruments = Table::new(
        "INSTRUMENTS",
        &[
            "Instrument",
            "Type",
            "Maturity",
            "Bucket",
            "Notional",
            "Pay Leg",
            "Receive Leg",
            "Market Value",
            "Adjusted Notional",
            "Delta",
            "Effective Notional",
        ],
    )
    .left(1)
    .left(5)
    .left(6);

    for m in &report.instruments {
        instruments.push(vec![
            m.id.to_string(),
            m.contract_type.clone(),
            format!("{:.4}", m.maturity),
            m.time_bucket.number().to_string(),
            money(m.notional),
            m.payment_leg.to_string(),
            m.receive_leg.to_string(),
            money(m.mtm_dirty),
            money(m.adjusted_notional),
            format!("{:.6}", m.delta),
            money(m.effective_notional),
        ]);
    }

    let mut summary = Table::new("FINALISED EAD", &["Metric", "Value"]);
    summary.push(vec!["Replacement Cost".to_string(), money(report.replacement_cost)]);
    for set in &report.hedging_sets {
        summary.push(vec![
            format!("Effective Notional ({})", set.currency),
            money(set.notional),
        ]);
    }
    summary.push(vec!["AddOn".to_string(), money(report.add_on)]);
    summary.push(vec!["EAD".to_string(), money(report.ead)]);

    format!(
        "{}\n{}\n\n{}\n",
        report.label,
        instruments.render(),
        summary.render()
    )
}

/// Renders instrument rows followed by a `metric,currency,value` summary section.
pub fn render_csv(report: &SaCcrReport) -> Result<String> {
    let to_render = |e: csv::Error| CliError::Render(e.to_string());

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    for metrics in &report.instruments {
        writer.serialize(metrics).map_err(to_render)?;
    }

    let summary_rows = std::iter::once(("replacement_cost", "", report.replacement_cost))
        .chain(
            report
                .hedging_sets
                .iter()
                .map(|set| ("effective_notional", set.currency.as_str(), set.notional)),
        )
        .chain([("add_on", "", report.add_on), ("ead", "", report.ead)]);

    writer
        .write_record(["metric", "currency", "value"])
        .map_err(to_render)?;
    for (metric, currency, value) in summary_rows {
        let value = value.to_string();
        writer
            .write_record([metric, currency, value.as_str()])
            .map_err(to_render)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::Render(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CliError::Render(e.to_string()))
}
