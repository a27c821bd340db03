use colored::Colorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::AnnotationReport;
use crate::annotation::record::{ErrorRecord, RecordDetail};

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Tag")]
    tag: &'static str,
    #[tabled(rename = "Detail")]
    detail: String,
    #[tabled(rename = "Context")]
    context: String,
}

impl From<&ErrorRecord> for RecordRow {
    fn from(record: &ErrorRecord) -> Self {
        let detail = match &record.detail {
            RecordDetail::Node { value: Some(value) } => value.clone(),
            RecordDetail::Node { value: None } => String::from("-"),
            RecordDetail::Update { current, new } => format!("{} -> {}", current, new),
        };
        Self {
            tag: record.tag.as_str(),
            detail,
            context: record.context.clone(),
        }
    }
}

/// Render a report as a table of low-level records followed by the labels.
///
/// `show_records` controls whether the low-level table is included.
pub fn pretty_print_report(report: &AnnotationReport, show_records: bool) -> String {
    let mut out = String::new();

    if show_records && !report.annotation.records.is_empty() {
        let rows: Vec<RecordRow> = report.annotation.records.iter().map(RecordRow::from).collect();
        out.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        out.push('\n');
    }

    for label in &report.annotation.labels {
        out.push_str(&format!("{} {}\n", "✗".red(), label.as_str().bold()));
    }

    out.push_str(&summary_line(report));
    out
}

fn summary_line(report: &AnnotationReport) -> String {
    if report.has_errors() {
        format!(
            "{}: {} label(s) from {} record(s)",
            report.source,
            report.label_count(),
            report.record_count()
        )
        .red()
        .to_string()
    } else {
        format!("{}: no errors found", report.source).green().to_string()
    }
}
