use std::io::Write;

use ast_error_detection::annotation::reports::AnnotationReport;
use ast_error_detection::annotation::reports::pretty_print::pretty_print_report;
use ast_error_detection::{EditKind, EditOperation, Error, ErrorAnnotator};
use ast_error_detection_utils::{EditMarker, PathTree};
use clap::ValueEnum;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The annotation as JSON, records in wire form
    #[default]
    Json,
    /// A table of records followed by the labels
    Table,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Prepend the edit script drawn as a path tree
    pub tree: bool,
}

/// Annotate an edit script and render the result. Returns the report along
/// with its rendering so the caller can pick the exit code.
pub fn process(
    edits: &[EditOperation],
    source: &str,
    annotator: &ErrorAnnotator,
    options: RenderOptions,
) -> Result<(AnnotationReport, String), Error> {
    debug!("Annotating {} with {:?}", source, annotator.config());
    let annotation = annotator.annotate(edits)?;
    let report = AnnotationReport::new(annotation, source.to_string());
    debug!(
        "{}: {} record(s), {} label(s)",
        source,
        report.record_count(),
        report.label_count()
    );

    let mut rendered = String::new();
    if options.tree {
        rendered.push_str(&edit_tree(edits)?);
    }
    match options.format {
        OutputFormat::Json => rendered.push_str(&report.to_json()?),
        OutputFormat::Table => rendered.push_str(&pretty_print_report(&report, true)),
    }
    rendered.push('\n');

    Ok((report, rendered))
}

/// Write a rendering unless it is suppressed.
pub fn emit<W: Write>(writer: &mut W, rendered: &str, quiet: bool) -> Result<(), Error> {
    if !quiet {
        writer.write_all(rendered.as_bytes())?;
        writer.flush()?;
    }
    Ok(())
}

/// Draw the edit script as a tree of structural paths. An empty script draws
/// nothing.
pub fn edit_tree(edits: &[EditOperation]) -> Result<String, Error> {
    let mut tree = PathTree::new("Module");
    for edit in edits {
        let marker = match edit.kind {
            EditKind::Insert => EditMarker::Insert,
            EditKind::Delete => EditMarker::Delete,
            EditKind::Update => EditMarker::Update,
        };
        let label = match (&edit.current, &edit.new) {
            (Some(current), Some(new)) => format!("{} -> {}", current, new),
            (Some(label), None) | (None, Some(label)) => label.clone(),
            (None, None) => String::new(),
        };
        tree.add_edit(&edit.path, marker, &label);
    }
    if tree.is_empty() {
        return Ok(String::new());
    }
    Ok(tree.print()?)
}
