//! The low-level detection passes. Each pass sees the whole edit script and
//! returns its own record set; passes never look at each other's output.

mod missing;
mod positions;
mod unnecessary;
mod updates;
mod variables;

pub use missing::MissingConstructDetector;
pub use positions::IncorrectPositionDetector;
pub use unnecessary::UnnecessaryDeletionDetector;
pub use updates::UpdateTracker;
pub use variables::VariableMismatchDetector;

use super::edit::{EditKind, EditOperation};
use super::label::NodeLabel;
use super::record::RecordSet;

pub trait Detector: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn detect(&self, edits: &[EditOperation]) -> RecordSet;
}

/// All five passes, in the order their records are concatenated.
pub fn default_detectors() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(MissingConstructDetector),
        Box::new(UnnecessaryDeletionDetector),
        Box::new(IncorrectPositionDetector),
        Box::new(UpdateTracker),
        Box::new(VariableMismatchDetector),
    ]
}

/// Edits of one kind, paired with the label(s) that kind carries. An edit
/// missing a label its kind requires breaks the edit-script invariant.
fn labels_of_kind<'a, T>(
    edits: &'a [EditOperation],
    kind: EditKind,
    label: impl Fn(&'a EditOperation) -> Option<T>,
) -> impl Iterator<Item = (&'a EditOperation, T)> {
    edits
        .iter()
        .filter(move |edit| edit.kind == kind)
        .filter_map(move |edit| match label(edit) {
            Some(found) => Some((edit, found)),
            #[cfg(feature = "invariant_violations")]
            None => crate::invariant_violation!("{} edit at {:?} lacks its label", kind, edit.path),
            #[cfg(not(feature = "invariant_violations"))]
            None => None,
        })
}

fn inserted_labels(
    edits: &[EditOperation],
) -> impl Iterator<Item = (&EditOperation, NodeLabel<'_>)> {
    labels_of_kind(edits, EditKind::Insert, EditOperation::inserted)
}

fn deleted_labels(
    edits: &[EditOperation],
) -> impl Iterator<Item = (&EditOperation, NodeLabel<'_>)> {
    labels_of_kind(edits, EditKind::Delete, EditOperation::deleted)
}

fn updated_labels(
    edits: &[EditOperation],
) -> impl Iterator<Item = (&EditOperation, (NodeLabel<'_>, NodeLabel<'_>))> {
    labels_of_kind(edits, EditKind::Update, EditOperation::updated)
}
