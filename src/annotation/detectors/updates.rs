use tracing::{instrument, trace};

use super::{Detector, updated_labels};
use crate::annotation::edit::EditOperation;
use crate::annotation::label::{Construct, NodeLabel};
use crate::annotation::patterns::CALL_TOKEN;
use crate::annotation::record::{ErrorRecord, RecordSet};
use crate::annotation::tags::LowLevelTag;

/// Classifies every update. One update can contribute several records: an
/// identity change, a newly required construct, and a classification by the
/// kind of node being updated.
pub struct UpdateTracker;

impl Detector for UpdateTracker {
    fn name(&self) -> &'static str {
        "update-tracker"
    }

    #[instrument(skip_all, level = "debug", fields(edits = edits.len()))]
    fn detect(&self, edits: &[EditOperation]) -> RecordSet {
        let mut records = RecordSet::new();

        for (edit, (current, new)) in updated_labels(edits) {
            let context = edit.context();
            let record = |tag| ErrorRecord::update(tag, current.text(), new.text(), &context);

            if let Some(tag) = replaced_construct(&current, &new) {
                records.insert(record(tag));
            }

            if let Some(tag) = required_construct(&new) {
                records.insert(record(tag));
            }

            if let Some(tag) = edit.last_path_label().and_then(|l| classify_updated_node(&l)) {
                trace!("Update at {:?} classified as {}", context, tag);
                records.insert(record(tag));
            }
        }

        records
    }
}

/// The current node changed category, so whatever it was is now surplus.
///
/// A current label naming a callee (`Call: print`) is left out.
fn replaced_construct(current: &NodeLabel, new: &NodeLabel) -> Option<LowLevelTag> {
    let construct = current.construct()?;
    if new.category().is_empty() || new.category() == current.category() {
        return None;
    }
    if construct == Construct::Call && CALL_TOKEN.is_match(current.text()) {
        return None;
    }
    Some(construct.unnecessary_tag())
}

/// The new label is a bare construct category the slot didn't hold before.
fn required_construct(new: &NodeLabel) -> Option<LowLevelTag> {
    if !new.is_bare() {
        return None;
    }
    match new.construct()? {
        construct @ (Construct::For
        | Construct::While
        | Construct::If
        | Construct::Call
        | Construct::Assign
        | Construct::Const
        | Construct::Operation
        | Construct::Variable) => Some(construct.missing_tag()),
        Construct::Function | Construct::Return | Construct::Argument => None,
    }
}

/// Classify by the category of the node at the end of the update's path.
/// Variables are left to the variable-mismatch detector.
fn classify_updated_node(node: &NodeLabel) -> Option<LowLevelTag> {
    let category = node.category();
    if category.contains("COMPARE") {
        Some(LowLevelTag::IncorrectOperationInComparison)
    } else if category.contains("OPERATION") {
        Some(LowLevelTag::IncorrectOperationInAssignment)
    } else if category.contains("CONST") {
        Some(LowLevelTag::ConstValueMismatch)
    } else if category.contains("ASSIGN") {
        Some(LowLevelTag::NodeTypeMismatch)
    } else {
        None
    }
}
