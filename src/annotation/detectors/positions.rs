use std::collections::HashMap;

use tracing::{instrument, trace};

use super::{Detector, deleted_labels, inserted_labels};
use crate::annotation::edit::EditOperation;
use crate::annotation::label::LabelIdentity;
use crate::annotation::record::{ErrorRecord, RecordSet};

/// Reports statements that were written but placed at the wrong spot: the same
/// label is deleted from one path and inserted at another.
pub struct IncorrectPositionDetector;

impl Detector for IncorrectPositionDetector {
    fn name(&self) -> &'static str {
        "incorrect-position"
    }

    #[instrument(skip_all, level = "debug", fields(edits = edits.len()))]
    fn detect(&self, edits: &[EditOperation]) -> RecordSet {
        let mut insert_contexts: HashMap<LabelIdentity, Vec<String>> = HashMap::new();
        for (edit, label) in inserted_labels(edits) {
            insert_contexts
                .entry(label.identity())
                .or_default()
                .push(edit.context());
        }

        let mut records = RecordSet::new();
        for (edit, label) in deleted_labels(edits) {
            let Some(tag) = label.construct().and_then(|c| c.position_tag()) else {
                continue;
            };
            let Some(contexts) = insert_contexts.get(&label.identity()) else {
                continue;
            };

            for context in contexts {
                trace!(
                    "{} moved from {:?} to {:?}",
                    label.text(),
                    edit.context(),
                    context
                );
                records.insert(ErrorRecord::node(tag, label.value(), context));
            }
        }

        records
    }
}
