use std::collections::HashSet;

use tracing::{instrument, trace};

use super::{Detector, deleted_labels, inserted_labels};
use crate::annotation::edit::EditOperation;
use crate::annotation::label::LabelIdentity;
use crate::annotation::record::{ErrorRecord, RecordSet};

/// Reports constructs the submission has and the reference solution doesn't.
pub struct UnnecessaryDeletionDetector;

impl Detector for UnnecessaryDeletionDetector {
    fn name(&self) -> &'static str {
        "unnecessary-deletion"
    }

    #[instrument(skip_all, level = "debug", fields(edits = edits.len()))]
    fn detect(&self, edits: &[EditOperation]) -> RecordSet {
        let inserted: HashSet<LabelIdentity> = inserted_labels(edits)
            .map(|(_, label)| label.identity())
            .collect();

        let mut records = RecordSet::new();
        for (edit, label) in deleted_labels(edits) {
            let Some(construct) = label.construct() else {
                continue;
            };
            if inserted.contains(&label.identity()) {
                trace!("Deleted {} is inserted elsewhere", label.text());
                continue;
            }

            records.insert(ErrorRecord::node(
                construct.unnecessary_tag(),
                label.value(),
                &edit.context(),
            ));
        }

        records
    }
}
