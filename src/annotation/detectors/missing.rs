use std::collections::HashSet;

use tracing::{instrument, trace};

use super::{Detector, deleted_labels, inserted_labels, updated_labels};
use crate::annotation::edit::EditOperation;
use crate::annotation::label::LabelIdentity;
use crate::annotation::record::{ErrorRecord, RecordSet};

/// Reports constructs the reference solution has and the submission lacks.
///
/// An inserted node only counts as missing when the same label isn't also
/// deleted or updated somewhere else; otherwise the node was moved or
/// relabeled, which the position detector and update tracker cover.
pub struct MissingConstructDetector;

impl Detector for MissingConstructDetector {
    fn name(&self) -> &'static str {
        "missing-construct"
    }

    #[instrument(skip_all, level = "debug", fields(edits = edits.len()))]
    fn detect(&self, edits: &[EditOperation]) -> RecordSet {
        let mut elsewhere: HashSet<LabelIdentity> = deleted_labels(edits)
            .map(|(_, label)| label.identity())
            .collect();
        for (_, (current, new)) in updated_labels(edits) {
            elsewhere.insert(current.identity());
            elsewhere.insert(new.identity());
        }

        let mut records = RecordSet::new();
        for (edit, label) in inserted_labels(edits) {
            let Some(construct) = label.construct() else {
                continue;
            };
            if elsewhere.contains(&label.identity()) {
                trace!("Inserted {} also removed elsewhere, not missing", label.text());
                continue;
            }

            records.insert(ErrorRecord::node(
                construct.missing_tag(),
                label.value(),
                &edit.context(),
            ));
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::tags::LowLevelTag;

    #[test]
    fn test_lone_insert_is_missing() {
        let edits = vec![EditOperation::insert(&["Module"], "For[0]")];
        let records = MissingConstructDetector.detect(&edits);

        assert_eq!(
            records.into_iter().collect::<Vec<_>>(),
            vec![ErrorRecord::node(LowLevelTag::MissingForLoop, None, "Module")]
        );
    }

    #[test]
    fn test_value_is_kept() {
        let edits = vec![EditOperation::insert(&["Module", "For[0]", "Body"], "Call: print[2]")];
        let records = MissingConstructDetector.detect(&edits);

        assert!(records.contains(&ErrorRecord::node(
            LowLevelTag::MissingCallStatement,
            Some("print"),
            "Module > For > Body"
        )));
    }

    #[test]
    fn test_moved_node_is_not_missing() {
        let edits = vec![
            EditOperation::insert(&["Module", "For[0]", "Body"], "Call: print[0]"),
            EditOperation::delete(&["Module"], "Call: print[3]"),
        ];
        assert!(MissingConstructDetector.detect(&edits).is_empty());
    }

    #[test]
    fn test_relabeled_node_is_not_missing() {
        let edits = vec![
            EditOperation::insert(&["Module"], "Var: total"),
            EditOperation::update(&["Module", "Assign", "Var: sum"], "Var: sum", "Var: total"),
        ];
        assert!(MissingConstructDetector.detect(&edits).is_empty());
    }

    #[test]
    fn test_non_construct_insert_ignored() {
        let edits = vec![EditOperation::insert(&["Module", "For"], "Body")];
        assert!(MissingConstructDetector.detect(&edits).is_empty());
    }
}
