use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, instrument};

use super::{Detector, updated_labels};
use crate::annotation::edit::EditOperation;
use crate::annotation::label::Construct;
use crate::annotation::record::{ErrorRecord, RecordSet};
use crate::annotation::tags::LowLevelTag;

/// Where one variable of the submission was renamed, and to what.
#[derive(Debug, Default)]
struct Renames {
    new_names: BTreeSet<String>,
    contexts: BTreeSet<String>,
}

/// Reports variables that are renamed inconsistently: the same name in the
/// submission maps to more than one name in the reference solution. A clean,
/// consistent rename is not an error.
pub struct VariableMismatchDetector;

impl Detector for VariableMismatchDetector {
    fn name(&self) -> &'static str {
        "variable-mismatch"
    }

    #[instrument(skip_all, level = "debug", fields(edits = edits.len()))]
    fn detect(&self, edits: &[EditOperation]) -> RecordSet {
        let mut renames: BTreeMap<String, Renames> = BTreeMap::new();

        for (edit, (current, new)) in updated_labels(edits) {
            if current.construct() != Some(Construct::Variable)
                || new.construct() != Some(Construct::Variable)
            {
                continue;
            }
            let (Some(current_name), Some(new_name)) = (current.value(), new.value()) else {
                continue;
            };

            let entry = renames.entry(current_name.to_string()).or_default();
            entry.new_names.insert(new_name.to_string());
            entry.contexts.insert(edit.context());
        }

        let mut records = RecordSet::new();
        for (name, renamed) in renames {
            if renamed.new_names.len() < 2 {
                continue;
            }
            debug!("Variable {} renamed to {:?}", name, renamed.new_names);
            for context in &renamed.contexts {
                records.insert(ErrorRecord::node(
                    LowLevelTag::VariableMismatch,
                    Some(&name),
                    context,
                ));
            }
        }

        records
    }
}
