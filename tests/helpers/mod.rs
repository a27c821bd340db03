#![allow(dead_code)]

use ast_error_detection::{
    EditOperation, ErrorAnnotator, ErrorRecord, LabelSet, LowLevelTag, RecordSet,
};

pub fn run_test_case(edits: Vec<EditOperation>) -> (RecordSet, LabelSet) {
    let annotation = ErrorAnnotator::default()
        .annotate(&edits)
        .expect("Failed to annotate edit script");
    (annotation.records, annotation.labels)
}

pub fn ins(path: &[&str], new: &str) -> EditOperation {
    EditOperation::insert(path, new)
}

pub fn del(path: &[&str], current: &str) -> EditOperation {
    EditOperation::delete(path, current)
}

pub fn upd(path: &[&str], current: &str, new: &str) -> EditOperation {
    EditOperation::update(path, current, new)
}

pub fn node(tag: LowLevelTag, value: Option<&str>, context: &str) -> ErrorRecord {
    ErrorRecord::node(tag, value, context)
}

pub fn update(tag: LowLevelTag, current: &str, new: &str, context: &str) -> ErrorRecord {
    ErrorRecord::update(tag, current, new, context)
}

macro_rules! test_case {
    (
        $fn_name:ident,
        $edits:expr,
        $expected_records:expr,
        $expected_labels:expr
    ) => {
        #[test]
        fn $fn_name() {
            let (records, labels) = crate::helpers::run_test_case($edits);
            assert_eq!(
                records,
                $expected_records
                    .into_iter()
                    .collect::<ast_error_detection::RecordSet>(),
                "{}",
                stringify!($fn_name)
            );
            assert_eq!(
                labels,
                $expected_labels
                    .into_iter()
                    .collect::<ast_error_detection::LabelSet>(),
                "{}",
                stringify!($fn_name)
            );
        }
    };
}
