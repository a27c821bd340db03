use ast_error_detection::annotation::TagMapper;
use ast_error_detection::{Error, ErrorAnnotator, HighLevelLabel, LowLevelTag};

#[macro_use]
mod helpers;

use helpers::{upd, update};

const RANGE_BOUND: [&str; 5] = ["Module", "For[0]", "Condition:", "Call: range", "Const: 10"];

test_case!(
    for_bound_off_by_one,
    vec![upd(&RANGE_BOUND, "Const: 10", "Const: 9")],
    vec![update(
        LowLevelTag::ConstValueMismatch,
        "Const: 10",
        "Const: 9",
        "Module > For > Condition: > Call: range > Const: 10"
    )],
    vec![HighLevelLabel::LoForNumberIterationErrorUnder2]
);

test_case!(
    for_bound_far_off,
    vec![upd(&RANGE_BOUND, "Const: 10", "Const: 2")],
    vec![update(
        LowLevelTag::ConstValueMismatch,
        "Const: 10",
        "Const: 2",
        "Module > For > Condition: > Call: range > Const: 10"
    )],
    vec![HighLevelLabel::LoForNumberIterationError]
);

test_case!(
    while_bound_off_by_two,
    vec![upd(
        &["Module", "While[0]", "Condition:", "Compare", "Const: 5"],
        "Const: 5",
        "Const: 3"
    )],
    vec![update(
        LowLevelTag::ConstValueMismatch,
        "Const: 5",
        "Const: 3",
        "Module > While > Condition: > Compare > Const: 5"
    )],
    vec![HighLevelLabel::LoWhileNumberIterationError]
);

test_case!(
    wrong_initial_value,
    vec![upd(&["Module", "Assign[0]", "Const: 0"], "Const: 0", "Const: 1")],
    vec![update(
        LowLevelTag::ConstValueMismatch,
        "Const: 0",
        "Const: 1",
        "Module > Assign > Const: 0"
    )],
    vec![HighLevelLabel::VaDeclarationInitializationError]
);

test_case!(
    wrong_comparison_in_conditional,
    vec![upd(
        &["Module", "If[0]", "Condition:", "Compare: <"],
        "Compare: <",
        "Compare: <="
    )],
    vec![update(
        LowLevelTag::IncorrectOperationInComparison,
        "Compare: <",
        "Compare: <=",
        "Module > If > Condition: > Compare: <"
    )],
    vec![HighLevelLabel::ExpErrorConditionalBranch]
);

test_case!(
    wrong_comparison_in_while_is_not_a_branch_error,
    vec![upd(
        &["Module", "While[0]", "Condition:", "Compare: <"],
        "Compare: <",
        "Compare: <="
    )],
    vec![update(
        LowLevelTag::IncorrectOperationInComparison,
        "Compare: <",
        "Compare: <=",
        "Module > While > Condition: > Compare: <"
    )],
    vec![]
);

test_case!(
    wrong_comparison_in_function_named_like_if,
    vec![upd(
        &[
            "Module",
            "Function: checkIfSorted[0]",
            "Body",
            "While[1]",
            "Condition:",
            "Compare: <",
        ],
        "Compare: <",
        "Compare: <="
    )],
    vec![update(
        LowLevelTag::IncorrectOperationInComparison,
        "Compare: <",
        "Compare: <=",
        "Module > Function: checkIfSorted > Body > While > Condition: > Compare: <"
    )],
    vec![]
);

test_case!(
    wrong_operation_in_assignment,
    vec![upd(
        &["Module", "Assign[0]", "Operation: +"],
        "Operation: +",
        "Operation: -"
    )],
    vec![update(
        LowLevelTag::IncorrectOperationInAssignment,
        "Operation: +",
        "Operation: -",
        "Module > Assign > Operation: +"
    )],
    vec![]
);

test_case!(
    loop_kind_replaced,
    vec![upd(&["Module", "While[0]"], "While", "For")],
    vec![
        update(LowLevelTag::UnnecessaryWhileLoop, "While", "For", "Module > While"),
        update(LowLevelTag::MissingForLoop, "While", "For", "Module > While"),
    ],
    vec![HighLevelLabel::LoForMissing, HighLevelLabel::LoWhileUnnecessary]
);

test_case!(
    named_call_replaced_is_not_unnecessary,
    vec![upd(&["Module", "Call: print[0]"], "Call: print", "Assign")],
    vec![update(
        LowLevelTag::MissingAssignStatement,
        "Call: print",
        "Assign",
        "Module > Call: print"
    )],
    vec![]
);

#[test]
fn unparseable_iteration_bound_fails() {
    let edits = vec![upd(
        &["Module", "For[0]", "Condition:", "Call: range", "Const: n"],
        "Const: n",
        "Const: 3",
    )];

    assert_eq!(
        ErrorAnnotator::default().annotate(&edits),
        Err(Error::UnparseableIterationBound {
            context: "Module > For > Condition: > Call: range > Const: n".to_string()
        })
    );
}

#[test]
fn raw_records_of_wrong_shape_are_skipped() {
    let raw = vec![
        vec![
            Some("MISSING_FOR_LOOP".to_string()),
            None,
            Some("Module".to_string()),
        ],
        vec![Some("MISSING_RETURN".to_string())],
        vec![
            Some("NOT_A_TAG".to_string()),
            None,
            Some("Module".to_string()),
        ],
    ];

    let labels = TagMapper.map_raw(&raw).unwrap();
    assert_eq!(
        labels.into_iter().collect::<Vec<_>>(),
        vec![HighLevelLabel::LoForMissing]
    );
}
