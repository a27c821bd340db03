use ast_error_detection::LowLevelTag;

#[macro_use]
mod helpers;

use helpers::{node, upd};

test_case!(
    consistent_rename_is_clean,
    vec![
        upd(&["Module", "Assign[0]", "Var: x"], "Var: x", "Var: y"),
        upd(&["Module", "Return[1]", "Var: x"], "Var: x", "Var: y"),
    ],
    vec![],
    vec![]
);

test_case!(
    inconsistent_rename_reports_every_context,
    vec![
        upd(&["Module", "Assign[0]", "Var: x"], "Var: x", "Var: y"),
        upd(&["Module", "Return[1]", "Var: x"], "Var: x", "Var: z"),
    ],
    vec![
        node(LowLevelTag::VariableMismatch, Some("x"), "Module > Assign > Var: x"),
        node(LowLevelTag::VariableMismatch, Some("x"), "Module > Return > Var: x"),
    ],
    vec![]
);

test_case!(
    renames_are_tracked_per_variable,
    vec![
        upd(&["Module", "Assign[0]", "Var: x"], "Var: x", "Var: y"),
        upd(&["Module", "Assign[1]", "Var: i"], "Var: i", "Var: j"),
        upd(&["Module", "Assign[1]", "Var: i"], "Var: i", "Var: k"),
    ],
    vec![node(LowLevelTag::VariableMismatch, Some("i"), "Module > Assign > Var: i")],
    vec![]
);
