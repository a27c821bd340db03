use ast_error_detection::{HighLevelLabel, LowLevelTag};

#[macro_use]
mod helpers;

use helpers::{del, ins, node};

test_case!(
    missing_for_loop,
    vec![ins(&["Module"], "For[0]")],
    vec![node(LowLevelTag::MissingForLoop, None, "Module")],
    vec![HighLevelLabel::LoForMissing]
);

test_case!(
    missing_call_in_loop_body,
    vec![ins(&["Module", "For[0]", "Body"], "Call: print")],
    vec![node(
        LowLevelTag::MissingCallStatement,
        Some("print"),
        "Module > For > Body"
    )],
    vec![HighLevelLabel::LoBodyMissingNotPresentAnywhere]
);

test_case!(
    missing_statement_in_if_body,
    vec![ins(&["Module", "If[0]", "Body"], "Assign")],
    vec![node(
        LowLevelTag::MissingAssignStatement,
        None,
        "Module > If > Body"
    )],
    vec![HighLevelLabel::CsBodyError]
);

test_case!(
    missing_function_definition_alias,
    vec![ins(&["Module"], "FunctionDef: area")],
    vec![node(
        LowLevelTag::MissingFunctionDefinition,
        Some("area"),
        "Module"
    )],
    vec![HighLevelLabel::FDefinitionMissing]
);

test_case!(
    missing_return,
    vec![ins(&["Module", "Function: f[0]", "Body"], "Return")],
    vec![node(
        LowLevelTag::MissingReturn,
        None,
        "Module > Function: f > Body"
    )],
    vec![HighLevelLabel::FDefinitionErrorReturn]
);

test_case!(
    missing_argument,
    vec![ins(&["Module", "Function: f[0]", "Args"], "Arg: n")],
    vec![node(
        LowLevelTag::MissingArgument,
        Some("n"),
        "Module > Function: f > Args"
    )],
    vec![HighLevelLabel::FDefinitionErrorArg]
);

test_case!(
    missing_if_statement,
    vec![ins(&["Module"], "If[1]")],
    vec![node(LowLevelTag::MissingIfStatement, None, "Module")],
    vec![HighLevelLabel::CsMissing]
);

test_case!(
    missing_call_in_function_named_like_if,
    vec![ins(&["Module", "Function: showIf[0]", "Body"], "Call: print")],
    vec![node(
        LowLevelTag::MissingCallStatement,
        Some("print"),
        "Module > Function: showIf > Body"
    )],
    vec![]
);

test_case!(
    unnecessary_function_definition,
    vec![del(&["Module"], "Function: helper[2]")],
    vec![node(
        LowLevelTag::UnnecessaryFunction,
        Some("helper"),
        "Module"
    )],
    vec![HighLevelLabel::FDefinitionUnnecessary]
);

test_case!(
    unnecessary_return,
    vec![del(&["Module", "Function: f[0]", "Body"], "Return")],
    vec![node(
        LowLevelTag::UnnecessaryReturn,
        None,
        "Module > Function: f > Body"
    )],
    vec![HighLevelLabel::FDefinitionErrorReturn]
);

test_case!(
    unnecessary_while_loop,
    vec![del(&["Module"], "While[1]")],
    vec![node(LowLevelTag::UnnecessaryWhileLoop, None, "Module")],
    vec![HighLevelLabel::LoWhileUnnecessary]
);

test_case!(
    unnecessary_conditional,
    vec![del(&["Module", "For[0]", "Body"], "If")],
    vec![node(
        LowLevelTag::UnnecessaryConditional,
        None,
        "Module > For > Body"
    )],
    vec![HighLevelLabel::CsUnnecessary]
);

test_case!(
    call_moved_into_loop_body,
    vec![
        del(&["Module"], "Call: print[2]"),
        ins(&["Module", "For[0]", "Body"], "Call: print[0]"),
    ],
    vec![node(
        LowLevelTag::IncorrectStatementPositionCall,
        Some("print"),
        "Module > For > Body"
    )],
    vec![HighLevelLabel::LoBodyMisplaced]
);

test_case!(
    conditional_moved_out_of_loop,
    vec![
        del(&["Module", "For[0]", "Body"], "If"),
        ins(&["Module"], "If"),
    ],
    vec![node(LowLevelTag::IncorrectStatementPositionIf, None, "Module")],
    vec![HighLevelLabel::CsBodyMisplaced]
);

test_case!(
    move_matches_labels_case_insensitively,
    vec![
        del(&["Module"], "call: Print"),
        ins(&["Module", "While", "Body"], "Call: Print"),
    ],
    vec![node(
        LowLevelTag::IncorrectStatementPositionCall,
        Some("Print"),
        "Module > While > Body"
    )],
    vec![HighLevelLabel::LoBodyMisplaced]
);

test_case!(
    moved_expression_is_not_reported,
    vec![
        del(&["Module", "Assign"], "Const: 1"),
        ins(&["Module", "Return"], "Const: 1"),
    ],
    vec![],
    vec![]
);

test_case!(
    unknown_categories_are_ignored,
    vec![ins(&["Module"], "Expr"), del(&["Module"], "Pass")],
    vec![],
    vec![]
);

test_case!(empty_script, vec![], vec![], vec![]);
