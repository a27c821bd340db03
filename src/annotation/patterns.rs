//! Context patterns shared by the cascade filter, the update tracker and the
//! mapper. All matching is done over rendered context strings.

use regex::Regex;
use std::sync::LazyLock;

use super::label::{CONTEXT_SEPARATOR, NodeLabel};

/// A call to `range`, anywhere in a context.
pub static RANGE_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Call:\s*range").unwrap());

/// A call to `print`, anywhere in a context.
pub static PRINT_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Call:\s*print").unwrap());

/// Exact token a context ends with when it points at a print call itself.
pub const PRINT_CALL_TOKEN: &str = "Call: print";

/// A call label that names its callee.
pub static CALL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Call:\s*\S+").unwrap());

/// A run of adjacent path segments, each given by its upper-cased category
/// and optionally the value it must carry.
///
/// Matching is done per segment of a rendered context, so identifiers such as
/// `Function: checkIfSorted` never match an `IF` segment.
#[derive(Debug, Clone, Copy)]
pub struct SegmentRun(&'static [(&'static str, Option<&'static str>)]);

impl SegmentRun {
    pub fn matches(&self, context: &str) -> bool {
        let segments: Vec<NodeLabel> = context
            .split(CONTEXT_SEPARATOR)
            .map(NodeLabel::parse)
            .collect();
        !self.0.is_empty()
            && segments.windows(self.0.len()).any(|window| {
                window
                    .iter()
                    .zip(self.0)
                    .all(|(segment, wanted)| segment_matches(segment, wanted))
            })
    }
}

fn segment_matches(segment: &NodeLabel, (category, value): &(&str, Option<&str>)) -> bool {
    canonical_category(segment.category()) == *category
        && value.is_none_or(|value| {
            segment
                .value()
                .is_some_and(|found| found.eq_ignore_ascii_case(value))
        })
}

fn canonical_category(category: &str) -> &str {
    match category {
        "FUNCTIONDEF" => "FUNCTION",
        "ARGUMENT" => "ARG",
        other => other,
    }
}

pub const FOR_RANGE_BOUND: SegmentRun = SegmentRun(&[
    ("FOR", None),
    ("CONDITION", None),
    ("CALL", Some("range")),
    ("CONST", None),
]);
pub const WHILE_COMPARE_BOUND: SegmentRun =
    SegmentRun(&[("WHILE", None), ("CONDITION", None), ("COMPARE", None)]);
pub const FOR_BODY: SegmentRun = SegmentRun(&[("FOR", None), ("BODY", None)]);
pub const WHILE_BODY: SegmentRun = SegmentRun(&[("WHILE", None), ("BODY", None)]);
pub const IF_BODY: SegmentRun = SegmentRun(&[("IF", None), ("BODY", None)]);
pub const ASSIGNED_CONST: SegmentRun = SegmentRun(&[("ASSIGN", None), ("CONST", None)]);
pub const RETURN_FUNCTION: SegmentRun = SegmentRun(&[("FUNCTION", None)]);
pub const RETURN_STATEMENT: SegmentRun = SegmentRun(&[("RETURN", None)]);
pub const CONDITIONAL: SegmentRun = SegmentRun(&[("IF", None)]);

/// Last whitespace-delimited token of a context, e.g. `10` for
/// `Module > For > Condition: > Call: range > Const: 10`.
pub fn last_token(context: &str) -> Option<&str> {
    context.split_whitespace().last()
}
