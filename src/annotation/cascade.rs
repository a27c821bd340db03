//! Suppression of records that are symptoms of a root cause already reported.
//!
//! A filter is an ordered list of rules. Each rule takes the whole record set
//! and returns a possibly smaller one; a record dropped by one rule is never
//! seen by the next.

use tracing::{debug, instrument};

use super::patterns::{PRINT_CALL, PRINT_CALL_TOKEN, RANGE_CALL};
use super::record::{ErrorRecord, RecordSet};
use super::tags::LowLevelTag;

pub trait CascadeRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, records: RecordSet) -> RecordSet;
}

/// A missing `range(...)` call explains everything else reported under a
/// range call: once one is missing, drop every record whose context mentions
/// a range call.
pub struct MissingRangeCallRule;

impl CascadeRule for MissingRangeCallRule {
    fn name(&self) -> &'static str {
        "missing-range-call"
    }

    fn apply(&self, records: RecordSet) -> RecordSet {
        let triggered = records.iter().any(|r| {
            r.tag == LowLevelTag::MissingCallStatement && RANGE_CALL.is_match(&r.context)
        });
        if !triggered {
            return records;
        }

        records
            .into_iter()
            .filter(|r| !RANGE_CALL.is_match(&r.context))
            .collect()
    }
}

/// An unnecessary `print(...)` call explains the records nested under it.
/// The trigger itself is kept; records whose context goes past the print
/// call are dropped.
pub struct UnnecessaryPrintCallRule;

impl UnnecessaryPrintCallRule {
    fn ends_at_print(record: &ErrorRecord) -> bool {
        record.context.trim().ends_with(PRINT_CALL_TOKEN)
    }

    fn is_trigger(record: &ErrorRecord) -> bool {
        record.tag == LowLevelTag::UnnecessaryCallStatement
            && PRINT_CALL.is_match(&record.context)
            && Self::ends_at_print(record)
    }
}

impl CascadeRule for UnnecessaryPrintCallRule {
    fn name(&self) -> &'static str {
        "unnecessary-print-call"
    }

    fn apply(&self, records: RecordSet) -> RecordSet {
        if !records.iter().any(Self::is_trigger) {
            return records;
        }

        records
            .into_iter()
            .filter(|r| {
                Self::is_trigger(r) || !PRINT_CALL.is_match(&r.context) || Self::ends_at_print(r)
            })
            .collect()
    }
}

/// An ordered pipeline of cascade rules.
pub struct CascadeFilter {
    rules: Vec<Box<dyn CascadeRule>>,
}

impl Default for CascadeFilter {
    /// The range-call rule followed by the print-call rule.
    fn default() -> Self {
        Self::empty()
            .with_rule(MissingRangeCallRule)
            .with_rule(UnnecessaryPrintCallRule)
    }
}

impl CascadeFilter {
    /// A filter that keeps everything.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule; it runs after every rule already added.
    pub fn with_rule<R: CascadeRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    #[instrument(skip_all, level = "debug", fields(records = records.len()))]
    pub fn apply(&self, records: RecordSet) -> RecordSet {
        self.rules.iter().fold(records, |records, rule| {
            let before = records.len();
            let records = rule.apply(records);
            if records.len() != before {
                debug!(
                    "Rule {} suppressed {} record(s)",
                    rule.name(),
                    before - records.len()
                );
            }
            records
        })
    }
}
