//! Second classification stage: low-level records to learner-facing labels.
//!
//! Every record is run through the full battery of predicates. Predicates are
//! independent, so a record can produce no label, one, or several, and many
//! different low-level causes end up under the same coarse label.

use std::collections::BTreeSet;

use tracing::{instrument, trace};

use super::errors::Error;
use super::patterns::{
    ASSIGNED_CONST, CONDITIONAL, FOR_BODY, FOR_RANGE_BOUND, IF_BODY, RETURN_FUNCTION,
    RETURN_STATEMENT, SegmentRun, WHILE_BODY, WHILE_COMPARE_BOUND, last_token,
};
use super::record::{ErrorRecord, RawRecord};
use super::tags::{HighLevelLabel, LowLevelTag};

pub type LabelSet = BTreeSet<HighLevelLabel>;

/// Iteration-bound contexts with their "off by more" and "off by one" labels.
const ITERATION_BOUNDS: [(SegmentRun, HighLevelLabel, HighLevelLabel); 2] = [
    (
        FOR_RANGE_BOUND,
        HighLevelLabel::LoForNumberIterationError,
        HighLevelLabel::LoForNumberIterationErrorUnder2,
    ),
    (
        WHILE_COMPARE_BOUND,
        HighLevelLabel::LoWhileNumberIterationError,
        HighLevelLabel::LoWhileNumberIterationErrorUnder2,
    ),
];

/// Misplaced statements that make up a loop body.
const LOOP_POSITION_FAMILY: [LowLevelTag; 4] = [
    LowLevelTag::IncorrectStatementPositionFor,
    LowLevelTag::IncorrectStatementPositionWhile,
    LowLevelTag::IncorrectStatementPositionCall,
    LowLevelTag::IncorrectStatementPositionAssign,
];

#[derive(Debug, Default, Clone, Copy)]
pub struct TagMapper;

impl TagMapper {
    #[instrument(skip_all, level = "debug")]
    pub fn map<'a, I>(&self, records: I) -> Result<LabelSet, Error>
    where
        I: IntoIterator<Item = &'a ErrorRecord>,
    {
        let mut labels = LabelSet::new();
        for record in records {
            self.map_record(record, &mut labels)?;
        }
        Ok(labels)
    }

    /// Map wire-form records. Records of the wrong arity or with an unknown
    /// tag are skipped.
    pub fn map_raw(&self, raw: &[RawRecord]) -> Result<LabelSet, Error> {
        let mut labels = LabelSet::new();
        for fields in raw {
            match ErrorRecord::try_from(fields.clone()) {
                Ok(record) => self.map_record(&record, &mut labels)?,
                Err(e) => trace!("Skipping raw record: {}", e),
            }
        }
        Ok(labels)
    }

    pub fn map_record(&self, record: &ErrorRecord, labels: &mut LabelSet) -> Result<(), Error> {
        let tag = record.tag;
        let context = record.context.as_str();

        if tag == LowLevelTag::ConstValueMismatch {
            for (pattern, large, under2) in ITERATION_BOUNDS {
                if pattern.matches(context) {
                    let label = if iteration_gap(record)? > 1 { large } else { under2 };
                    labels.insert(label);
                }
            }
        }

        if LOOP_POSITION_FAMILY.contains(&tag) {
            labels.insert(HighLevelLabel::LoBodyMisplaced);
        }
        if tag.is_missing() && (FOR_BODY.matches(context) || WHILE_BODY.matches(context)) {
            labels.insert(HighLevelLabel::LoBodyMissingNotPresentAnywhere);
        }

        if let Some(label) = structural_label(tag) {
            labels.insert(label);
        }

        if tag.is_missing() && IF_BODY.matches(context) {
            labels.insert(HighLevelLabel::CsBodyError);
        }
        if tag == LowLevelTag::ConstValueMismatch && ASSIGNED_CONST.matches(context) {
            labels.insert(HighLevelLabel::VaDeclarationInitializationError);
        }
        if tag == LowLevelTag::MissingVariable
            && RETURN_FUNCTION.matches(context)
            && RETURN_STATEMENT.matches(context)
        {
            labels.insert(HighLevelLabel::FDefinitionErrorReturn);
        }
        if tag == LowLevelTag::IncorrectOperationInComparison && CONDITIONAL.matches(context) {
            labels.insert(HighLevelLabel::ExpErrorConditionalBranch);
        }

        Ok(())
    }
}

/// Labels that follow from the tag alone.
fn structural_label(tag: LowLevelTag) -> Option<HighLevelLabel> {
    match tag {
        LowLevelTag::MissingForLoop => Some(HighLevelLabel::LoForMissing),
        LowLevelTag::UnnecessaryForLoop => Some(HighLevelLabel::LoForUnnecessary),
        LowLevelTag::MissingWhileLoop => Some(HighLevelLabel::LoWhileMissing),
        LowLevelTag::UnnecessaryWhileLoop => Some(HighLevelLabel::LoWhileUnnecessary),
        LowLevelTag::MissingIfStatement => Some(HighLevelLabel::CsMissing),
        LowLevelTag::UnnecessaryConditional => Some(HighLevelLabel::CsUnnecessary),
        LowLevelTag::MissingFunctionDefinition => Some(HighLevelLabel::FDefinitionMissing),
        LowLevelTag::UnnecessaryFunction => Some(HighLevelLabel::FDefinitionUnnecessary),
        LowLevelTag::IncorrectStatementPositionIf => Some(HighLevelLabel::CsBodyMisplaced),
        LowLevelTag::MissingArgument | LowLevelTag::UnnecessaryArgument => {
            Some(HighLevelLabel::FDefinitionErrorArg)
        }
        LowLevelTag::MissingReturn | LowLevelTag::UnnecessaryReturn => {
            Some(HighLevelLabel::FDefinitionErrorReturn)
        }
        LowLevelTag::MissingCallStatement
        | LowLevelTag::MissingAssignStatement
        | LowLevelTag::MissingConstValue
        | LowLevelTag::MissingOperation
        | LowLevelTag::MissingVariable
        | LowLevelTag::UnnecessaryCallStatement
        | LowLevelTag::UnnecessaryAssignStatement
        | LowLevelTag::UnnecessaryConstValue
        | LowLevelTag::UnnecessaryOperation
        | LowLevelTag::UnnecessaryVariable
        | LowLevelTag::IncorrectStatementPositionFor
        | LowLevelTag::IncorrectStatementPositionWhile
        | LowLevelTag::IncorrectStatementPositionCall
        | LowLevelTag::IncorrectStatementPositionAssign
        | LowLevelTag::IncorrectStatementPositionFunction
        | LowLevelTag::IncorrectStatementPositionReturn
        | LowLevelTag::IncorrectOperationInComparison
        | LowLevelTag::IncorrectOperationInAssignment
        | LowLevelTag::ConstValueMismatch
        | LowLevelTag::NodeTypeMismatch
        | LowLevelTag::VariableMismatch => None,
    }
}

/// Absolute difference between the bound in the context and the bound in the
/// second context.
fn iteration_gap(record: &ErrorRecord) -> Result<u64, Error> {
    let unparseable = |context: &str| Error::UnparseableIterationBound {
        context: context.to_string(),
    };
    let bound = |context: &str| -> Result<i64, Error> {
        last_token(context)
            .and_then(|token| token.parse().ok())
            .ok_or_else(|| unparseable(context))
    };

    let second = record
        .second_context()
        .ok_or_else(|| unparseable(&record.context))?;
    Ok(bound(&record.context)?.abs_diff(bound(second)?))
}
