//! The two closed vocabularies: low-level tags produced by the detectors and
//! high-level labels produced by the mapper. Both cross the crate boundary as
//! plain strings.

use core::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::errors::Error;

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident / $unknown:ident {
            $($variant:ident => $text:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
        $vis enum $name {
            $($variant),*
        }

        impl $name {
            /// Every member of the vocabulary, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)*
                    other => Err(Error::$unknown(other.to_string())),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(D::Error::custom)
            }
        }
    };
}

vocabulary! {
    /// Tags of low-level error records.
    pub enum LowLevelTag / UnknownTag {
        MissingForLoop => "MISSING_FOR_LOOP",
        MissingWhileLoop => "MISSING_WHILE_LOOP",
        MissingIfStatement => "MISSING_IF_STATEMENT",
        MissingCallStatement => "MISSING_CALL_STATEMENT",
        MissingAssignStatement => "MISSING_ASSIGN_STATEMENT",
        MissingFunctionDefinition => "MISSING_FUNCTION_DEFINITION",
        MissingReturn => "MISSING_RETURN",
        MissingConstValue => "MISSING_CONST_VALUE",
        MissingOperation => "MISSING_OPERATION",
        MissingArgument => "MISSING_ARGUMENT",
        MissingVariable => "MISSING_VARIABLE",
        UnnecessaryForLoop => "UNNECESSARY_FOR_LOOP",
        UnnecessaryWhileLoop => "UNNECESSARY_WHILE_LOOP",
        UnnecessaryConditional => "UNNECESSARY_CONDITIONAL",
        UnnecessaryCallStatement => "UNNECESSARY_CALL_STATEMENT",
        UnnecessaryAssignStatement => "UNNECESSARY_ASSIGN_STATEMENT",
        UnnecessaryFunction => "UNNECESSARY_FUNCTION",
        UnnecessaryReturn => "UNNECESSARY_RETURN",
        UnnecessaryConstValue => "UNNECESSARY_CONST_VALUE",
        UnnecessaryOperation => "UNNECESSARY_OPERATION",
        UnnecessaryArgument => "UNNECESSARY_ARGUMENT",
        UnnecessaryVariable => "UNNECESSARY_VARIABLE",
        IncorrectStatementPositionFor => "INCORRECT_STATEMENT_POSITION_FOR",
        IncorrectStatementPositionWhile => "INCORRECT_STATEMENT_POSITION_WHILE",
        IncorrectStatementPositionIf => "INCORRECT_STATEMENT_POSITION_IF",
        IncorrectStatementPositionCall => "INCORRECT_STATEMENT_POSITION_CALL",
        IncorrectStatementPositionAssign => "INCORRECT_STATEMENT_POSITION_ASSIGN",
        IncorrectStatementPositionFunction => "INCORRECT_STATEMENT_POSITION_FUNCTION",
        IncorrectStatementPositionReturn => "INCORRECT_STATEMENT_POSITION_RETURN",
        IncorrectOperationInComparison => "INCORRECT_OPERATION_IN_COMPARISON",
        IncorrectOperationInAssignment => "INCORRECT_OPERATION_IN_ASSIGNMENT",
        ConstValueMismatch => "CONST_VALUE_MISMATCH",
        NodeTypeMismatch => "NODE_TYPE_MISMATCH",
        VariableMismatch => "VARIABLE_MISMATCH",
    }
}

vocabulary! {
    /// Learner-facing error categories.
    pub enum HighLevelLabel / UnknownLabel {
        LoForNumberIterationError => "LO_FOR_NUMBER_ITERATION_ERROR",
        LoForNumberIterationErrorUnder2 => "LO_FOR_NUMBER_ITERATION_ERROR_UNDER2",
        LoWhileNumberIterationError => "LO_WHILE_NUMBER_ITERATION_ERROR",
        LoWhileNumberIterationErrorUnder2 => "LO_WHILE_NUMBER_ITERATION_ERROR_UNDER2",
        LoBodyMisplaced => "LO_BODY_MISPLACED",
        LoBodyMissingNotPresentAnywhere => "LO_BODY_MISSING_NOT_PRESENT_ANYWHERE",
        LoForMissing => "LO_FOR_MISSING",
        LoForUnnecessary => "LO_FOR_UNNECESSARY",
        LoWhileMissing => "LO_WHILE_MISSING",
        LoWhileUnnecessary => "LO_WHILE_UNNECESSARY",
        CsMissing => "CS_MISSING",
        CsUnnecessary => "CS_UNNECESSARY",
        CsBodyError => "CS_BODY_ERROR",
        CsBodyMisplaced => "CS_BODY_MISPLACED",
        FDefinitionMissing => "F_DEFINITION_MISSING",
        FDefinitionUnnecessary => "F_DEFINITION_UNNECESSARY",
        FDefinitionErrorArg => "F_DEFINITION_ERROR_ARG",
        FDefinitionErrorReturn => "F_DEFINITION_ERROR_RETURN",
        VaDeclarationInitializationError => "VA_DECLARATION_INITIALIZATION_ERROR",
        ExpErrorConditionalBranch => "EXP_ERROR_CONDITIONAL_BRANCH",
    }
}

impl LowLevelTag {
    /// Whether the tag reports an absent construct.
    pub fn is_missing(&self) -> bool {
        self.as_str().starts_with("MISSING_")
    }

    pub fn is_unnecessary(&self) -> bool {
        self.as_str().starts_with("UNNECESSARY_")
    }

    pub fn is_incorrect_position(&self) -> bool {
        self.as_str().starts_with("INCORRECT_STATEMENT_POSITION_")
    }
}
