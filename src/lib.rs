//! Classifies the edit script between a student's program tree and a
//! reference solution into low-level error records and high-level
//! pedagogical labels.

#[macro_use]
mod macros;

pub mod annotation;
pub mod env;

pub use annotation::{
    Annotation, AnnotatorConfig, AnnotatorConfigBuilder, EditKind, EditOperation, Error,
    ErrorAnnotator, ErrorRecord, HighLevelLabel, LabelSet, LowLevelTag, RecordSet,
};
