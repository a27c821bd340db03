//! Classification of AST edit scripts into pedagogical error labels.
//!
//! An edit script describes how to turn a student's program tree into a
//! reference solution. The detectors read it and emit low-level records, the
//! cascade filter drops records explained by a more fundamental one, and the
//! tag mapper turns what is left into high-level labels.

pub mod annotator;
pub mod cascade;
pub mod detectors;
pub mod edit;
pub mod errors;
pub mod label;
pub mod mapper;
pub mod patterns;
pub mod record;
pub mod reports;
pub mod tags;

pub use annotator::{Annotation, AnnotatorConfig, AnnotatorConfigBuilder, ErrorAnnotator};
pub use cascade::{CascadeFilter, CascadeRule};
pub use edit::{EditKind, EditOperation};
pub use errors::Error;
pub use mapper::{LabelSet, TagMapper};
pub use record::{ErrorRecord, RawRecord, RecordSet};
pub use tags::{HighLevelLabel, LowLevelTag};
