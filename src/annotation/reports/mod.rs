pub mod pretty_print;

use serde::Serialize;

use crate::annotation::annotator::Annotation;
use crate::annotation::errors::Error;

/// An annotation together with where its edit script came from.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotationReport {
    pub source: String,
    #[serde(flatten)]
    pub annotation: Annotation,
}

impl AnnotationReport {
    pub fn new(annotation: Annotation, source: String) -> Self {
        Self { source, annotation }
    }

    pub fn record_count(&self) -> usize {
        self.annotation.records.len()
    }

    pub fn label_count(&self) -> usize {
        self.annotation.labels.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.annotation.labels.is_empty()
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
