use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::cascade::CascadeFilter;
use super::detectors::{Detector, default_detectors};
use super::edit::{EditOperation, check_edit_script};
use super::errors::Error;
use super::mapper::{LabelSet, TagMapper};
use super::record::RecordSet;

/// Knobs for one annotator.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(default)]
pub struct AnnotatorConfig {
    /// Run the cascade filter over the detector output.
    pub apply_cascade_filter: bool,
    /// Map the unfiltered union of detector records to labels instead of the
    /// filtered set. The reported low-level records are still filtered.
    pub map_unfiltered: bool,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            apply_cascade_filter: true,
            map_unfiltered: false,
        }
    }
}

/// The result of classifying one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub records: RecordSet,
    pub labels: LabelSet,
}

impl Annotation {
    pub fn is_clean(&self) -> bool {
        self.records.is_empty() && self.labels.is_empty()
    }
}

/// Runs the detectors, the cascade filter and the tag mapper over an edit
/// script.
///
/// The annotator holds no per-submission state; one instance can be shared
/// across threads.
pub struct ErrorAnnotator {
    detectors: Vec<Box<dyn Detector>>,
    filter: CascadeFilter,
    mapper: TagMapper,
    config: AnnotatorConfig,
}

impl Default for ErrorAnnotator {
    fn default() -> Self {
        Self::new(AnnotatorConfig::default())
    }
}

impl ErrorAnnotator {
    pub fn new(config: AnnotatorConfig) -> Self {
        Self {
            detectors: default_detectors(),
            filter: CascadeFilter::default(),
            mapper: TagMapper,
            config,
        }
    }

    /// Replace the cascade filter.
    pub fn with_filter(mut self, filter: CascadeFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    /// The union of every detector's records, before any filtering.
    #[instrument(skip_all, level = "debug", fields(edits = edits.len()))]
    pub fn raw_errors(&self, edits: &[EditOperation]) -> Result<RecordSet, Error> {
        check_edit_script(edits)?;

        let mut records = RecordSet::new();
        for detector in &self.detectors {
            let found = detector.detect(edits);
            debug!("{} found {} record(s)", detector.name(), found.len());
            records.extend(found);
        }
        Ok(records)
    }

    /// Detector records after the cascade filter, when it is enabled.
    pub fn low_level_errors(&self, edits: &[EditOperation]) -> Result<RecordSet, Error> {
        let raw = self.raw_errors(edits)?;
        Ok(self.filtered(raw))
    }

    /// Full classification: filtered low-level records and their labels.
    #[instrument(skip_all, level = "debug", fields(edits = edits.len()))]
    pub fn annotate(&self, edits: &[EditOperation]) -> Result<Annotation, Error> {
        let raw = self.raw_errors(edits)?;

        let (records, labels) = if self.config.map_unfiltered {
            let labels = self.mapper.map(&raw)?;
            (self.filtered(raw), labels)
        } else {
            let records = self.filtered(raw);
            let labels = self.mapper.map(&records)?;
            (records, labels)
        };

        debug!(
            "Annotated {} edit(s): {} record(s), {} label(s)",
            edits.len(),
            records.len(),
            labels.len()
        );
        Ok(Annotation { records, labels })
    }

    fn filtered(&self, records: RecordSet) -> RecordSet {
        if self.config.apply_cascade_filter {
            self.filter.apply(records)
        } else {
            records
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::record::ErrorRecord;
    use crate::annotation::tags::{HighLevelLabel, LowLevelTag};

    fn missing_range_script() -> Vec<EditOperation> {
        vec![
            EditOperation::insert(
                &["Module", "For[0]", "Condition:", "Call: range"],
                "Call: range",
            ),
            EditOperation::update(
                &["Module", "For[0]", "Condition:", "Call: range", "Const: 10"],
                "Const: 10",
                "Const: 2",
            ),
        ]
    }

    #[test]
    fn test_builder_defaults() {
        let config = AnnotatorConfigBuilder::default().build().unwrap();
        assert_eq!(config, AnnotatorConfig::default());
        assert!(config.apply_cascade_filter);

        let config = AnnotatorConfigBuilder::default()
            .map_unfiltered(true)
            .build()
            .unwrap();
        assert!(config.map_unfiltered);
        assert!(config.apply_cascade_filter);
        assert_eq!(ErrorAnnotator::new(config.clone()).config(), &config);
    }

    #[test]
    fn test_invalid_edit_is_rejected() {
        let mut edit = EditOperation::delete(&["Module"], "For");
        edit.new = Some("While".to_string());

        assert!(matches!(
            ErrorAnnotator::default().annotate(&[edit]),
            Err(Error::InvalidEdit { index: 0, .. })
        ));
    }

    #[test]
    fn test_cascade_filter_toggle() {
        let edits = missing_range_script();

        let filtered = ErrorAnnotator::default().annotate(&edits).unwrap();
        assert!(filtered.is_clean());

        let config = AnnotatorConfigBuilder::default()
            .apply_cascade_filter(false)
            .build()
            .unwrap();
        let unfiltered = ErrorAnnotator::new(config).annotate(&edits).unwrap();
        assert!(unfiltered.records.contains(&ErrorRecord::node(
            LowLevelTag::MissingCallStatement,
            Some("range"),
            "Module > For > Condition: > Call: range"
        )));
        assert_eq!(
            unfiltered.labels.into_iter().collect::<Vec<_>>(),
            vec![HighLevelLabel::LoForNumberIterationError]
        );
    }

    #[test]
    fn test_map_unfiltered_keeps_records_filtered() {
        let config = AnnotatorConfigBuilder::default()
            .map_unfiltered(true)
            .build()
            .unwrap();
        let annotation = ErrorAnnotator::new(config)
            .annotate(&missing_range_script())
            .unwrap();

        assert!(annotation.records.is_empty());
        assert!(annotation
            .labels
            .contains(&HighLevelLabel::LoForNumberIterationError));
    }

    #[test]
    fn test_custom_filter() {
        let annotator = ErrorAnnotator::default().with_filter(CascadeFilter::empty());
        let records = annotator.low_level_errors(&missing_range_script()).unwrap();
        assert_eq!(records.len(), 2);
    }
}
