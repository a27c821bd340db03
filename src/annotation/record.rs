use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::errors::Error;
use super::tags::LowLevelTag;

/// Deduplicated, deterministically ordered collection of low-level records.
pub type RecordSet = BTreeSet<ErrorRecord>;

/// Wire form of a record: `[tag, value, context]` or
/// `[tag, current, new, context]`.
pub type RawRecord = Vec<Option<String>>;

#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum RecordDetail {
    /// A single node, with the literal value of its label if it had one.
    Node { value: Option<String> },
    /// An updated node, with both of its labels.
    Update { current: String, new: String },
}

/// A low-level error found by one of the detectors.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "RawRecord", try_from = "RawRecord")]
pub struct ErrorRecord {
    pub tag: LowLevelTag,
    pub detail: RecordDetail,
    /// The rendered structural path the error was found at
    pub context: String,
}

impl ErrorRecord {
    /// A record about a single node. `value` keeps the case it had in the
    /// edit script (`print`, not `PRINT`); only categories are upper-cased.
    pub fn node(tag: LowLevelTag, value: Option<&str>, context: &str) -> Self {
        Self {
            tag,
            detail: RecordDetail::Node {
                value: value.map(str::to_string),
            },
            context: context.to_string(),
        }
    }

    pub fn update(tag: LowLevelTag, current: &str, new: &str, context: &str) -> Self {
        Self {
            tag,
            detail: RecordDetail::Update {
                current: current.to_string(),
                new: new.to_string(),
            },
            context: context.to_string(),
        }
    }

    /// Number of fields in the wire form.
    pub fn arity(&self) -> usize {
        match self.detail {
            RecordDetail::Node { .. } => 3,
            RecordDetail::Update { .. } => 4,
        }
    }

    /// The field just before the context: the node value, or the new label of
    /// an update.
    pub fn second_context(&self) -> Option<&str> {
        match &self.detail {
            RecordDetail::Node { value } => value.as_deref(),
            RecordDetail::Update { new, .. } => Some(new),
        }
    }
}

impl From<ErrorRecord> for RawRecord {
    fn from(record: ErrorRecord) -> Self {
        let tag = Some(record.tag.as_str().to_string());
        match record.detail {
            RecordDetail::Node { value } => vec![tag, value, Some(record.context)],
            RecordDetail::Update { current, new } => {
                vec![tag, Some(current), Some(new), Some(record.context)]
            }
        }
    }
}

impl TryFrom<RawRecord> for ErrorRecord {
    type Error = Error;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let arity = raw.len();
        let mut fields = raw.into_iter();
        let next = (fields.next(), fields.next(), fields.next(), fields.next());
        let (tag, detail, context) = match (arity, next) {
            (3, (Some(tag), Some(value), Some(context), None)) => {
                (tag, RecordDetail::Node { value }, context)
            }
            (4, (Some(tag), Some(current), Some(new), Some(context))) => {
                let current = current.ok_or(Error::MissingRecordField("current label"))?;
                let new = new.ok_or(Error::MissingRecordField("new label"))?;
                (tag, RecordDetail::Update { current, new }, context)
            }
            _ => return Err(Error::MalformedRecord { arity }),
        };

        Ok(Self {
            tag: tag.ok_or(Error::MissingRecordField("tag"))?.parse()?,
            detail,
            context: context.unwrap_or_default(),
        })
    }
}
