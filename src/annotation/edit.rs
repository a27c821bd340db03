use core::fmt;

use serde::{Deserialize, Serialize};

use super::errors::Error;
use super::label::{NodeLabel, render_context};

/// The three kinds of tree edits produced by the upstream differ.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    Insert,
    Delete,
    Update,
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EditKind::Insert => write!(f, "insert"),
            EditKind::Delete => write!(f, "delete"),
            EditKind::Update => write!(f, "update"),
        }
    }
}

/// One entry of an edit script.
///
/// `path` holds the labels from the root down to the edited location. For
/// updates the last element is the edited node itself; for inserts and deletes
/// it is the parent the node is attached to.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOperation {
    #[serde(rename = "type")]
    pub kind: EditKind,
    pub path: Vec<String>,
    #[serde(default)]
    pub current: Option<String>,
    #[serde(default)]
    pub new: Option<String>,
}

impl EditOperation {
    pub fn insert<S: Into<String>>(path: &[&str], new: S) -> Self {
        Self {
            kind: EditKind::Insert,
            path: path.iter().map(|p| p.to_string()).collect(),
            current: None,
            new: Some(new.into()),
        }
    }

    pub fn delete<S: Into<String>>(path: &[&str], current: S) -> Self {
        Self {
            kind: EditKind::Delete,
            path: path.iter().map(|p| p.to_string()).collect(),
            current: Some(current.into()),
            new: None,
        }
    }

    pub fn update<S: Into<String>, T: Into<String>>(path: &[&str], current: S, new: T) -> Self {
        Self {
            kind: EditKind::Update,
            path: path.iter().map(|p| p.to_string()).collect(),
            current: Some(current.into()),
            new: Some(new.into()),
        }
    }

    /// Check that `current` and `new` are filled in the way the kind requires.
    pub fn check(&self, index: usize) -> Result<(), Error> {
        let reason = match (self.kind, &self.current, &self.new) {
            (EditKind::Insert, None, Some(_))
            | (EditKind::Delete, Some(_), None)
            | (EditKind::Update, Some(_), Some(_)) => return Ok(()),
            (EditKind::Insert, Some(_), _) => "an insert must not carry a current label",
            (EditKind::Insert, None, None) => "an insert needs a new label",
            (EditKind::Delete, _, Some(_)) => "a delete must not carry a new label",
            (EditKind::Delete, None, None) => "a delete needs a current label",
            (EditKind::Update, None, _) => "an update needs a current label",
            (EditKind::Update, Some(_), None) => "an update needs a new label",
        };

        Err(Error::InvalidEdit {
            index,
            kind: self.kind,
            reason: reason.to_string(),
        })
    }

    /// The label brought in by an insert.
    pub fn inserted(&self) -> Option<NodeLabel<'_>> {
        match (self.kind, &self.new) {
            (EditKind::Insert, Some(new)) => Some(NodeLabel::parse(new)),
            _ => None,
        }
    }

    /// The label removed by a delete.
    pub fn deleted(&self) -> Option<NodeLabel<'_>> {
        match (self.kind, &self.current) {
            (EditKind::Delete, Some(current)) => Some(NodeLabel::parse(current)),
            _ => None,
        }
    }

    /// The `(current, new)` label pair of an update.
    pub fn updated(&self) -> Option<(NodeLabel<'_>, NodeLabel<'_>)> {
        match (self.kind, &self.current, &self.new) {
            (EditKind::Update, Some(current), Some(new)) => {
                Some((NodeLabel::parse(current), NodeLabel::parse(new)))
            }
            _ => None,
        }
    }

    /// The index-stripped, `" > "`-joined path of this edit.
    pub fn context(&self) -> String {
        render_context(&self.path)
    }

    /// The label at the end of the path, if any.
    pub fn last_path_label(&self) -> Option<NodeLabel<'_>> {
        self.path.last().map(|p| NodeLabel::parse(p))
    }
}

/// Check every operation of an edit script, reporting the first bad one.
pub fn check_edit_script(edits: &[EditOperation]) -> Result<(), Error> {
    edits
        .iter()
        .enumerate()
        .try_for_each(|(index, edit)| edit.check(index))
}
