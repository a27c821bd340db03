use ptree::{Style, TreeItem};
use std::borrow::Cow;
use std::io::{self, Write};

/// How an edit touched the node at the end of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMarker {
    Insert,
    Delete,
    Update,
}

impl EditMarker {
    fn symbol(&self) -> char {
        match self {
            EditMarker::Insert => '+',
            EditMarker::Delete => '-',
            EditMarker::Update => '~',
        }
    }

    /// Parse the `type` field of a serialized edit operation.
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind.to_ascii_lowercase().as_str() {
            "insert" => Some(EditMarker::Insert),
            "delete" => Some(EditMarker::Delete),
            "update" => Some(EditMarker::Update),
            _ => None,
        }
    }
}

/// A tree of structural path segments. Segments shared between edits are
/// merged, so an edit script renders as one tree rooted at the module.
#[derive(Clone, Debug)]
pub struct PathTree {
    segment: String,
    edits: Vec<(EditMarker, String)>,
    children: Vec<PathTree>,
}

impl PathTree {
    pub fn new(root: &str) -> Self {
        Self {
            segment: root.to_string(),
            edits: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Record an edit at the node reached by following `path` from this tree's
    /// children. The first segment equal to the root segment is skipped.
    pub fn add_edit<S: AsRef<str>>(&mut self, path: &[S], marker: EditMarker, label: &str) {
        let mut segments = path.iter().map(|s| s.as_ref()).peekable();
        if segments.peek() == Some(&self.segment.as_str()) {
            segments.next();
        }

        let mut node = self;
        for segment in segments {
            let position = node.children.iter().position(|c| c.segment == segment);
            let index = match position {
                Some(index) => index,
                None => {
                    node.children.push(PathTree::new(segment));
                    node.children.len() - 1
                }
            };
            node = &mut node.children[index];
        }
        node.edits.push((marker, label.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.edits.is_empty()
    }

    pub fn print(&self) -> io::Result<String> {
        let mut output = Vec::new();
        ptree::write_tree(self, &mut output)?;
        String::from_utf8(output).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl TreeItem for PathTree {
    type Child = Self;

    fn write_self<W: Write>(&self, f: &mut W, style: &Style) -> io::Result<()> {
        let edits = self
            .edits
            .iter()
            .map(|(marker, label)| format!(" [{} {}]", marker.symbol(), label))
            .collect::<String>();

        write!(f, "{}", style.paint(format!("{}{}", self.segment, edits)))
    }

    fn children(&self) -> Cow<'_, [Self::Child]> {
        Cow::Borrowed(&self.children)
    }
}
