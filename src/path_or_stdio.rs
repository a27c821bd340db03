use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use ast_error_detection::{EditOperation, Error};

/// Where an edit script is read from, or where an annotation is written to.
/// `-` means standard input or output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOrStdio {
    Path(PathBuf),
    Stdio,
}

impl From<String> for PathOrStdio {
    fn from(s: String) -> Self {
        if s == "-" {
            PathOrStdio::Stdio
        } else {
            PathOrStdio::Path(PathBuf::from(s))
        }
    }
}

impl PathOrStdio {
    /// Name used in reports.
    pub fn filepath(&self) -> &str {
        match self {
            PathOrStdio::Path(p) => p.to_str().unwrap_or("input"),
            PathOrStdio::Stdio => "stdin",
        }
    }

    pub fn reader(&self) -> io::Result<Box<dyn Read>> {
        match self {
            PathOrStdio::Path(p) => Ok(Box::new(BufReader::new(File::open(p)?))),
            PathOrStdio::Stdio => Ok(Box::new(io::stdin())),
        }
    }

    pub fn writer(&self) -> io::Result<Box<dyn Write>> {
        match self {
            PathOrStdio::Path(p) => Ok(Box::new(BufWriter::new(File::create(p)?))),
            PathOrStdio::Stdio => Ok(Box::new(io::stdout())),
        }
    }

    /// Read and parse a JSON edit script.
    pub fn read_edit_script(&self) -> Result<Vec<EditOperation>, Error> {
        Ok(serde_json::from_reader(self.reader()?)?)
    }
}
