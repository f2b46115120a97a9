//! Declaration records and parsed lines

use serde::{Deserialize, Serialize};

/// One `export NAME=VALUE` declaration.
///
/// `value` is stored unquoted: a single surrounding pair of double quotes
/// is removed when the record is read from a file, and added back when it
/// is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableRecord {
    pub name: String,
    pub value: String,
}

impl VariableRecord {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for VariableRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// A single line of a configuration file.
///
/// Both variants keep the original text so that serializing an unmodified
/// file reproduces it line for line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// An `export` line that parsed into a record
    Declaration { record: VariableRecord, raw: String },
    /// Anything else: comments, blanks, aliases, functions, code
    Other(String),
}

impl Line {
    /// Original text of the line, without its terminator
    pub fn raw(&self) -> &str {
        match self {
            Line::Declaration { raw, .. } => raw,
            Line::Other(raw) => raw,
        }
    }

    /// Line text with a CRLF remnant removed, used for matching
    pub fn text(&self) -> &str {
        let raw = self.raw();
        raw.strip_suffix('\r').unwrap_or(raw)
    }

    pub fn record(&self) -> Option<&VariableRecord> {
        match self {
            Line::Declaration { record, .. } => Some(record),
            Line::Other(_) => None,
        }
    }
}
