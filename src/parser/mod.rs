//! Line-oriented parser for `export` declarations
//!
//! Parsing and persistence are kept apart: [`parse`] turns file content into
//! [`Line`]s, callers filter or extend that list, and [`serialize`] writes it
//! back. Lines that are not declarations are carried as-is.

pub mod patterns;

use crate::model::{Line, VariableRecord};
use crate::utils::strings::split_lines_preserve_trailing;

pub use patterns::{declaration_matcher, EXPORT_RE, NAME_RE};

/// Parse file content into lines
pub fn parse(content: &str) -> Vec<Line> {
    split_lines_preserve_trailing(content)
        .into_iter()
        .map(parse_line)
        .collect()
}

/// Classify a single line
pub fn parse_line(line: &str) -> Line {
    let text = line.strip_suffix('\r').unwrap_or(line);
    match EXPORT_RE.captures(text) {
        Some(caps) => Line::Declaration {
            record: VariableRecord::new(&caps[1], unquote(&caps[2])),
            raw: line.to_string(),
        },
        None => Line::Other(line.to_string()),
    }
}

/// Join lines back into file content, newline-terminated
pub fn serialize(lines: &[Line]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line.raw());
        out.push('\n');
    }
    out
}

/// Strip one surrounding pair of double quotes, if both are present.
///
/// This is not shell unquoting: inner quotes, escapes and single quotes
/// are left alone.
pub fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Render a declaration line. The value is quoted verbatim, without escaping.
pub fn render(record: &VariableRecord) -> String {
    format!("export {}=\"{}\"", record.name, record.value)
}

/// Build a declaration line for `record`
pub fn declaration(record: VariableRecord) -> Line {
    let raw = render(&record);
    Line::Declaration { record, raw }
}

/// Every declaration in file order
pub fn records(lines: &[Line]) -> impl Iterator<Item = &VariableRecord> {
    lines.iter().filter_map(Line::record)
}
