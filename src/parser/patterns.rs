//! # Declaration Patterns
//!
//! Regex patterns for recognizing `export` lines.
//!
//! `EXPORT_RE` classifies lines while parsing a whole file. Lookups for a
//! single variable go through [`declaration_matcher`], which embeds the
//! escaped name so that `FOO` never matches `FOOBAR` and metacharacters in
//! a name are taken literally.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches an export statement: `export VAR=value` or `export VAR="value"`
    ///
    /// Captures:
    /// - Group 1: variable name (anything up to whitespace or `=`)
    /// - Group 2: value (everything after `=`, quotes included)
    pub static ref EXPORT_RE: Regex = Regex::new(
        r#"^export\s+([^\s=]+)=(.*)$"#
    ).unwrap();

    /// Valid variable name for user input
    pub static ref NAME_RE: Regex = Regex::new(
        r#"^[A-Za-z_][A-Za-z0-9_]*$"#
    ).unwrap();
}

/// Build the lookup pattern for one variable.
///
/// Captures:
/// - Group 1: value (everything after `=`, quotes included)
pub fn declaration_matcher(name: &str) -> Regex {
    let pattern = format!(r#"^export\s+{}=(.*)$"#, regex::escape(name));
    Regex::new(&pattern).expect("escaped name is always a valid pattern")
}
