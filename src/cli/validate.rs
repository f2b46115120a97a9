//! Input validation for names and values typed by the user

use crate::i18n::{fill, Messages};
use crate::parser::NAME_RE;
use crate::utils::strings::is_single_line;

/// A name that can be written as `export NAME=...` and found again
pub fn check_name(name: &str, msg: &Messages) -> Result<(), String> {
    if name.is_empty() {
        return Err(msg.name_empty.to_string());
    }
    if !NAME_RE.is_match(name) {
        return Err(fill(msg.name_invalid, &[name]));
    }
    Ok(())
}

/// A value that fits on one declaration line
pub fn check_value(value: &str, msg: &Messages) -> Result<(), String> {
    if value.is_empty() {
        return Err(msg.value_empty.to_string());
    }
    if !is_single_line(value) {
        return Err(msg.value_multiline.to_string());
    }
    Ok(())
}
