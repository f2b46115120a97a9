//! Shared helpers

pub mod path;
pub mod strings;
