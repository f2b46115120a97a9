//! exvar - Shell export declaration editor
//!
//! Edits `export NAME="VALUE"` lines in a shell configuration file while
//! leaving every other line untouched.
//!
//! # Features
//!
//! - Look up, create, update and delete variables
//! - At most one declaration per name after any write
//! - Atomic rewrites (temp file + rename) with automatic backups
//! - Interactive menu and one-shot subcommands

pub mod backup;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod logging;
pub mod model;
pub mod parser;
pub mod store;
pub mod utils;

pub use model::{Config, Line, VariableRecord};
pub use store::{StoreError, VariableStore};
