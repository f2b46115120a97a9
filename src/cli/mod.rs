//! CLI module

pub mod args;
pub mod commands;
pub mod context;
pub mod menu;
pub mod validate;

pub use args::Cli;
pub use context::Context;
