//! Core data models for exvar

mod config;
mod record;

pub use config::{BackupConfig, Config, StoreConfig, UiConfig};
pub use record::{Line, VariableRecord};
