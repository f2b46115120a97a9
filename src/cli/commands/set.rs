//! Set command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::validate::{check_name, check_value};
use crate::cli::Context;
use crate::i18n::fill;

/// Execute the set command
pub fn execute(ctx: &Context, name: &str, value: &str) -> Result<()> {
    let msg = ctx.messages;
    let name = name.trim();

    check_name(name, msg).map_err(anyhow::Error::msg)?;
    check_value(value, msg).map_err(anyhow::Error::msg)?;

    if let Some(previous) = ctx.store.lookup(name)? {
        if previous.value == value {
            tracing::debug!(name, "value unchanged, rewriting anyway");
        } else {
            ctx.print_info(&fill(msg.current_value, &[name, previous.value.dimmed().to_string().as_str()]));
        }
    }

    ctx.store.upsert(name, value)?;

    ctx.print_success(&fill(msg.variable_set, &[name.cyan().to_string().as_str(), value]));
    ctx.print_reload_hint();

    Ok(())
}
