//! Unset command implementation

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::Context;
use crate::i18n::fill;

/// Execute the unset command. A missing variable is reported, not an error.
pub fn execute(ctx: &Context, name: &str) -> Result<()> {
    let msg = ctx.messages;

    let record = match ctx.store.lookup(name)? {
        Some(record) => record,
        None => {
            ctx.print_warning(&fill(msg.variable_not_found, &[name]));
            return Ok(());
        }
    };

    ctx.print_info(&fill(
        msg.current_value,
        &[name.cyan().to_string().as_str(), record.value.dimmed().to_string().as_str()],
    ));

    if !ctx.assume_yes
        && !Confirm::new()
            .with_prompt(msg.remove_prompt)
            .default(false)
            .interact()?
    {
        println!("{}", msg.cancelled);
        return Ok(());
    }

    if ctx.store.delete(name)? {
        ctx.print_success(&fill(msg.variable_removed, &[name]));
        ctx.print_reload_hint();
    }

    Ok(())
}
