//! Get command implementation

use anyhow::Result;

use crate::cli::Context;
use crate::i18n::fill;

/// Print the bare value so the output can be captured by scripts
pub fn execute(ctx: &Context, name: &str) -> Result<()> {
    match ctx.store.lookup(name)? {
        Some(record) => {
            println!("{}", record.value);
            Ok(())
        }
        None => anyhow::bail!(fill(ctx.messages.variable_not_found, &[name])),
    }
}
