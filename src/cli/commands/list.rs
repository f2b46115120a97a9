//! List command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;
use crate::i18n::fill;

const NAME_MIN_WIDTH: usize = 4;
const NAME_MAX_WIDTH: usize = 30;
const VALUE_MAX_WIDTH: usize = 60;

/// Truncate a string to fit within max_width, adding "..." if truncated
fn truncate_value(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        format!("{}...", s.chars().take(max_width - 3).collect::<String>())
    }
}

/// Execute the list command
pub fn execute(ctx: &Context) -> Result<()> {
    let msg = ctx.messages;
    let records = ctx.store.list()?;

    if records.is_empty() {
        println!("{}", msg.no_variables.dimmed());
        return Ok(());
    }

    let name_w = records
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(NAME_MIN_WIDTH, NAME_MAX_WIDTH);

    println!("{}", ctx.config_file().display().to_string().blue().bold());
    println!();
    println!(
        "{:<name_w$}  {}",
        msg.header_name.bold().cyan(),
        msg.header_value.bold().cyan(),
        name_w = name_w
    );
    println!("{}", "─".repeat(name_w + 2 + VALUE_MAX_WIDTH).dimmed());

    for record in &records {
        println!(
            "{:<name_w$}  {}",
            truncate_value(&record.name, name_w).yellow(),
            truncate_value(&record.value, VALUE_MAX_WIDTH),
            name_w = name_w
        );
    }

    println!();
    println!(
        "{}",
        fill(msg.total_variables, &[records.len().to_string().as_str()]).dimmed()
    );

    Ok(())
}
