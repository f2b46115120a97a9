//! Interactive three-option menu
//!
//! Each round reads a choice, runs it to completion, and comes back. Bad
//! input and store failures are reported and the menu continues; only a
//! failing terminal ends the loop early.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

use super::validate::{check_name, check_value};
use super::Context;
use crate::i18n::fill;

/// Terminal interaction used by the menu
pub trait Prompt {
    /// Index of the chosen item
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize>;
    /// A line of text; empty input yields `default` when one is given
    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String>;
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// [`Prompt`] backed by dialoguer
pub struct TermPrompt;

impl Prompt for TermPrompt {
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize> {
        Ok(Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?)
    }

    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Upsert,
    Delete,
    Exit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 3] = [MenuChoice::Upsert, MenuChoice::Delete, MenuChoice::Exit];
}

/// Run the menu until the user picks Exit
pub fn run(ctx: &Context, prompt: &mut impl Prompt) -> Result<()> {
    let msg = ctx.messages;
    let items = [msg.menu_upsert, msg.menu_delete, msg.menu_exit];

    loop {
        let index = prompt.select(msg.menu_prompt, &items)?;
        let choice = MenuChoice::ALL
            .get(index)
            .copied()
            .unwrap_or(MenuChoice::Exit);
        tracing::debug!(?choice, "menu choice");

        match choice {
            MenuChoice::Upsert => create_or_update(ctx, prompt)?,
            MenuChoice::Delete => delete(ctx, prompt)?,
            MenuChoice::Exit => {
                println!("{}", msg.goodbye);
                return Ok(());
            }
        }
        println!();
    }
}

/// Ask for a name, show its current value, ask for the new one and store it
pub fn create_or_update(ctx: &Context, prompt: &mut impl Prompt) -> Result<()> {
    let msg = ctx.messages;

    let name = prompt.input(msg.prompt_name, None)?.trim().to_string();
    if let Err(problem) = check_name(&name, msg) {
        ctx.print_warning(&problem);
        return Ok(());
    }

    let current = match ctx.store.lookup(&name) {
        Ok(current) => current,
        Err(e) => {
            ctx.print_error(&format!("{:#}", anyhow::Error::from(e)));
            return Ok(());
        }
    };
    match &current {
        Some(record) => ctx.print_info(&fill(msg.current_value, &[name.as_str(), record.value.as_str()])),
        None => ctx.print_info(&fill(msg.not_set, &[name.as_str()])),
    }

    let value = prompt.input(msg.prompt_value, current.as_ref().map(|r| r.value.as_str()))?;
    if let Err(problem) = check_value(&value, msg) {
        ctx.print_warning(&problem);
        return Ok(());
    }

    match ctx.store.upsert(&name, &value) {
        Ok(()) => {
            ctx.print_success(&fill(msg.variable_set, &[name.as_str(), value.as_str()]));
            ctx.print_reload_hint();
        }
        Err(e) => ctx.print_error(&format!("{:#}", anyhow::Error::from(e))),
    }
    Ok(())
}

/// Ask for a name and remove its declaration after confirmation
pub fn delete(ctx: &Context, prompt: &mut impl Prompt) -> Result<()> {
    let msg = ctx.messages;

    let name = prompt.input(msg.prompt_name, None)?.trim().to_string();
    if name.is_empty() {
        ctx.print_warning(msg.name_empty);
        return Ok(());
    }

    let current = match ctx.store.lookup(&name) {
        Ok(Some(record)) => record,
        Ok(None) => {
            ctx.print_warning(&fill(msg.variable_not_found, &[name.as_str()]));
            return Ok(());
        }
        Err(e) => {
            ctx.print_error(&format!("{:#}", anyhow::Error::from(e)));
            return Ok(());
        }
    };
    ctx.print_info(&fill(msg.current_value, &[name.as_str(), current.value.as_str()]));

    if !ctx.assume_yes && !prompt.confirm(msg.remove_prompt)? {
        println!("{}", msg.cancelled);
        return Ok(());
    }

    match ctx.store.delete(&name) {
        Ok(true) => {
            ctx.print_success(&fill(msg.variable_removed, &[name.as_str()]));
            ctx.print_reload_hint();
        }
        Ok(false) => ctx.print_warning(&fill(msg.variable_not_found, &[name.as_str()])),
        Err(e) => ctx.print_error(&format!("{:#}", anyhow::Error::from(e))),
    }
    Ok(())
}
