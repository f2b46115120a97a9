//! exvar - edit `export` declarations in a shell configuration file

use anyhow::Result;
use clap::Parser;

use exvar::cli::{commands, menu, Cli, Context};
use exvar::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = Context::from_cli(&cli)?;
    tracing::debug!(file = %ctx.config_file().display(), "target resolved");

    match &cli.command {
        Some(command) => commands::execute(&ctx, command),
        None => menu::run(&ctx, &mut menu::TermPrompt),
    }
}
