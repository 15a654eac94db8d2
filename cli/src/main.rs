use crate::{cli::cli, commands::generate::generate_command, tracing::setup_tracing};
use anstream::ColorChoice;
use anyhow::Result;
use kwgen::Shell;
use std::process::exit;

pub mod cli;
pub mod commands {
    pub mod generate;
}
mod tracing;

fn main() -> Result<()> {
    let args = cli().try_get_matches().unwrap_or_else(|err| err.exit());

    setup_tracing(args.get_flag("verbose"));

    let color_choice = if args.get_flag("no-color") {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    let mut shell = Shell::new(color_choice);

    match generate_command(&args, color_choice) {
        Ok(()) => Ok(()),
        Err(err) => {
            shell.error(format!("{:#}", err))?;

            exit(1);
        }
    }
}
