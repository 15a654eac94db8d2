use anstream::ColorChoice;
use anyhow::{Context, Result};
use clap::ArgMatches;
use kwgen::{Config, DiskFiles, Overrides, session::Session};
use std::{env, path::PathBuf};
use tracing::debug;

pub fn generate_command(args: &ArgMatches, color_choice: ColorChoice) -> Result<()> {
    let cwd = env::current_dir().context("Failed to get current directory")?;

    let config = Config::get(
        &cwd,
        args.get_one::<PathBuf>("config").map(PathBuf::as_path),
        &Overrides::from_args(args),
    )?;

    let mut sess = Session::new(config, color_choice);
    sess.measure_time = args.get_flag("verbose");

    debug!(
        input = %sess.config().input_path.display(),
        output = %sess.config().output_path.display(),
        file = ?sess.config().file,
        "resolved config"
    );

    let generated = sess.generate(&mut DiskFiles)?;

    if args.get_flag("print") {
        sess.shell().cond_print(&generated.code, false)?;
    }

    Ok(())
}
