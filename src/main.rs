use std::process;

use anyhow::{Context, Result};
use colored::Colorize;
use human_panic::setup_panic;
use log::{error, info, LevelFilter};

use hex2dec::prelude::*;

fn run() -> Result<()> {
    let matches = hex2dec::get_matches();
    let options = RunOptions::from_matches(&matches).context("Failed to prepare the run")?;

    init_logger(options.verbosity, options.log_file.as_deref())
        .context("Failed to initialise the logger")?;

    let summary = perform_conversion(&options).with_context(|| {
        format!(
            "Failed to convert {} into {}",
            options.input.display(),
            options.output.display()
        )
    })?;

    let message = summary.to_string();
    info!("{}", format_message(&message, &message.green().to_string()));

    Ok(())
}

fn main() {
    setup_panic!();

    if let Err(err) = run() {
        // Errors before the logger exists still have to reach the user
        if log::max_level() == LevelFilter::Off {
            let message = format!("Error: {err:#}");
            eprintln!("{}", format_message(&message, &message.red().to_string()));
        } else {
            error!("Error: {err:#}");
        }
        process::exit(1);
    }
}
