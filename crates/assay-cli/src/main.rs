//! Assay CLI - profile delimited text files for data quality.

mod cli;
mod commands;
mod logging;
mod source;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose, cli.quiet) {
        eprintln!("Warning: {}", e);
    }

    let result = match cli.command {
        Commands::Profile {
            file,
            delimiter,
            config,
            json,
            output,
            target,
        } => commands::profile::run(file, delimiter, config, json, output, target),

        Commands::Columns {
            file,
            delimiter,
            format,
            output,
        } => commands::columns::run(file, delimiter, format, output),

        Commands::Detect { file } => commands::detect::run(file),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
