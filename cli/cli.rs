mod cli_args;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::process;

use cli_args::Cli;
use codeprompt_core::{self as core, AppError, Config, TraversalOrder};

fn main() {
    let cli_args = Cli::parse();

    setup_logging(cli_args.verbose);
    log::debug!("CLI args parsed: {:?}", cli_args);

    let exit_code = match run_app(cli_args) {
        Ok(_) => {
            log::info!("Application finished successfully.");
            0
        }
        Err(e) => {
            let exit_code = match e.downcast_ref::<AppError>() {
                Some(AppError::Config(_)) => 1,
                Some(core_err) if core_err.is_io() => 2,
                _ => 1,
            };
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            exit_code
        }
    };
    log::debug!("Exiting with code {}", exit_code);
    process::exit(exit_code);
}

fn setup_logging(verbose: u8) {
    let log_level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();
    log::trace!("Logger initialized with level: {:?}", log_level);
}

fn run_app(cli: Cli) -> Result<()> {
    let project_root = Config::determine_project_root(cli.root.as_ref())
        .context("Failed to determine project root")?;
    log::info!("Project root determined: {}", project_root.display());

    let order = if cli.sorted {
        TraversalOrder::Sorted
    } else {
        TraversalOrder::Discovery
    };
    let config = Config::default().with_order(order);

    let collection = core::collect(&project_root, &config);
    output::report_failures(&collection.failures);
    let prompt = collection.render();

    if cli.stdout {
        output::write_to_stdout(&prompt)?;
    } else {
        let output_path = Config::resolve_output_path(cli.output.as_ref());
        core::write_prompt(&output_path, &prompt)
            .with_context(|| format!("Failed to save prompt to {}", output_path.display()))?;
        output::print_confirmation(&output_path, &collection);
    }
    Ok(())
}
