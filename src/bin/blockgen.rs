#![allow(clippy::print_stderr)]

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use blockgen::cli::args::CliArgs;
use blockgen::cli::driver;

fn main() -> ExitCode {
    // Initialize tracing if BLOCKGEN_LOG or RUST_LOG is set (zero cost otherwise).
    blockgen::tracing_config::init_tracing();

    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let text = driver::run(args)?;
    driver::write_output(args.output.as_deref(), &text)
}
