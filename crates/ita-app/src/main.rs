use std::process::ExitCode;

use clap::Parser;

pub mod cli;
pub mod output;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    match output::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Human-readable message only; exit code is distinct per kind.
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
