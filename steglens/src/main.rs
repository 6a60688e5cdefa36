use log::error;
use std::process::ExitCode;
use steglens::cli::{self, Config};

fn main() -> ExitCode {
    // Keep the handle alive so buffered log lines are flushed on exit
    let _logger = match cli::setup_logging() {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("{}", e);
            None
        }
    };

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}\n{}", e, cli::USAGE);
            return ExitCode::from(2);
        }
    };

    match cli::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
