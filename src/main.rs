use std::process::ExitCode;

use clap::Parser;
use tokensync::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    tokensync::cli::init_tracing(args.verbose());

    match tokensync::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
