#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use sloan_cli::tracing::{TracingConfig, init_tracing};
use sloan_cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = init_tracing(TracingConfig {
        format: cli.log_format,
        level: cli.level.into(),
        filter: None,
    })
    .and_then(|()| run(&cli));

    match outcome {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{:?}", miette::Report::new(error));
            ExitCode::FAILURE
        }
    }
}
