#![allow(clippy::print_stderr)]

use clap::Parser;
use irlink_cli::args::CliArgs;
use irlink_cli::driver;
use irlink_cli::reporter::Reporter;
use std::io::IsTerminal;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DIAGNOSTICS: i32 = 1;
const EXIT_FAILURE: i32 = 2;

fn main() {
    // IRLINK_LOG / IRLINK_LOG_FORMAT; see tracing_config.rs.
    irlink_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    std::process::exit(run(&args));
}

fn run(args: &CliArgs) -> i32 {
    let result = match driver::run(args) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {err:#}");
            return EXIT_FAILURE;
        }
    };

    if !result.succeeded() {
        let reporter = Reporter::new(args.color.enabled(std::io::stderr().is_terminal()));
        eprintln!("{}", reporter.render(&result.diagnostics));
        eprintln!();
        eprintln!("{}", reporter.summary(&result.diagnostics));
        return EXIT_DIAGNOSTICS;
    }

    if let Err(err) = driver::write_output(&result, args) {
        eprintln!("error: {err:#}");
        return EXIT_FAILURE;
    }
    EXIT_SUCCESS
}
