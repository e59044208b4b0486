//! Splinter CLI entry point.

use clap::Parser;
use colored::Colorize;
use splinter::cli::{self, Cli, EXIT_ERROR, EXIT_FAILED, EXIT_SUCCESS};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and are not failures.
            let code = if e.use_stderr() {
                EXIT_FAILED
            } else {
                EXIT_SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    cli::init_tracing(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let exit_code = match cli::run_lint(&cli, &mut out) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}
