use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use wikinet_core::cli::{self, Cli};
use wikinet_core::exit::WikinetExit;

fn main() -> WikinetExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli::dispatch::execute(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            WikinetExit::from_error(&e)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "wikinet_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
