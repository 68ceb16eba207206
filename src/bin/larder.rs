use clap::Parser;
use colored::Colorize;
use larder_core::cli::{self, Cli};
use larder_core::exit::LarderExit;
use tracing_subscriber::EnvFilter;

fn main() -> LarderExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli::dispatch::execute(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            LarderExit::Error
        }
    }
}

/// Logs go to stderr so stdout stays clean for results and JSON export.
fn init_logging(verbose: bool) {
    let default = if verbose { "larder_core=debug,larder=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
