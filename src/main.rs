//! shipit CLI entry point

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shipit")]
#[command(author, version, about = "Stage, commit, and push to origin/master in one step", long_about = None)]
struct Cli {
    /// Commit message; all words are joined with single spaces.
    /// Defaults to "latest updates" when omitted.
    #[arg(trailing_var_arg = true)]
    message: Vec<String>,

    /// Enable debug logging (shows each git invocation)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("shipit=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    shipit::cli::commands::ship::run_ship(&cli.message)
}
