use clap::Parser;
use log::LevelFilter;

use filename_guard::cli::{Cli, Commands};
use filename_guard::commands::{run_action, run_check_command, run_patterns_command};

/// Set by the Actions runner when a workflow is re-run with debug logging.
const RUNNER_DEBUG_VAR: &str = "RUNNER_DEBUG";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check_command(args),
        Commands::Patterns(args) => run_patterns_command(args),
        Commands::Action(args) => run_action(args.mode),
    };

    std::process::exit(exit_code);
}

/// `RUST_LOG` wins over `-v`; `RUNNER_DEBUG=1` behaves like `-vv`.
fn init_logging(verbose: u8) {
    let runner_debug = std::env::var(RUNNER_DEBUG_VAR).is_ok_and(|v| v == "1");
    let level = match verbose {
        _ if runner_debug => LevelFilter::Debug,
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
