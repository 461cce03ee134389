//! Parser CLI: reads `tokens.txt` and prints the syntax tree or the
//! diagnostic that stopped the parse.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Parses the token interchange file written by `cfescan`.
#[derive(Parser, Debug)]
#[command(name = "cfeparse")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parser for the C99-subset front end", long_about = None)]
struct Args {
    /// Raise log verbosity to debug.
    #[arg(short, long, env = "CFE_VERBOSE")]
    verbose: bool,

    /// Path to an explicit cfe.toml, bypassing the standard lookup.
    #[arg(short, long, env = "CFE_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = cfe_drv::init_logging(args.verbose) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    let config = match cfe_drv::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let tokens_path = PathBuf::from(&config.tokens_path);
    let stdout = io::stdout();
    let stderr = io::stderr();

    match cfe_drv::run_parser(stdout.lock(), stderr.lock(), &tokens_path) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
