//! Interactive scanner CLI: prompts for a source file, scans it, and
//! writes the token interchange file.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Scans a C99-subset source file into `tokens.txt`.
#[derive(Parser, Debug)]
#[command(name = "cfescan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive scanner for the C99-subset front end", long_about = None)]
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
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    match cfe_drv::run_scanner(stdin.lock(), stdout.lock(), stderr.lock(), &tokens_path) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
