//! UCI front end for the minimax opponent.
//!
//! Usage: `uci_engine [--config <path>]`

mod session;

use std::env;
use std::io::{self, BufRead};
use std::process::ExitCode;

use minimax_engine::{EngineConfig, MinimaxEngine};
use tracing::level_filters::LevelFilter;
use tracing::{error, info};

use session::{Flow, Session};

fn parse_config_path(args: &[String]) -> Result<Option<&str>, String> {
    match args {
        [] => Ok(None),
        [flag, path] if flag == "--config" || flag == "-c" => Ok(Some(path.as_str())),
        _ => Err(format!("usage: uci_engine [--config <path>], got {:?}", args)),
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = match parse_config_path(&args) {
        Ok(Some(path)) => EngineConfig::load(path),
        Ok(None) => Ok(EngineConfig::default()),
        Err(usage) => {
            eprintln!("{usage}");
            return ExitCode::FAILURE;
        }
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Validated when the config was loaded.
    let level = config.level_filter().unwrap_or(LevelFilter::INFO);
    // stdout belongs to the UCI protocol.
    if let Err(e) = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_ansi(false)
        .try_init()
    {
        eprintln!("Warning: logging disabled: {e}");
    }
    info!("starting at difficulty {}", config.difficulty);

    let engine = MinimaxEngine::from_config(&config);
    let mut session = Session::new(Box::new(engine), config.difficulty);

    // UCI engines communicate via stdin/stdout.
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("stdin: {e}");
                break;
            }
        };
        match session.handle(&line, &mut stdout) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => {
                error!("stdout: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
