mod config;
mod error;
mod paths;
mod script;

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{info, warn};
use simplelog::{Config, WriteLogger};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::script::Session;

const COMMANDS: &str = "\
Commands (one per line, `#` starts a comment):
  add                    append an empty item
  text <id> <text...>    replace an item's text
  focus <id>             start editing an item
  blur <id>              stop editing an item
  key <id> <key>         press a key (e.g. Backspace) in an item
  toggle <id>            select or unselect an item
  delete <id>            remove an item
  delete-selected        remove every selected item
  show                   print the list

<id> is an item id or #N for the N-th row.";

/// Reads checklist commands and prints the list as JSON after each command.
#[derive(Debug, Parser)]
#[command(name = "checklist", version, after_help = COMMANDS)]
struct Cli {
    /// Config file (defaults to config.json in the platform config directory).
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Only print the list on `show`.
    #[arg(short, long)]
    quiet: bool,

    /// Script to run; reads stdin when omitted or `-`.
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,
}

impl Cli {
    fn script(&self) -> Option<&Path> {
        self.script.as_deref().filter(|path| *path != Path::new("-"))
    }
}

/// Install the file logger in the platform cache directory.
///
/// Logging is best effort: without a cache directory the CLI runs unlogged.
fn init_logging(config: &CliConfig) -> Result<(), CliError> {
    let (Some(cache), Some(log_path)) = (paths::cache_dir(), paths::log_file()) else {
        return Ok(());
    };
    fs::create_dir_all(&cache)?;
    paths::rotate_logs();
    let log_file = File::create(&log_path)?;
    WriteLogger::init(config.log_level.into(), Config::default(), log_file)?;
    Ok(())
}

fn run(args: Cli) -> Result<(), CliError> {
    let config = CliConfig::load(args.config.as_deref())?;
    if let Err(e) = init_logging(&config) {
        eprintln!("warning: logging disabled: {}", e);
    }
    info!("Starting with {:?}", config);

    let mut session = Session::new(config.ids.generator())
        .quiet(args.quiet)
        .pretty(config.pretty);
    let stdout = io::stdout().lock();

    let result = match args.script() {
        Some(path) => {
            info!("Running script {}", path.display());
            let file = File::open(path)?;
            session.run(BufReader::new(file), stdout)
        }
        None => session.run(io::stdin().lock(), stdout),
    };
    match &result {
        Ok(()) => info!("Finished with {} items", session.list().items().len()),
        Err(e) => warn!("Script failed: {}", e),
    }
    result
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
