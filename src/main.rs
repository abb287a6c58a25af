//! keyfrag CLI
//!
//! Prints the lines of the given files that might be part of SSH private key
//! files, in the order they appear.
//!
//! # Output
//!
//! Fragments go to stdout exactly as they would appear in a key file. Logs go
//! to stderr; the level is raised with `-v` or set with `RUST_LOG`.
//!
//! # Exit Codes
//!
//! - `0`: Every input was scanned
//! - `1`: At least one input could not be opened or mapped
//! - `2`: Invalid arguments, or stdout could not be written

use std::ffi::OsString;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::{LevelFilter, error, info, warn};

use keyfrag::input::Input;
use keyfrag::{FragmentWriter, HashConfig, ScanConfig, ScanError, Scanner};

#[derive(Debug, Parser)]
#[command(
    name = "keyfrag",
    version,
    about = "Prints lines from the given file(s) which might be part of SSH private key files"
)]
struct Cli {
    /// Print each distinct fragment only once across all inputs
    #[arg(short, long)]
    dedup: bool,

    /// Show more messages on stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Files to scan; `-` reads stdin
    #[arg(required = true, value_name = "FILE")]
    files: Vec<OsString>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            error!("{}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Scans every input and returns how many could not be loaded.
fn run(cli: &Cli) -> Result<usize, ScanError> {
    let config = ScanConfig::default()
        .with_hash_config(HashConfig::new(cli.dedup))
        .with_dedup(cli.dedup);
    let scanner = Scanner::new(config);

    let stdout = io::stdout();
    let mut writer = FragmentWriter::new(BufWriter::new(stdout.lock()), &config)?;
    let mut failed = 0;

    for arg in &cli.files {
        let input = Input::parse(arg);
        let data = match input.load() {
            Ok(data) => data,
            Err(e) if e.is_input_error() => {
                warn!("{}", e);
                failed += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        let count = writer.write_findings(&data, scanner.scan(&data))?;
        info!("{}: {} bytes, {} fragments", input, data.len(), count);
    }

    writer.flush()?;
    info!(
        "done: {} written, {} duplicates suppressed, {} inputs failed",
        writer.written(),
        writer.suppressed(),
        failed
    );
    Ok(failed)
}
