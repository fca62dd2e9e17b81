//! rawsh - a raw-mode terminal echo shell
//!
//! rawsh is the seed of an editor input subsystem: it switches the
//! controlling terminal into raw mode, reads one byte at a time, echoes
//! printable keys, and restores the terminal on every exit path.
//!
//! # Behavior
//!
//! - **Printable ASCII** (0x20..0x7f): echoed as typed
//! - **q / Q**: quit
//! - **Anything else**: consumed without output
//! - **End of input / read failure**: treated as quit (logged distinctly)
//!
//! # Quick Start
//!
//! ```text
//! rawsh              # echo printable keys, q to quit
//! rawsh -q           # same, without banner and farewell
//! ```
//!
//! Configuration lives in `~/.rawsh/config.toml`, logs in
//! `~/.rawsh/rawsh.log`.

mod buffer;
mod config;
mod shell;
mod term;

use std::env;
use std::io;

use tracing::info;
use tracing_subscriber::FmtSubscriber;

use crate::config::Config;
use crate::shell::ShellOptions;
use crate::term::session::CrosstermTerminal;

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Command-line options
#[derive(Debug, Default)]
struct CliArgs {
    /// Suppress banner and farewell output
    quiet: bool,
}

fn print_version() {
    eprintln!("rawsh {}", VERSION);
}

fn print_help() {
    eprintln!("rawsh {} - a raw-mode terminal echo shell", VERSION);
    eprintln!();
    eprintln!("Usage: rawsh [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -q, --quiet           Suppress banner and farewell messages");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  q or Q                Quit");
    eprintln!("  printable ASCII       Echoed as typed");
    eprintln!("  anything else         Ignored");
    eprintln!();
    eprintln!("Configuration: ~/.rawsh/config.toml");
    eprintln!("Log file:      ~/.rawsh/rawsh.log");
}

fn parse_args() -> Result<CliArgs, String> {
    let args: Vec<String> = env::args().collect();
    let mut cli = CliArgs::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-q" | "--quiet" => {
                cli.quiet = true;
            }
            arg => {
                return Err(format!("Unknown argument: {}. Use -h for help.", arg));
            }
        }
        i += 1;
    }

    Ok(cli)
}

/// Initialize logging to `~/.rawsh/rawsh.log`.
///
/// Logs go to a file, never to stdout: the terminal is in raw mode and the
/// echo stream's byte order is part of the contract.
fn init_logging(config: &Config) {
    let log_path = config::home_dir()
        .map(|h| h.join(".rawsh").join("rawsh.log"))
        .unwrap_or_else(|| std::path::PathBuf::from("rawsh.log"));

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    if let Some(file) = log_file {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(config.log_level())
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = match parse_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(2);
        }
    };

    let config = Config::load();
    if config.log.enabled {
        init_logging(&config);
    }

    info!("rawsh {} starting...", VERSION);

    // Restore the terminal even if we die to a signal mid-session.
    #[cfg(unix)]
    term::signals::install()?;

    let opts = if cli.quiet {
        ShellOptions::default()
    } else {
        ShellOptions {
            banner: Some(config.banner.clone()),
            farewell: Some(config.farewell.clone()),
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let result = shell::run_shell(CrosstermTerminal, &mut input, &mut output, &opts);

    // Force disable raw mode again just to be sure
    term::session::force_restore();

    result?;
    Ok(())
}
