//! Shared command-line plumbing for the `bmpneg` and `bmpcmp` tools.

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{Level, debug, error};

use crate::error::BmpError;

/// Add the logging level flags to `cmd`.
#[rustfmt::skip]
pub fn with_logging_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors only"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information messages and higher (default)"))
}

/// Pick the log level from the flags added by [`with_logging_args`].
pub fn log_level(options: &ArgMatches) -> Level {
    let flag = |name: &str| options.get_flag(name);

    if flag("trace") {
        Level::Trace
    } else if flag("debug") {
        Level::Debug
    } else if flag("warn") {
        Level::Warn
    } else {
        Level::Info
    }
}

/// Set up logging options. Every record goes to stderr so tool output on
/// stdout stays clean.
pub fn setup_logger(options: &ArgMatches) {
    let level = log_level(options);
    // a logger may already be installed when embedded; keep that one
    if simple_logger::init_with_level(level).is_ok() {
        debug!("Log level: {level}");
    }
}

/// Map a tool result onto the process exit status, logging the failure.
pub fn exit_code(result: Result<(), BmpError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
