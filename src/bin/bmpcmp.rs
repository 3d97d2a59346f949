//! Compare two BMP images pixel by pixel.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, Command, value_parser};
use log::{debug, error};
use zenbmp::ops::{MAX_REPORTED_MISMATCHES, compare_buffers_with_cap};
use zenbmp::{BmpError, cli, load_from_file};

#[rustfmt::skip]
fn create_cmd_args() -> Command {
    let cmd = Command::new("bmpcmp")
        .about("Report the pixels where two BMP images differ")
        .arg(Arg::new("first")
            .help("First BMP file")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("second")
            .help("Second BMP file")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("max-report")
            .long("max-report")
            .help("Stop after this many differing pixels")
            .value_parser(value_parser!(usize))
            .default_value("100"));
    cli::with_logging_args(cmd)
}

fn run(first: &PathBuf, second: &PathBuf, cap: usize) -> Result<(), BmpError> {
    let left = load_from_file(first)?;
    let right = load_from_file(second)?;
    debug!(
        "{} is {}-bit, {} is {}-bit",
        first.display(),
        left.source_bpp(),
        second.display(),
        right.source_bpp()
    );

    let cmp = compare_buffers_with_cap(&left.buffer, &right.buffer, cap)?;

    if cmp.is_equal() {
        println!("These pictures are equal");
        return Ok(());
    }
    if cmp.mismatches.is_empty() {
        // nothing to list with --max-report 0
        eprintln!("These pictures differ");
    } else {
        eprintln!("Next pixels are different:");
    }
    for (x, y) in &cmp.mismatches {
        eprintln!("x{x:<6} y{y:<6}");
    }
    if cmp.stopped_early {
        debug!("Stopped after {} differing pixels", cmp.mismatches.len());
    }
    Ok(())
}

fn main() -> ExitCode {
    let options = create_cmd_args().get_matches();
    cli::setup_logger(&options);

    let first = options.get_one::<PathBuf>("first").expect("required by clap");
    let second = options.get_one::<PathBuf>("second").expect("required by clap");
    let cap = options
        .get_one::<usize>("max-report")
        .copied()
        .unwrap_or(MAX_REPORTED_MISMATCHES);
    match run(first, second, cap) {
        Err(BmpError::DimensionMismatch {
            left_width,
            left_height,
            right_width,
            right_height,
        }) => {
            error!(
                "Dimensions differ: {} is {left_width}x{left_height} while {} is {right_width}x{right_height}",
                first.display(),
                second.display()
            );
            ExitCode::FAILURE
        }
        result => cli::exit_code(result),
    }
}
