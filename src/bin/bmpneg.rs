//! Write the photographic negative of a BMP image.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, Command, value_parser};
use log::info;
use zenbmp::cli;
use zenbmp::ops::{NegateOutcome, negate_file};
use zenbmp::{BmpError, Unstoppable};

#[rustfmt::skip]
fn create_cmd_args() -> Command {
    let cmd = Command::new("bmpneg")
        .about("Invert every color of an 8-bit or 24-bit BMP")
        .arg(Arg::new("in")
            .help("BMP file to read")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("out")
            .help("BMP file to write")
            .value_parser(value_parser!(PathBuf))
            .required(true));
    cli::with_logging_args(cmd)
}

fn run(input: &PathBuf, output: &PathBuf) -> Result<(), BmpError> {
    match negate_file(input, output, &Unstoppable)? {
        NegateOutcome::Reencoded { width, height } => {
            info!("Wrote {width}x{height} 24-bit negative to {}", output.display());
        }
        NegateOutcome::PaletteRewritten {
            palette_len,
            copied_bytes,
        } => {
            info!(
                "Inverted {palette_len} palette entries, copied {copied_bytes} raster bytes to {}",
                output.display()
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let options = create_cmd_args().get_matches();
    cli::setup_logger(&options);

    let input = options.get_one::<PathBuf>("in").expect("required by clap");
    let output = options.get_one::<PathBuf>("out").expect("required by clap");
    cli::exit_code(run(input, output))
}
