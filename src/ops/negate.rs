//! Photographic negative of a BMP.
//!
//! 24-bit images go through the pixel visitor and are re-encoded. 8-bit
//! images only need their palette inverted: the index stream is copied
//! through byte for byte.

use core::ops::ControlFlow;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use enough::Stop;
use log::debug;

use crate::bmp::decode::{read_pixel_buffer, skip_to_raster};
use crate::bmp::encode::write_pixel_buffer24;
use crate::bmp::header::{DEFAULT_RASTER_OFFSET, FileHeader, InfoHeader, read_headers};
use crate::bmp::palette::{Palette, read_palette};
use crate::buffer::PixelBuffer;
use crate::error::BmpError;
use crate::pixel::Color;
use crate::visit::{PixelVisitor, visit_pixels};

/// Visitor replacing every channel with `255 - channel`. Never stops.
#[derive(Clone, Copy, Debug, Default)]
pub struct Negate;

impl PixelVisitor for Negate {
    fn visit(&mut self, pixel: &mut Color, _x: u32, _y: u32) -> ControlFlow<()> {
        *pixel = pixel.negated();
        ControlFlow::Continue(())
    }
}

pub fn negate_buffer(buffer: &mut PixelBuffer) {
    let _ = visit_pixels(buffer, &mut Negate);
}

pub fn negate_palette(palette: &mut Palette) {
    for color in &mut palette.colors {
        *color = color.negated();
    }
}

/// What [`negate_stream`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NegateOutcome {
    /// 24-bit source decoded, negated and written as a new 24-bit file.
    Reencoded { width: u32, height: u32 },
    /// 8-bit source: palette inverted, remaining bytes copied unchanged.
    PaletteRewritten { palette_len: usize, copied_bytes: u64 },
}

/// Input read far enough to know how the output is produced.
enum Plan {
    Reencode(PixelBuffer),
    RewritePalette {
        file_header: FileHeader,
        info_header: InfoHeader,
        palette: Palette,
    },
}

fn prepare<R: Read>(reader: &mut R, stop: &dyn Stop) -> Result<Plan, BmpError> {
    let (file_header, info_header) = read_headers(reader)?;
    if info_header.has_palette() {
        let mut palette = read_palette(reader, &info_header)?;
        negate_palette(&mut palette);
        return Ok(Plan::RewritePalette {
            file_header,
            info_header,
            palette,
        });
    }

    skip_to_raster(reader, u64::from(DEFAULT_RASTER_OFFSET), file_header.raster_offset)?;
    let mut buffer = read_pixel_buffer(reader, &info_header, None, stop)?;
    stop.check()?;
    negate_buffer(&mut buffer);
    Ok(Plan::Reencode(buffer))
}

fn finish<R: Read, W: Write>(
    plan: Plan,
    reader: &mut R,
    writer: &mut W,
    stop: &dyn Stop,
) -> Result<NegateOutcome, BmpError> {
    match plan {
        Plan::Reencode(buffer) => {
            write_pixel_buffer24(writer, None, None, &buffer, stop)?;
            Ok(NegateOutcome::Reencoded {
                width: buffer.width(),
                height: buffer.height(),
            })
        }
        Plan::RewritePalette {
            file_header,
            info_header,
            palette,
        } => {
            file_header.write_to(writer)?;
            info_header.write_to(writer)?;
            palette.write_to(writer)?;

            let mut copied_bytes = 0u64;
            let mut chunk = [0u8; 4096];
            loop {
                stop.check()?;
                let read = match reader.read(&mut chunk) {
                    Ok(0) => break,
                    Ok(n) => n,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e.into()),
                };
                writer.write_all(&chunk[..read])?;
                copied_bytes += read as u64;
            }
            debug!("copied {copied_bytes} bytes after the palette");
            Ok(NegateOutcome::PaletteRewritten {
                palette_len: palette.len(),
                copied_bytes,
            })
        }
    }
}

/// Negate the BMP read from `reader` into `writer`.
pub fn negate_stream<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    stop: &dyn Stop,
) -> Result<NegateOutcome, BmpError> {
    let plan = prepare(reader, stop)?;
    finish(plan, reader, writer, stop)
}

/// Negate the BMP at `input` into a new file at `output`.
///
/// The output file is only created once the input has been validated, so a
/// bad input never leaves an empty output behind.
pub fn negate_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    stop: &dyn Stop,
) -> Result<NegateOutcome, BmpError> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let file = File::open(input).map_err(|source| BmpError::FileOpen {
        path: input.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    let plan = prepare(&mut reader, stop)?;

    let file = File::create(output).map_err(|source| BmpError::FileOpen {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let outcome = finish(plan, &mut reader, &mut writer, stop)?;
    writer.flush()?;
    debug!("negated {} into {}: {outcome:?}", input.display(), output.display());
    Ok(outcome)
}
