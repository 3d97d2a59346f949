//! Raster decoder: bottom-up, row-padded 8-bit indexed or 24-bit BGR rows.

use std::io::{self, Read};

use enough::Stop;
use log::{trace, warn};

use super::header::InfoHeader;
use super::palette::Palette;
use crate::buffer::{PixelBuffer, pixel_count};
use crate::error::BmpError;
use crate::pixel::Color;

/// Pixels reserved up front; more are allocated only as rows arrive.
const MAX_PREALLOC_PIXELS: usize = 1 << 20;
const MAX_PREALLOC_ROW_BYTES: usize = 1 << 16;

/// Decode `info.height` raster rows from the current stream position.
///
/// Each on-disk row `y` is stored bottom-up and lands in natural row
/// `height - y - 1`. Row padding is read and dropped. 8-bit rows are
/// resolved through `palette`, which must be present for them.
pub fn read_pixel_buffer<R: Read>(
    reader: &mut R,
    info: &InfoHeader,
    palette: Option<&Palette>,
    stop: &dyn Stop,
) -> Result<PixelBuffer, BmpError> {
    let palette = match info.bpp {
        8 => Some(palette.ok_or(BmpError::MissingPalette)?),
        24 => None,
        other => return Err(BmpError::UnsupportedBitDepth(other)),
    };

    let len = pixel_count(info.width, info.height)?;
    if len == 0 {
        // no rows, or rows of zero bytes: nothing to read
        return PixelBuffer::new(info.width, info.height);
    }
    let width = info.width as usize;
    let height = info.height;
    let row_size = info.row_size();
    trace!("decoding {}x{height} raster, {row_size} bytes per row", info.width);

    // Grow with the data actually read so a header declaring a huge image
    // over a short stream fails before the whole grid is allocated.
    let mut pixels = Vec::with_capacity(len.min(MAX_PREALLOC_PIXELS));
    let mut row = Vec::with_capacity(row_size.min(MAX_PREALLOC_ROW_BYTES));
    for y in 0..height {
        if y % 16 == 0 {
            stop.check()?;
        }
        row.clear();
        let read = reader.by_ref().take(row_size as u64).read_to_end(&mut row)?;
        if read != row_size {
            return Err(BmpError::TruncatedInput);
        }

        match palette {
            Some(palette) => {
                for &index in &row[..width] {
                    pixels.push(palette.lookup(index)?);
                }
            }
            None => {
                pixels.extend(
                    row[..width * 3]
                        .chunks_exact(3)
                        .map(|bgr| Color::from_bgr_bytes([bgr[0], bgr[1], bgr[2]])),
                );
            }
        }
    }

    // rows arrived bottom-up: reversing everything flips the row order and
    // mirrors each row, reversing each row undoes the mirror
    pixels.reverse();
    for line in pixels.chunks_exact_mut(width) {
        line.reverse();
    }
    PixelBuffer::from_pixels(info.width, info.height, pixels)
}

/// Discard bytes up to `raster_offset`, given `consumed` bytes already read.
///
/// An offset pointing back into data already read is left alone; the
/// raster is then taken to start right where the reader stands.
pub(crate) fn skip_to_raster<R: Read>(
    reader: &mut R,
    consumed: u64,
    raster_offset: u32,
) -> Result<(), BmpError> {
    let offset = u64::from(raster_offset);
    if offset < consumed {
        warn!("BMP raster offset {offset} lies inside the first {consumed} header bytes, ignoring it");
        return Ok(());
    }
    let gap = offset - consumed;
    if gap > 0 {
        trace!("skipping {gap} bytes before raster");
        let skipped = io::copy(&mut reader.by_ref().take(gap), &mut io::sink())?;
        if skipped != gap {
            return Err(BmpError::TruncatedInput);
        }
    }
    Ok(())
}
