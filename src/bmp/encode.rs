//! BMP encoder: uncompressed bottom-up 24-bit output.

use std::io::Write;

use enough::Stop;

use super::header::{FileHeader, InfoHeader};
use super::row_size;
use crate::buffer::PixelBuffer;
use crate::error::BmpError;

/// Work out the headers actually written for `buffer`.
///
/// Absent headers are synthesized. Supplied headers keep their descriptive
/// fields (reserved word, pixel density, image size presence) while every
/// field that describes the raster is rewritten to match a 24-bit bottom-up
/// raster of the buffer's size placed right after the headers.
pub fn resolve_headers(
    file_header: Option<&FileHeader>,
    info_header: Option<&InfoHeader>,
    buffer: &PixelBuffer,
) -> Result<(FileHeader, InfoHeader), BmpError> {
    let (width, height) = (buffer.width(), buffer.height());
    let raster_len = (row_size(24, width) as u64)
        .checked_mul(u64::from(height))
        .and_then(|len| u32::try_from(len).ok())
        .filter(|len| len.checked_add(super::header::DEFAULT_RASTER_OFFSET).is_some())
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;

    let defaults = InfoHeader::for_24bit(width, height);
    let info = match info_header {
        Some(given) => InfoHeader {
            image_size: if given.image_size != 0 { raster_len } else { 0 },
            x_ppm: given.x_ppm,
            y_ppm: given.y_ppm,
            ..defaults
        },
        None => defaults,
    };

    let file = match file_header {
        Some(given) => FileHeader {
            reserved: given.reserved,
            ..FileHeader::for_raster(raster_len)
        },
        None => FileHeader::for_raster(raster_len),
    };

    Ok((file, info))
}

/// Write `buffer` as a complete 24-bit BMP: headers, then bottom-up rows
/// zero-padded to a 4-byte boundary.
pub fn write_pixel_buffer24<W: Write>(
    writer: &mut W,
    file_header: Option<&FileHeader>,
    info_header: Option<&InfoHeader>,
    buffer: &PixelBuffer,
    stop: &dyn Stop,
) -> Result<(), BmpError> {
    let (file, info) = resolve_headers(file_header, info_header, buffer)?;
    stop.check()?;

    file.write_to(writer)?;
    info.write_to(writer)?;
    if buffer.is_empty() {
        return Ok(());
    }

    let height = buffer.height();
    let data_len = buffer.width() as usize * 3;
    let mut row = vec![0u8; info.row_size()];
    for y in 0..height {
        if y % 16 == 0 {
            stop.check()?;
        }
        let src = buffer.row(height - y - 1);
        for (bgr, color) in row[..data_len].chunks_exact_mut(3).zip(src) {
            bgr.copy_from_slice(&color.to_bgr_bytes());
        }
        // padding tail of `row` is never touched and stays zero
        writer.write_all(&row)?;
    }

    Ok(())
}
