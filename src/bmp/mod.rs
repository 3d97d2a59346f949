//! Uncompressed BITMAPINFOHEADER BMP codec (8-bit indexed and 24-bit).
//!
//! Use the top-level [`crate::load_from_file`], [`crate::save_to_file24`],
//! [`crate::DecodeRequest`] and [`crate::EncodeRequest`] for whole images;
//! the pieces here are exposed for callers that work on a stream directly.

pub mod decode;
pub mod encode;
pub mod header;
pub mod palette;

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use enough::{Stop, Unstoppable};

use crate::buffer::PixelBuffer;
use crate::decode::LoadedBitmap;
use crate::error::BmpError;
use crate::limits::Limits;
use header::{DEFAULT_RASTER_OFFSET, FileHeader, InfoHeader};

/// Byte length of one raster row: `ceil(bpp * width / 32) * 4`.
pub fn row_size(bpp: u16, width: u32) -> usize {
    let bits = u64::from(bpp) * u64::from(width);
    (bits.div_ceil(32) * 4) as usize
}

/// Decode a whole BMP stream: headers, palette (8-bit only), raster.
pub(crate) fn decode<R: Read>(
    reader: &mut R,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<LoadedBitmap, BmpError> {
    let (file_header, info_header) = header::read_headers(reader)?;
    check_limits(limits, &info_header)?;
    stop.check()?;

    let mut consumed = u64::from(DEFAULT_RASTER_OFFSET);
    let palette = if info_header.has_palette() {
        let palette = palette::read_palette(reader, &info_header)?;
        consumed += palette.len() as u64 * 4;
        Some(palette)
    } else {
        None
    };
    decode::skip_to_raster(reader, consumed, file_header.raster_offset)?;

    let buffer = decode::read_pixel_buffer(reader, &info_header, palette.as_ref(), stop)?;
    Ok(LoadedBitmap {
        file_header,
        info_header,
        palette,
        buffer,
    })
}

fn check_limits(limits: Option<&Limits>, info: &InfoHeader) -> Result<(), BmpError> {
    if let Some(limits) = limits {
        limits.check(info.width, info.height)?;
        let out_bytes = u64::from(info.width) * u64::from(info.height) * 3;
        limits.check_memory(out_bytes)?;
    }
    Ok(())
}

/// Encode to a 24-bit BMP in memory.
pub(crate) fn encode(
    file_header: Option<&FileHeader>,
    info_header: Option<&InfoHeader>,
    buffer: &PixelBuffer,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BmpError> {
    let capacity = DEFAULT_RASTER_OFFSET as usize
        + row_size(24, buffer.width()).saturating_mul(buffer.height() as usize);
    let mut out = Vec::with_capacity(capacity);
    encode::write_pixel_buffer24(&mut out, file_header, info_header, buffer, stop)?;
    Ok(out)
}

/// Load a BMP file.
///
/// The palette is only returned for 8-bit images. The file is closed before
/// returning on every path.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<LoadedBitmap, BmpError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| BmpError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&mut BufReader::new(file), None, &Unstoppable)
}

/// Save `buffer` as a 24-bit BMP file.
///
/// Headers left as `None` are synthesized from the buffer; see
/// [`encode::resolve_headers`] for how supplied headers are reconciled.
pub fn save_to_file24<P: AsRef<Path>>(
    path: P,
    file_header: Option<&FileHeader>,
    info_header: Option<&InfoHeader>,
    buffer: &PixelBuffer,
) -> Result<(), BmpError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| BmpError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    encode::write_pixel_buffer24(&mut writer, file_header, info_header, buffer, &Unstoppable)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_size_pads_to_four_bytes() {
        assert_eq!(row_size(24, 1), 4);
        assert_eq!(row_size(24, 4), 12);
        assert_eq!(row_size(24, 5), 16);
        assert_eq!(row_size(8, 1), 4);
        assert_eq!(row_size(8, 4), 4);
        assert_eq!(row_size(8, 5), 8);
        assert_eq!(row_size(24, 0), 0);
    }

    #[test]
    fn row_size_matches_float_ceiling() {
        for bpp in [8u16, 24] {
            for width in 0..200u32 {
                let float = (f64::from(bpp) * f64::from(width) / 32.0).ceil() as usize * 4;
                assert_eq!(row_size(bpp, width), float, "bpp {bpp} width {width}");
            }
        }
    }
}
