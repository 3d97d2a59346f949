//! BITMAPFILEHEADER and BITMAPINFOHEADER parsing and serialization.

use std::io::{Read, Write};

use log::{debug, warn};

use super::row_size;
use crate::error::BmpError;

/// Size of the file header on disk.
pub const FILE_HEADER_SIZE: u32 = 14;
/// Size of a BITMAPINFOHEADER on disk.
pub const INFO_HEADER_SIZE: u32 = 40;
/// Offset of the raster when no palette follows the headers.
pub const DEFAULT_RASTER_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

pub const SIGNATURE: [u8; 2] = *b"BM";

/// BITMAPFILEHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: [u8; 2],
    pub file_size: u32,
    pub reserved: u32,
    /// Byte offset from the start of the file to the raster.
    pub raster_offset: u32,
}

impl FileHeader {
    /// Header for a file whose raster of `raster_len` bytes directly follows
    /// the two headers.
    pub fn for_raster(raster_len: u32) -> Self {
        Self {
            signature: SIGNATURE,
            file_size: DEFAULT_RASTER_OFFSET.saturating_add(raster_len),
            reserved: 0,
            raster_offset: DEFAULT_RASTER_OFFSET,
        }
    }

    pub fn to_bytes(&self) -> [u8; FILE_HEADER_SIZE as usize] {
        let mut out = [0u8; FILE_HEADER_SIZE as usize];
        out[0..2].copy_from_slice(&self.signature);
        out[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        out[6..10].copy_from_slice(&self.reserved.to_le_bytes());
        out[10..14].copy_from_slice(&self.raster_offset.to_le_bytes());
        out
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), BmpError> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }
}

/// BITMAPINFOHEADER (the 40-byte variant).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bpp: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_ppm: u32,
    pub y_ppm: u32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    /// Header describing an uncompressed bottom-up 24-bit raster.
    pub fn for_24bit(width: u32, height: u32) -> Self {
        Self {
            size: INFO_HEADER_SIZE,
            width,
            height,
            planes: 1,
            bpp: 24,
            compression: 0,
            image_size: 0,
            x_ppm: 0,
            y_ppm: 0,
            colors_used: 0,
            colors_important: 0,
        }
    }

    /// Padded byte length of one raster row.
    pub fn row_size(&self) -> usize {
        row_size(self.bpp, self.width)
    }

    /// Whether a palette follows the headers.
    pub fn has_palette(&self) -> bool {
        self.bpp <= 8
    }

    /// Palette entries declared by this header (0 when there is no palette).
    pub fn palette_len(&self) -> u32 {
        if !self.has_palette() {
            0
        } else if self.colors_used != 0 {
            self.colors_used
        } else {
            1 << self.bpp
        }
    }

    pub fn to_bytes(&self) -> [u8; INFO_HEADER_SIZE as usize] {
        let mut out = [0u8; INFO_HEADER_SIZE as usize];
        out[0..4].copy_from_slice(&self.size.to_le_bytes());
        out[4..8].copy_from_slice(&self.width.to_le_bytes());
        out[8..12].copy_from_slice(&self.height.to_le_bytes());
        out[12..14].copy_from_slice(&self.planes.to_le_bytes());
        out[14..16].copy_from_slice(&self.bpp.to_le_bytes());
        out[16..20].copy_from_slice(&self.compression.to_le_bytes());
        out[20..24].copy_from_slice(&self.image_size.to_le_bytes());
        out[24..28].copy_from_slice(&self.x_ppm.to_le_bytes());
        out[28..32].copy_from_slice(&self.y_ppm.to_le_bytes());
        out[32..36].copy_from_slice(&self.colors_used.to_le_bytes());
        out[36..40].copy_from_slice(&self.colors_important.to_le_bytes());
        out
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), BmpError> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }
}

// ── Little-endian field reader ──────────────────────────────────────

struct Fields<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Fields<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn u16(&mut self) -> u16 {
        let val = u16::from_le_bytes([self.data[self.pos], self.data[self.pos + 1]]);
        self.pos += 2;
        val
    }

    fn u32(&mut self) -> u32 {
        let val = u32::from_le_bytes([
            self.data[self.pos],
            self.data[self.pos + 1],
            self.data[self.pos + 2],
            self.data[self.pos + 3],
        ]);
        self.pos += 4;
        val
    }
}

/// Read the file header and info header from the current stream position.
///
/// The signature is checked before anything past its two bytes is read, so
/// a non-BMP stream loses at most two bytes.
pub fn read_headers<R: Read>(reader: &mut R) -> Result<(FileHeader, InfoHeader), BmpError> {
    let mut signature = [0u8; 2];
    reader.read_exact(&mut signature)?;
    if signature != SIGNATURE {
        return Err(BmpError::InvalidSignature(signature));
    }

    let mut rest = [0u8; (FILE_HEADER_SIZE - 2) as usize];
    reader.read_exact(&mut rest)?;
    let mut f = Fields::new(&rest);
    let file_header = FileHeader {
        signature,
        file_size: f.u32(),
        reserved: f.u32(),
        raster_offset: f.u32(),
    };

    // The size field decides whether the rest is a BITMAPINFOHEADER at all.
    let mut size = [0u8; 4];
    reader.read_exact(&mut size)?;
    let size = u32::from_le_bytes(size);
    if size != INFO_HEADER_SIZE {
        return Err(BmpError::UnsupportedHeaderVariant(size));
    }

    let mut rest = [0u8; (INFO_HEADER_SIZE - 4) as usize];
    reader.read_exact(&mut rest)?;
    let mut f = Fields::new(&rest);
    let info_header = InfoHeader {
        size,
        width: f.u32(),
        height: f.u32(),
        planes: f.u16(),
        bpp: f.u16(),
        compression: f.u32(),
        image_size: f.u32(),
        x_ppm: f.u32(),
        y_ppm: f.u32(),
        colors_used: f.u32(),
        colors_important: f.u32(),
    };

    if info_header.bpp != 8 && info_header.bpp != 24 {
        return Err(BmpError::UnsupportedBitDepth(info_header.bpp));
    }

    debug!(
        "BMP file header: size {} raster offset {}",
        file_header.file_size, file_header.raster_offset
    );
    debug!(
        "BMP info header: {}x{} bpp {} compression {} image size {} colors used {} ppm {}x{}",
        info_header.width,
        info_header.height,
        info_header.bpp,
        info_header.compression,
        info_header.image_size,
        info_header.colors_used,
        info_header.x_ppm,
        info_header.y_ppm
    );
    if info_header.compression != 0 {
        warn!(
            "BMP compression field is {}, decoding as uncompressed",
            info_header.compression
        );
    }

    Ok((file_header, info_header))
}
