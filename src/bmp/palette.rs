//! Color table of palette-indexed images.

use std::io::{Read, Write};

use log::trace;

use super::header::InfoHeader;
use crate::error::BmpError;
use crate::pixel::{Color, PaddedColor};

/// Ordered palette entries, indexed by the raster's index bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    pub colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for a raster index byte.
    pub fn lookup(&self, index: u8) -> Result<Color, BmpError> {
        self.colors
            .get(usize::from(index))
            .copied()
            .ok_or(BmpError::PaletteIndexOutOfRange {
                index,
                len: self.colors.len(),
            })
    }

    /// Write every entry as a 4-byte padded color with a zero reserved byte.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), BmpError> {
        let mut out = Vec::with_capacity(self.colors.len() * 4);
        for &color in &self.colors {
            out.extend_from_slice(&PaddedColor::from(color).to_bytes());
        }
        writer.write_all(&out)?;
        Ok(())
    }
}

/// Read the palette declared by `info`.
///
/// Entry count is `colors_used`, or `2^bpp` when that is zero. Entries are
/// pushed as they are read, so a bogus count on a short stream fails with
/// [`BmpError::TruncatedInput`] instead of reserving memory up front.
pub fn read_palette<R: Read>(reader: &mut R, info: &InfoHeader) -> Result<Palette, BmpError> {
    let len = info.palette_len();
    trace!("reading {len} palette entries");

    let mut colors = Vec::with_capacity(len.min(256) as usize);
    let mut entry = [0u8; 4];
    for _ in 0..len {
        reader.read_exact(&mut entry)?;
        colors.push(PaddedColor::from_bytes(entry).color);
    }
    Ok(Palette { colors })
}
