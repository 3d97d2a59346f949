use std::io::Read;

use enough::Stop;

use crate::bmp::header::{FileHeader, InfoHeader};
use crate::bmp::palette::Palette;
use crate::buffer::PixelBuffer;
use crate::error::BmpError;
use crate::limits::Limits;

/// A decoded BMP: headers as read, the palette of 8-bit images, and pixels.
#[derive(Clone, Debug)]
pub struct LoadedBitmap {
    pub file_header: FileHeader,
    pub info_header: InfoHeader,
    /// `Some` only for 8-bit images.
    pub palette: Option<Palette>,
    pub buffer: PixelBuffer,
}

impl LoadedBitmap {
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Bit depth of the source raster (8 or 24).
    pub fn source_bpp(&self) -> u16 {
        self.info_header.bpp
    }

    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }
}

/// Decode request builder over any byte stream.
///
/// ```no_run
/// use zenbmp::{DecodeRequest, Limits, Unstoppable};
///
/// let file = std::fs::File::open("in.bmp")?;
/// let limits = Limits { max_pixels: Some(64 << 20), ..Default::default() };
/// let image = DecodeRequest::new(std::io::BufReader::new(file))
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// println!("{}x{}", image.width(), image.height());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct DecodeRequest<'a, R> {
    reader: R,
    limits: Option<&'a Limits>,
}

impl<'a, R: Read> DecodeRequest<'a, R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            limits: None,
        }
    }

    /// Reject images exceeding `limits` before allocating pixels.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(mut self, stop: impl Stop) -> Result<LoadedBitmap, BmpError> {
        crate::bmp::decode(&mut self.reader, self.limits, &stop)
    }
}

/// Decode a BMP from a byte slice or any reader without limits.
pub fn decode<R: Read>(reader: R, stop: impl Stop) -> Result<LoadedBitmap, BmpError> {
    DecodeRequest::new(reader).decode(stop)
}
