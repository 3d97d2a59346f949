use std::io::Write;

use enough::Stop;

use crate::bmp::header::{FileHeader, InfoHeader};
use crate::buffer::PixelBuffer;
use crate::error::BmpError;

/// 24-bit BMP encode request.
///
/// Headers are optional; when left out they are synthesized from the buffer
/// (signature "BM", raster at offset 54, 24 bpp, one plane).
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeRequest<'a> {
    file_header: Option<&'a FileHeader>,
    info_header: Option<&'a InfoHeader>,
}

impl<'a> EncodeRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file_header(mut self, header: &'a FileHeader) -> Self {
        self.file_header = Some(header);
        self
    }

    pub fn with_info_header(mut self, header: &'a InfoHeader) -> Self {
        self.info_header = Some(header);
        self
    }

    /// Encode into a new byte vector.
    pub fn encode(&self, buffer: &PixelBuffer, stop: impl Stop) -> Result<Vec<u8>, BmpError> {
        crate::bmp::encode(self.file_header, self.info_header, buffer, &stop)
    }

    /// Encode into `writer`.
    pub fn encode_to<W: Write>(
        &self,
        writer: &mut W,
        buffer: &PixelBuffer,
        stop: impl Stop,
    ) -> Result<(), BmpError> {
        crate::bmp::encode::write_pixel_buffer24(
            writer,
            self.file_header,
            self.info_header,
            buffer,
            &stop,
        )
    }
}
