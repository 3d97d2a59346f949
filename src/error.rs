use std::io;
use std::path::PathBuf;

use enough::StopReason;

/// Errors from BMP decoding, encoding and the tools built on top of them.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("cannot open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("not a BMP file (signature {0:02x?}, expected \"BM\")")]
    InvalidSignature([u8; 2]),

    #[error("unsupported info header of {0} bytes, only BITMAPINFOHEADER (40) is supported")]
    UnsupportedHeaderVariant(u32),

    #[error("bit depth {0} is not supported, only 8 and 24 are")]
    UnsupportedBitDepth(u16),

    #[error("dimensions differ: {left_width}x{left_height} vs {right_width}x{right_height}")]
    DimensionMismatch {
        left_width: u32,
        left_height: u32,
        right_width: u32,
        right_height: u32,
    },

    #[error("unexpected end of input")]
    TruncatedInput,

    #[error("palette index {index} out of range (palette has {len} entries)")]
    PaletteIndexOutOfRange { index: u8, len: usize },

    #[error("8-bit raster requires a palette")]
    MissingPalette,

    #[error("pixel count mismatch: need {needed}, got {actual}")]
    PixelCountMismatch { needed: usize, actual: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("i/o error: {0}")]
    Io(#[source] io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}

impl From<io::Error> for BmpError {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            BmpError::TruncatedInput
        } else {
            BmpError::Io(e)
        }
    }
}
