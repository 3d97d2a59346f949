//! # zenbmp
//!
//! Decoder and encoder for uncompressed Windows BMP images with a
//! BITMAPINFOHEADER, plus the negation and comparison tools built on it.
//!
//! ## Supported Formats
//!
//! - **Decode**: 8-bit palette-indexed and 24-bit BGR, bottom-up rows padded
//!   to 4 bytes.
//! - **Encode**: 24-bit BGR only. 8-bit sources are promoted on save; the
//!   negation tool keeps them 8-bit by rewriting the palette in place.
//!
//! Pixels live in a [`PixelBuffer`] of [`Color`] values in natural order
//! (top row first) and BMP channel order (blue, green, red).
//!
//! ## Non-Goals
//!
//! - RLE and bitfield compression
//! - Bit depths other than 8 and 24
//! - BITMAPV4/V5 headers, ICC profiles, alpha
//!
//! ## Usage
//!
//! ```no_run
//! use core::ops::ControlFlow;
//! use zenbmp::{for_each_pixel, load_from_file, save_to_file24};
//!
//! let mut image = load_from_file("in.bmp")?;
//! let _ = for_each_pixel(&mut image.buffer, |pixel, _x, _y| {
//!     *pixel = pixel.negated();
//!     ControlFlow::Continue(())
//! });
//! save_to_file24("out.bmp", None, None, &image.buffer)?;
//! # Ok::<(), zenbmp::BmpError>(())
//! ```

#![forbid(unsafe_code)]

mod buffer;
mod error;
mod limits;
mod pixel;

pub mod bmp;
pub mod ops;
pub mod visit;

#[cfg(feature = "cli")]
pub mod cli;

mod decode;
mod encode;

// Re-exports
pub use bmp::header::{FileHeader, InfoHeader, read_headers};
pub use bmp::palette::{Palette, read_palette};
pub use bmp::{load_from_file, row_size, save_to_file24};
pub use buffer::PixelBuffer;
pub use decode::{DecodeRequest, LoadedBitmap, decode};
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;
pub use limits::Limits;
pub use pixel::{Color, PaddedColor};
pub use visit::{PixelVisitor, for_each_pixel};
