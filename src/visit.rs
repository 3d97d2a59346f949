//! Row-major pixel traversal with early exit.
//!
//! Scan order is natural: `y` from the top row down, `x` left to right
//! within a row. A visitor returns [`ControlFlow::Break`] to stop; no
//! further pixel is visited after that, not even the rest of the row.

use core::ops::ControlFlow;

use crate::buffer::PixelBuffer;
use crate::pixel::Color;

/// A per-pixel action with its own state.
///
/// Closures of the shape `FnMut(&mut Color, u32, u32) -> ControlFlow<()>`
/// implement it already; implement it by hand when the state deserves a
/// named type.
pub trait PixelVisitor {
    fn visit(&mut self, pixel: &mut Color, x: u32, y: u32) -> ControlFlow<()>;
}

impl<F> PixelVisitor for F
where
    F: FnMut(&mut Color, u32, u32) -> ControlFlow<()>,
{
    fn visit(&mut self, pixel: &mut Color, x: u32, y: u32) -> ControlFlow<()> {
        self(pixel, x, y)
    }
}

/// Call `action` on every pixel of `buffer`, allowing in-place mutation.
///
/// Returns `Break` if `action` asked to stop, `Continue` once every pixel
/// has been visited.
pub fn for_each_pixel<F>(buffer: &mut PixelBuffer, mut action: F) -> ControlFlow<()>
where
    F: FnMut(&mut Color, u32, u32) -> ControlFlow<()>,
{
    let width = buffer.width() as usize;
    if width == 0 {
        return ControlFlow::Continue(());
    }
    for (y, row) in buffer.pixels_mut().chunks_exact_mut(width).enumerate() {
        for (x, pixel) in row.iter_mut().enumerate() {
            action(pixel, x as u32, y as u32)?;
        }
    }
    ControlFlow::Continue(())
}

/// [`for_each_pixel`] driven by a [`PixelVisitor`].
pub fn visit_pixels<V: PixelVisitor + ?Sized>(
    buffer: &mut PixelBuffer,
    visitor: &mut V,
) -> ControlFlow<()> {
    for_each_pixel(buffer, |pixel, x, y| visitor.visit(pixel, x, y))
}

/// Read-only traversal, same order and stop rule as [`for_each_pixel`].
pub fn for_each_pixel_ref<F>(buffer: &PixelBuffer, mut action: F) -> ControlFlow<()>
where
    F: FnMut(&Color, u32, u32) -> ControlFlow<()>,
{
    let width = buffer.width() as usize;
    if width == 0 {
        return ControlFlow::Continue(());
    }
    for (y, row) in buffer.pixels().chunks_exact(width).enumerate() {
        for (x, pixel) in row.iter().enumerate() {
            action(pixel, x as u32, y as u32)?;
        }
    }
    ControlFlow::Continue(())
}
