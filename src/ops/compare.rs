//! Pixel-by-pixel comparison of two equally sized buffers.

use core::ops::ControlFlow;

use crate::buffer::PixelBuffer;
use crate::error::BmpError;
use crate::visit::for_each_pixel_ref;

/// Mismatches recorded before a comparison stops scanning.
pub const MAX_REPORTED_MISMATCHES: usize = 100;

/// Result of comparing two buffers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Comparison {
    /// Coordinates of differing pixels in scan order, at most the cap given
    /// to [`compare_buffers_with_cap`].
    pub mismatches: Vec<(u32, u32)>,
    /// Set when scanning stopped at the cap; more pixels may differ.
    pub stopped_early: bool,
}

impl Comparison {
    pub fn is_equal(&self) -> bool {
        self.mismatches.is_empty() && !self.stopped_early
    }
}

/// Compare with the default cap of [`MAX_REPORTED_MISMATCHES`].
pub fn compare_buffers(left: &PixelBuffer, right: &PixelBuffer) -> Result<Comparison, BmpError> {
    compare_buffers_with_cap(left, right, MAX_REPORTED_MISMATCHES)
}

/// Compare `left` against `right`, stopping after `cap` mismatches.
///
/// A cap of zero only answers whether the buffers differ: the scan stops at
/// the first difference without recording it. Buffers of different sizes
/// fail with [`BmpError::DimensionMismatch`].
pub fn compare_buffers_with_cap(
    left: &PixelBuffer,
    right: &PixelBuffer,
    cap: usize,
) -> Result<Comparison, BmpError> {
    if !left.same_dimensions(right) {
        return Err(BmpError::DimensionMismatch {
            left_width: left.width(),
            left_height: left.height(),
            right_width: right.width(),
            right_height: right.height(),
        });
    }

    let mut result = Comparison::default();
    let flow = for_each_pixel_ref(left, |pixel, x, y| {
        if pixel == right.at(x, y) {
            return ControlFlow::Continue(());
        }
        if result.mismatches.len() < cap {
            result.mismatches.push((x, y));
        }
        if result.mismatches.len() >= cap {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    result.stopped_early = flow.is_break();
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Color;

    fn with_differences(width: u32, height: u32, count: usize) -> (PixelBuffer, PixelBuffer) {
        let left = PixelBuffer::new(width, height).unwrap();
        let mut right = left.clone();
        for pixel in right.pixels_mut().iter_mut().take(count) {
            *pixel = Color::WHITE;
        }
        (left, right)
    }

    #[test]
    fn identical_buffers_are_equal() {
        let (left, right) = with_differences(20, 20, 0);
        let cmp = compare_buffers(&left, &right).unwrap();
        assert!(cmp.is_equal());
        assert!(!cmp.stopped_early);
    }

    #[test]
    fn reports_are_capped_at_one_hundred() {
        let (left, right) = with_differences(20, 20, 150);
        let cmp = compare_buffers(&left, &right).unwrap();
        assert_eq!(cmp.mismatches.len(), 100);
        assert!(!cmp.is_equal());
        assert!(cmp.stopped_early);
        assert_eq!(cmp.mismatches[0], (0, 0));
        assert_eq!(cmp.mismatches[99], (19, 4));
    }

    #[test]
    fn fewer_differences_than_cap_are_all_reported() {
        let (left, right) = with_differences(10, 10, 7);
        let cmp = compare_buffers(&left, &right).unwrap();
        assert_eq!(cmp.mismatches.len(), 7);
        assert!(!cmp.stopped_early);
    }

    #[test]
    fn single_channel_difference_counts() {
        let left = PixelBuffer::new(2, 2).unwrap();
        let mut right = left.clone();
        right.at_mut(1, 1).green = 1;
        let cmp = compare_buffers(&left, &right).unwrap();
        assert_eq!(cmp.mismatches, vec![(1, 1)]);
    }

    #[test]
    fn zero_cap_still_detects_difference() {
        let (left, right) = with_differences(4, 4, 3);
        let cmp = compare_buffers_with_cap(&left, &right, 0).unwrap();
        assert!(cmp.mismatches.is_empty());
        assert!(cmp.stopped_early);
        assert!(!cmp.is_equal());
    }

    #[test]
    fn different_dimensions_are_rejected() {
        let left = PixelBuffer::new(2, 3).unwrap();
        let right = PixelBuffer::new(3, 2).unwrap();
        assert!(matches!(
            compare_buffers(&left, &right),
            Err(BmpError::DimensionMismatch {
                left_width: 2,
                left_height: 3,
                right_width: 3,
                right_height: 2
            })
        ));
    }
}
