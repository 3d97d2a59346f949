use crate::error::BmpError;
use crate::pixel::Color;

/// An owned `width` x `height` grid of [`Color`] in natural order.
///
/// Row 0 is the top row of the image. Pixel `(x, y)` lives at index
/// `y * width + x` of [`pixels`](Self::pixels).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Allocate a black buffer. Zero width or height yields an empty buffer.
    pub fn new(width: u32, height: u32) -> Result<Self, BmpError> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![Color::BLACK; len],
        })
    }

    /// Wrap existing pixels; `pixels.len()` must equal `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self, BmpError> {
        let needed = pixel_count(width, height)?;
        if pixels.len() != needed {
            return Err(BmpError::PixelCountMismatch {
                needed,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<Color> {
        self.pixels
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// If `x >= width` or `y >= height`.
    pub fn at(&self, x: u32, y: u32) -> &Color {
        let idx = self.index(x, y);
        &self.pixels[idx]
    }

    /// Mutable slot for the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// If `x >= width` or `y >= height`.
    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut Color {
        let idx = self.index(x, y);
        &mut self.pixels[idx]
    }

    /// Bounds-checked pixel access.
    pub fn get(&self, x: u32, y: u32) -> Option<&Color> {
        if x < self.width && y < self.height {
            self.pixels.get(self.index(x, y))
        } else {
            None
        }
    }

    /// Natural row `y` (0 is the top row).
    pub fn row(&self, y: u32) -> &[Color] {
        let start = y as usize * self.width as usize;
        &self.pixels[start..start + self.width as usize]
    }

    pub fn row_mut(&mut self, y: u32) -> &mut [Color] {
        let start = y as usize * self.width as usize;
        let w = self.width as usize;
        &mut self.pixels[start..start + w]
    }

    /// Whether both buffers have the same width and height.
    pub fn same_dimensions(&self, other: &PixelBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Zero-copy view as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, Color> {
        imgref::ImgRef::new(&self.pixels, self.width as usize, self.height as usize)
    }

    /// Convert into an [`imgref::ImgVec`] without copying.
    #[cfg(feature = "imgref")]
    pub fn into_imgvec(self) -> imgref::ImgVec<Color> {
        imgref::ImgVec::new(self.pixels, self.width as usize, self.height as usize)
    }

    /// Copy out as RGB-ordered typed pixels.
    #[cfg(feature = "imgref")]
    pub fn to_rgb_imgvec(&self) -> imgref::ImgVec<rgb::Rgb<u8>> {
        let pixels = self.pixels.iter().map(|&c| c.into()).collect();
        imgref::ImgVec::new(pixels, self.width as usize, self.height as usize)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}

pub(crate) fn pixel_count(width: u32, height: u32) -> Result<usize, BmpError> {
    let too_large = BmpError::DimensionsTooLarge { width, height };
    let count = (width as usize)
        .checked_mul(height as usize)
        .ok_or(too_large)?;
    // Vec<Color> cannot exceed isize::MAX bytes.
    match count.checked_mul(core::mem::size_of::<Color>()) {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(count),
        _ => Err(BmpError::DimensionsTooLarge { width, height }),
    }
}
