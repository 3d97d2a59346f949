/// A 24-bit color in BMP channel order: blue, green, red.
///
/// This is both the on-disk order of a 24-bit raster and the in-memory order
/// of a [`PixelBuffer`](crate::PixelBuffer).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Build a color from its channels in BMP order.
    pub const fn new(blue: u8, green: u8, red: u8) -> Self {
        Self { blue, green, red }
    }

    /// Build a color from the channels in RGB order.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { blue, green, red }
    }

    /// Read a color from three bytes laid out blue, green, red.
    pub const fn from_bgr_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    pub const fn to_bgr_bytes(self) -> [u8; 3] {
        [self.blue, self.green, self.red]
    }

    /// Each channel replaced by `255 - channel`.
    pub const fn negated(self) -> Self {
        Self::new(255 - self.blue, 255 - self.green, 255 - self.red)
    }
}

/// On-disk palette entry: a color followed by one reserved byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaddedColor {
    pub color: Color,
    pub reserved: u8,
}

impl PaddedColor {
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            color: Color::new(bytes[0], bytes[1], bytes[2]),
            reserved: bytes[3],
        }
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.color.blue, self.color.green, self.color.red, self.reserved]
    }
}

impl From<Color> for PaddedColor {
    fn from(color: Color) -> Self {
        Self { color, reserved: 0 }
    }
}

#[cfg(feature = "rgb")]
impl From<Color> for rgb::Rgb<u8> {
    fn from(c: Color) -> Self {
        rgb::Rgb {
            r: c.red,
            g: c.green,
            b: c.blue,
        }
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::Rgb<u8>> for Color {
    fn from(c: rgb::Rgb<u8>) -> Self {
        Color::from_rgb(c.r, c.g, c.b)
    }
}

#[cfg(feature = "rgb")]
impl From<Color> for rgb::Bgr<u8> {
    fn from(c: Color) -> Self {
        rgb::Bgr {
            b: c.blue,
            g: c.green,
            r: c.red,
        }
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::Bgr<u8>> for Color {
    fn from(c: rgb::Bgr<u8>) -> Self {
        Color::new(c.b, c.g, c.r)
    }
}
