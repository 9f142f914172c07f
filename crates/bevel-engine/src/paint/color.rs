/// Straight-alpha RGBA color with channels in `[0, 1]`.
///
/// Straight alpha keeps per-channel interpolation literal: a gradient between
/// two colors blends each of R, G, B and A independently. Surfaces convert to
/// premultiplied form when compositing.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Creates a color from straight-alpha bytes (`0`–`255`).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a color from a packed `0xRRGGBBAA` integer.
    #[inline]
    pub fn from_rgba_u32(code: u32) -> Self {
        let [r, g, b, a] = code.to_be_bytes();
        Self::from_rgba8(r, g, b, a)
    }

    /// Rounds each channel to the nearest byte.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }

    /// Per-channel linear interpolation; `t = 0` yields `self`, `t = 1` yields `other`.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let s = 1.0 - t;
        Color::new(
            self.r * s + other.r * t,
            self.g * s + other.g * t,
            self.b * s + other.b * t,
            self.a * s + other.a * t,
        )
    }

    /// Multiplies every channel (alpha included) by `tint`, the way a glyph
    /// mask is colored by the text color.
    #[inline]
    pub fn scale(self, tint: Color) -> Color {
        Color::new(self.r * tint.r, self.g * tint.g, self.b * tint.b, self.a * tint.a)
    }

    /// Returns `(r * a, g * a, b * a, a)`.
    #[inline]
    pub fn premultiplied(self) -> [f32; 4] {
        [self.r * self.a, self.g * self.a, self.b * self.a, self.a]
    }
}
