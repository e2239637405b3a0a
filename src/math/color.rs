//! Normalized RGB color samples

/// RGB color with channels normalized to `[0, 1]`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

impl Color {
    /// Create a color from normalized channels
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channels
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        let [r, g, b] = rgb;
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
        }
    }

    /// Convert to opaque 8-bit RGBA, saturating out-of-range channels
    pub fn to_rgba8(self) -> [u8; 4] {
        let quantize = |channel: f32| {
            num_traits::cast::<f32, u8>((channel.clamp(0.0, 1.0) * 255.0).round()).unwrap_or(0)
        };
        [quantize(self.r), quantize(self.g), quantize(self.b), 255]
    }

    /// Sum of squared per-channel differences
    pub fn distance_squared(self, other: Self) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        db.mul_add(db, dr.mul_add(dr, dg * dg))
    }
}
