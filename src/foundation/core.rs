pub use kurbo::{Point, Rect};

/// Straight (non-premultiplied) RGBA8 color.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white, the page background.
    pub const WHITE: Self = Self::gray(0xff);
    /// Opaque black, used for body text and borders.
    pub const BLACK: Self = Self::gray(0x00);

    /// Opaque color from RGB channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Opaque gray with all three channels set to `v`.
    pub const fn gray(v: u8) -> Self {
        Self::opaque(v, v, v)
    }

    /// Channels as a `[r, g, b, a]` array.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
