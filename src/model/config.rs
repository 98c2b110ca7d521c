use crate::foundation::error::{QuoteError, QuoteResult};
use crate::model::request::validate_font_size;

/// Canvas geometry and typography shared by every render.
///
/// Defaults match the reference e-reader screen: 480x800 pixels, 40 px padding,
/// 1.6 line-height multiplier, no supersampling and a 16 px gray footer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Final image width in pixels.
    pub width: u32,
    /// Final image height in pixels.
    pub height: u32,
    /// Page margin in pixels.
    pub padding: u32,
    /// Line height as a multiple of the body font size.
    pub line_height_multiplier: f32,
    /// Render at `scale x` resolution and downsample; `1` renders directly.
    pub supersample_scale: u32,
    /// Footer font size in pixels, independent of the body size.
    pub footer_font_size: u32,
    /// Family used for the footer line.
    pub footer_family: String,
    /// Gray level of the footer text.
    pub footer_gray: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 800,
            padding: 40,
            line_height_multiplier: 1.6,
            supersample_scale: 1,
            footer_font_size: 16,
            footer_family: "Atkinson Hyperlegible".to_string(),
            footer_gray: 0x55,
        }
    }
}

impl OutputConfig {
    /// Check dimensions and scale before any surface is allocated.
    pub fn validate(&self) -> QuoteResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(QuoteError::validation(
                "output width and height must be > 0",
            ));
        }
        if self.supersample_scale == 0 {
            return Err(QuoteError::validation("supersample_scale must be >= 1"));
        }
        if !self.line_height_multiplier.is_finite() || self.line_height_multiplier <= 0.0 {
            return Err(QuoteError::validation(
                "line_height_multiplier must be finite and > 0",
            ));
        }
        if self.padding.saturating_mul(2) >= self.width {
            return Err(QuoteError::validation(
                "padding leaves no horizontal room for text",
            ));
        }
        validate_font_size("footer_font_size", self.footer_font_size)?;
        let scaled_w = u64::from(self.width) * u64::from(self.supersample_scale);
        let scaled_h = u64::from(self.height) * u64::from(self.supersample_scale);
        if scaled_w > u64::from(u16::MAX) || scaled_h > u64::from(u16::MAX) {
            return Err(QuoteError::validation(
                "supersampled surface exceeds 65535 px in one dimension",
            ));
        }
        Ok(())
    }

    /// Width of the drawing surface, including supersampling.
    pub fn scaled_width(&self) -> u32 {
        self.width * self.supersample_scale
    }

    /// Height of the drawing surface, including supersampling.
    pub fn scaled_height(&self) -> u32 {
        self.height * self.supersample_scale
    }

    /// Padding on the drawing surface, including supersampling.
    pub fn scaled_padding(&self) -> f64 {
        f64::from(self.padding * self.supersample_scale)
    }

    /// Widest a wrapped line may measure on the drawing surface.
    pub fn max_text_width(&self) -> f32 {
        (self.scaled_width() - 2 * self.padding * self.supersample_scale) as f32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/config.rs"]
mod tests;
