use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::{QuoteError, QuoteResult};
use crate::model::request::FontSpec;

/// A rendered page as straight-alpha RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl Frame {
    /// Frame with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> Self {
        let px = color.to_array();
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..(width as usize * height as usize) {
            data.extend_from_slice(&px);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap raw RGBA8 bytes, checking the buffer length.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> QuoteResult<Self> {
        if data.len() != expected_len(width, height)? {
            return Err(QuoteError::validation(format!(
                "frame buffer has {} bytes, expected {}x{}x4",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// RGBA of the pixel at (`x`, `y`), or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data
            .get(i..i + 4)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }
}

pub(crate) fn expected_len(width: u32, height: u32) -> QuoteResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| QuoteError::validation("frame buffer size overflow"))
}

/// Horizontal anchor of a text run relative to its origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Origin is the left edge.
    Left,
    /// Origin is the horizontal center.
    Center,
    /// Origin is the right edge.
    Right,
}

/// Vertical anchor of a text run relative to its origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    /// Origin is the top of the line box.
    Top,
    /// Origin is the bottom of the line box.
    Bottom,
}

/// How a text run is positioned and colored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextPaint {
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical anchor.
    pub baseline: TextBaseline,
    /// Fill color.
    pub color: Rgba8,
}

/// Text width measurement.
///
/// Must return the same width for identical arguments within one render.
pub trait TextMeasurer {
    /// Width in pixels of `text` set in `font`.
    fn measure(&mut self, font: &FontSpec, text: &str) -> QuoteResult<f32>;
}

/// Minimal immediate-mode 2-D raster surface.
pub trait DrawSurface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Fill `rect` with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Rgba8) -> QuoteResult<()>;

    /// Stroke the outline of `rect`, centered on its edges.
    fn stroke_rect(&mut self, rect: Rect, line_width: f64, color: Rgba8) -> QuoteResult<()> {
        let h = line_width / 2.0;
        let outer = rect.inflate(h, h);
        let inner = rect.inflate(-h, -h);
        self.fill_rect(Rect::new(outer.x0, outer.y0, outer.x1, inner.y0), color)?;
        self.fill_rect(Rect::new(outer.x0, inner.y1, outer.x1, outer.y1), color)?;
        self.fill_rect(Rect::new(outer.x0, inner.y0, inner.x0, inner.y1), color)?;
        self.fill_rect(Rect::new(inner.x1, inner.y0, outer.x1, inner.y1), color)
    }

    /// Fill the closed polygon through `points`.
    fn fill_polygon(&mut self, points: &[Point], color: Rgba8) -> QuoteResult<()>;

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) -> QuoteResult<()>;

    /// Paint `text` in `font`, anchored at `origin`.
    fn fill_text(
        &mut self,
        text: &str,
        font: &FontSpec,
        origin: Point,
        paint: TextPaint,
    ) -> QuoteResult<()>;

    /// Read back everything drawn so far.
    fn read_rgba(&mut self) -> QuoteResult<Frame>;
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
