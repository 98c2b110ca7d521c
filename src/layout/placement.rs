use crate::foundation::core::Point;
use crate::model::request::Alignment;
use crate::render::surface::TextAnchor;

/// Where the wrapped text block is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextPlacement {
    /// Anchor x shared by every line.
    pub x: f64,
    /// Horizontal anchor mode matching `x`.
    pub anchor: TextAnchor,
    /// Top of the first line.
    pub y_start: f64,
    /// Distance between consecutive line tops.
    pub line_height: f64,
}

impl TextPlacement {
    /// Top of line `index`.
    pub fn line_y(&self, index: usize) -> f64 {
        self.y_start + index as f64 * self.line_height
    }
}

/// Rounded line height for a body font size.
pub fn line_height_px(font_size_px: u32, multiplier: f32) -> f64 {
    (f64::from(font_size_px) * f64::from(multiplier)).round()
}

/// Vertical space kept free for a footer of `footer_font_size` pixels.
pub fn footer_reserved_height(footer_font_size: u32, has_footer: bool) -> f64 {
    if has_footer {
        f64::from(footer_font_size) * 3.0
    } else {
        0.0
    }
}

/// Anchor x and mode for `alignment`.
pub fn anchor_for(alignment: Alignment, canvas_width: f64, padding: f64) -> (f64, TextAnchor) {
    match alignment {
        Alignment::Left => (padding, TextAnchor::Left),
        Alignment::Right => (canvas_width - padding, TextAnchor::Right),
        Alignment::Center => (canvas_width / 2.0, TextAnchor::Center),
    }
}

/// Center the text block in the area above the footer, never above the top padding.
///
/// Blocks taller than the available area start at `padding` and run past the bottom edge.
pub fn layout_text_block(
    line_count: usize,
    line_height: f64,
    canvas_width: f64,
    canvas_height: f64,
    padding: f64,
    alignment: Alignment,
    footer_reserved: f64,
) -> TextPlacement {
    let (x, anchor) = anchor_for(alignment, canvas_width, padding);
    let total = line_count as f64 * line_height;
    let available = canvas_height - footer_reserved;
    let y_start = padding.max((available - total) / 2.0);

    TextPlacement {
        x,
        anchor,
        y_start,
        line_height,
    }
}

/// Bottom-center anchor of the footer line.
pub fn footer_origin(canvas_width: f64, canvas_height: f64, padding: f64) -> Point {
    Point::new(canvas_width / 2.0, canvas_height - padding * 0.6)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/placement.rs"]
mod tests;
