use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::QuoteResult;
use crate::model::request::BorderStyle;
use crate::render::surface::DrawSurface;

/// Stroke widths and offsets for a border, derived from the surface size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderMetrics {
    /// Distance of the outer rectangle from the surface edge.
    pub inset: f64,
    /// Stroke width.
    pub line_width: f64,
    /// Offset of the inner rectangle from the outer one.
    pub gap: f64,
}

impl BorderMetrics {
    /// Metrics for `style` on a surface `width` pixels wide.
    ///
    /// Everything scales with `width` and `padding`, so callers pass supersampled values.
    pub fn new(style: BorderStyle, width: f64, padding: f64) -> Self {
        let line_width = match style {
            BorderStyle::Simple => (width * 0.004).round(),
            BorderStyle::None | BorderStyle::Double | BorderStyle::Ornament => {
                (width * 0.003).round()
            }
        };
        Self {
            inset: padding * 0.5,
            line_width,
            gap: line_width * 3.0,
        }
    }
}

/// Draw the page border for `style` in black.
pub fn draw_border<S: DrawSurface + ?Sized>(
    surface: &mut S,
    style: BorderStyle,
    width: f64,
    height: f64,
    padding: f64,
) -> QuoteResult<()> {
    if style == BorderStyle::None {
        return Ok(());
    }

    let m = BorderMetrics::new(style, width, padding);
    let outer = Rect::new(m.inset, m.inset, width - m.inset, height - m.inset);
    surface.stroke_rect(outer, m.line_width, Rgba8::BLACK)?;
    if style == BorderStyle::Simple {
        return Ok(());
    }

    let inner = outer.inflate(-m.gap, -m.gap);
    surface.stroke_rect(inner, m.line_width, Rgba8::BLACK)?;
    if style == BorderStyle::Double {
        return Ok(());
    }

    let size = m.gap * 2.0;
    for corner in [
        Point::new(outer.x0, outer.y0),
        Point::new(outer.x1, outer.y0),
        Point::new(outer.x0, outer.y1),
        Point::new(outer.x1, outer.y1),
    ] {
        surface.fill_polygon(&diamond(corner, size), Rgba8::BLACK)?;
    }

    let dot_radius = m.line_width * 2.0;
    for mid in [
        Point::new(width / 2.0, outer.y0),
        Point::new(width / 2.0, outer.y1),
        Point::new(outer.x0, height / 2.0),
        Point::new(outer.x1, height / 2.0),
    ] {
        surface.fill_circle(mid, dot_radius, Rgba8::BLACK)?;
    }

    Ok(())
}

fn diamond(center: Point, size: f64) -> [Point; 4] {
    [
        Point::new(center.x, center.y - size),
        Point::new(center.x + size, center.y),
        Point::new(center.x, center.y + size),
        Point::new(center.x - size, center.y),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/render/border.rs"]
mod tests;
