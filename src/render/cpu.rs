use std::collections::HashMap;

use kurbo::Shape;

use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::{QuoteError, QuoteResult};
use crate::model::request::FontSpec;
use crate::render::surface::{
    DrawSurface, Frame, TextAnchor, TextBaseline, TextMeasurer, TextPaint,
};
use crate::text::engine::TextEngine;

/// CPU drawing surface powered by `vello_cpu`, with glyphs shaped by a [`TextEngine`].
pub struct CpuCanvas<'a> {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    text: &'a mut TextEngine,
    font_cache: HashMap<(u64, u32), vello_cpu::peniko::FontData>,
}

impl std::fmt::Debug for CpuCanvas<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuCanvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl<'a> CpuCanvas<'a> {
    /// Blank (transparent) canvas of `width x height` pixels.
    pub fn new(width: u32, height: u32, text: &'a mut TextEngine) -> QuoteResult<Self> {
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| QuoteError::validation("surface width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| QuoteError::validation("surface height exceeds u16"))?;
        if width_u16 == 0 || height_u16 == 0 {
            return Err(QuoteError::validation("surface must be non-empty"));
        }
        Ok(Self {
            width: width_u16,
            height: height_u16,
            ctx: vello_cpu::RenderContext::new(width_u16, height_u16),
            text,
            font_cache: HashMap::new(),
        })
    }

    fn font_data_for(&mut self, font: &parley::FontData) -> vello_cpu::peniko::FontData {
        let key = (font.data.id(), font.index);
        self.font_cache
            .entry(key)
            .or_insert_with(|| {
                vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(font.data.data().to_vec()),
                    font.index,
                )
            })
            .clone()
    }
}

impl TextMeasurer for CpuCanvas<'_> {
    fn measure(&mut self, font: &FontSpec, text: &str) -> QuoteResult<f32> {
        self.text.measure(font, text)
    }
}

impl DrawSurface for CpuCanvas<'_> {
    fn width(&self) -> u32 {
        u32::from(self.width)
    }

    fn height(&self) -> u32 {
        u32::from(self.height)
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) -> QuoteResult<()> {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_rect(&rect_to_cpu(rect));
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba8) -> QuoteResult<()> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(*first));
        for p in rest {
            path.line_to(point_to_cpu(*p));
        }
        path.close_path();

        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_path(&path);
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) -> QuoteResult<()> {
        let circle = kurbo::Circle::new(center, radius).to_path(0.1);
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_path(&bezpath_to_cpu(&circle));
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        font: &FontSpec,
        origin: Point,
        paint: TextPaint,
    ) -> QuoteResult<()> {
        let layout = self.text.layout_line(font, text, paint.color)?;
        let (w, h) = (f64::from(layout.width()), f64::from(layout.height()));
        let x = match paint.anchor {
            TextAnchor::Left => origin.x,
            TextAnchor::Center => origin.x - w / 2.0,
            TextAnchor::Right => origin.x - w,
        };
        let y = match paint.baseline {
            TextBaseline::Top => origin.y,
            TextBaseline::Bottom => origin.y - h,
        };

        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((x, y)));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                self.ctx.set_paint(color_to_cpu(brush));

                let font_data = self.font_data_for(run.run().font());
                // absolute pen positions; `glyphs()` only carries per-glyph offsets
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&font_data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }

    fn read_rgba(&mut self) -> QuoteResult<Frame> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        let mut data = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut data);
        Frame::from_rgba8(self.width(), self.height(), data)
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
