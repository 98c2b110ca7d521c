use crate::encode::bmp::{BmpImage, encode_bmp};
use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::{QuoteError, QuoteResult};
use crate::layout::placement::{
    footer_origin, footer_reserved_height, layout_text_block, line_height_px,
};
use crate::model::config::OutputConfig;
use crate::model::request::{FontSpec, RenderRequest};
use crate::render::border::draw_border;
use crate::render::downsample::downsample;
use crate::render::surface::{
    DrawSurface, Frame, TextAnchor, TextBaseline, TextMeasurer, TextPaint,
};
use crate::text::wrap::wrap_text;

/// Paint `request` onto `surface`: background, border, body lines, then footer.
///
/// The surface must be `config.scaled_width() x config.scaled_height()`; every metric is
/// multiplied by the supersample scale so the page looks the same at any resolution.
#[tracing::instrument(skip_all, fields(scale = config.supersample_scale))]
pub fn render<S>(request: &RenderRequest, config: &OutputConfig, surface: &mut S) -> QuoteResult<()>
where
    S: DrawSurface + TextMeasurer + ?Sized,
{
    config.validate()?;
    request.validate()?;
    let scale = config.supersample_scale;
    let (width, height) = (config.scaled_width(), config.scaled_height());
    if surface.width() != width || surface.height() != height {
        return Err(QuoteError::validation(format!(
            "surface is {}x{}, expected {width}x{height}",
            surface.width(),
            surface.height()
        )));
    }
    let (w, h) = (f64::from(width), f64::from(height));
    let padding = config.scaled_padding();

    surface.fill_rect(Rect::new(0.0, 0.0, w, h), Rgba8::WHITE)?;
    draw_border(surface, request.border_style, w, h, padding)?;

    let body_font = request.font.scaled(scale);
    let max_width = config.max_text_width();
    let lines = wrap_text(request.effective_text(), max_width, |line| {
        surface.measure(&body_font, line)
    })?;

    let footer = request.footer();
    let footer_size = config.footer_font_size * scale;
    let line_height =
        line_height_px(request.font.size_px, config.line_height_multiplier) * f64::from(scale);
    let placement = layout_text_block(
        lines.len(),
        line_height,
        w,
        h,
        padding,
        request.alignment,
        footer_reserved_height(footer_size, footer.is_some()),
    );
    tracing::debug!(
        lines = lines.len(),
        y_start = placement.y_start,
        x = placement.x,
        "text block placed"
    );

    let body_paint = TextPaint {
        anchor: placement.anchor,
        baseline: TextBaseline::Top,
        color: Rgba8::BLACK,
    };
    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let origin = Point::new(placement.x, placement.line_y(i));
        surface.fill_text(line, &body_font, origin, body_paint)?;
    }

    if let Some(footer) = footer {
        let footer_font = FontSpec::regular(config.footer_family.clone(), footer_size);
        let paint = TextPaint {
            anchor: TextAnchor::Center,
            baseline: TextBaseline::Bottom,
            color: Rgba8::gray(config.footer_gray),
        };
        surface.fill_text(footer, &footer_font, footer_origin(w, h, padding), paint)?;
    }

    Ok(())
}

/// Render and read back the final-resolution frame.
///
/// With `supersample_scale > 1` the high-resolution surface is area-averaged down to
/// `config.width x config.height`; the returned frame is always final size.
pub fn render_frame<S>(
    request: &RenderRequest,
    config: &OutputConfig,
    surface: &mut S,
) -> QuoteResult<Frame>
where
    S: DrawSurface + TextMeasurer + ?Sized,
{
    render(request, config, surface)?;
    let frame = surface.read_rgba()?;
    if config.supersample_scale == 1 {
        return Ok(frame);
    }
    downsample(&frame, config.width, config.height)
}

/// Full pipeline: render, downsample, then encode the final frame as BMP.
pub fn render_bmp<S>(
    request: &RenderRequest,
    config: &OutputConfig,
    surface: &mut S,
) -> QuoteResult<BmpImage>
where
    S: DrawSurface + TextMeasurer + ?Sized,
{
    let frame = render_frame(request, config, surface)?;
    encode_bmp(&frame, config.width, config.height)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
