use crate::foundation::error::{QuoteError, QuoteResult};
use crate::render::surface::Frame;

/// Reduce a supersampled frame to `width x height` by area averaging.
pub fn downsample(frame: &Frame, width: u32, height: u32) -> QuoteResult<Frame> {
    if width == 0 || height == 0 {
        return Err(QuoteError::validation("downsample target must be non-empty"));
    }
    if width > frame.width || height > frame.height {
        return Err(QuoteError::validation(format!(
            "cannot downsample {}x{} up to {width}x{height}",
            frame.width, frame.height
        )));
    }
    if width == frame.width && height == frame.height {
        return Ok(frame.clone());
    }

    let src = image::RgbaImage::from_raw(frame.width, frame.height, frame.data.clone())
        .ok_or_else(|| QuoteError::validation("frame buffer does not match its dimensions"))?;
    let out = image::imageops::thumbnail(&src, width, height);
    tracing::debug!(
        from_w = frame.width,
        from_h = frame.height,
        width,
        height,
        "downsampled frame"
    );
    Frame::from_rgba8(width, height, out.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/render/downsample.rs"]
mod tests;
