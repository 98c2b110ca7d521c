//! QuietPage renders short quotes onto a fixed-size grayscale page and exports the result
//! as a 24-bit BMP, the format low-power e-ink screens expect.
//!
//! The pipeline is:
//!
//! - Describe the page with a [`RenderRequest`] and an [`OutputConfig`]
//! - Draw it through the [`DrawSurface`]/[`TextMeasurer`] capabilities ([`render`]),
//!   optionally supersampled and area-averaged back down ([`render_frame`])
//! - Encode the final frame with [`encode_bmp`]
//!
//! [`QuoteRenderer`] bundles those steps over the CPU backend ([`CpuCanvas`]).
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

pub(crate) mod encode;
pub(crate) mod layout;
pub(crate) mod model;
pub(crate) mod render;
pub(crate) mod text;

pub use crate::foundation::core::{Point, Rect, Rgba8};
pub use crate::foundation::error::{QuoteError, QuoteResult};

pub use crate::encode::bmp::{BmpImage, bmp_row_size, encode_bmp, luma};
pub use crate::layout::placement::{
    TextPlacement, anchor_for, footer_origin, footer_reserved_height, layout_text_block,
    line_height_px,
};
pub use crate::model::config::OutputConfig;
pub use crate::model::request::{
    Alignment, BorderStyle, DEFAULT_FAMILY, DEFAULT_FONT_SIZE_PX, FontSpec, MAX_FONT_SIZE_PX,
    PLACEHOLDER_QUOTE, RenderRequest,
};
pub use crate::render::border::{BorderMetrics, draw_border};
pub use crate::render::cpu::CpuCanvas;
pub use crate::render::downsample::downsample;
pub use crate::render::raster::{render, render_bmp, render_frame};
pub use crate::render::session::{PendingFont, QuoteRenderer};
pub use crate::render::surface::{
    DrawSurface, Frame, TextAnchor, TextBaseline, TextMeasurer, TextPaint,
};
pub use crate::text::engine::{FaceInfo, FontBook, TextEngine};
pub use crate::text::wrap::wrap_text;
