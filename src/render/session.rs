use crate::encode::bmp::BmpImage;
use crate::foundation::error::QuoteResult;
use crate::model::config::OutputConfig;
use crate::model::request::RenderRequest;
use crate::render::cpu::CpuCanvas;
use crate::render::raster;
use crate::render::surface::Frame;
use crate::text::engine::{FontBook, TextEngine};

/// Renders quotes on the CPU backend with a fixed [`OutputConfig`].
///
/// Each call allocates its own surface, so renders never share pixel state.
#[derive(Debug)]
pub struct QuoteRenderer {
    engine: TextEngine,
    config: OutputConfig,
}

impl QuoteRenderer {
    /// Renderer over `fonts`; fails if `config` is invalid.
    pub fn new(fonts: FontBook, config: OutputConfig) -> QuoteResult<Self> {
        config.validate()?;
        Ok(Self {
            engine: TextEngine::new(fonts),
            config,
        })
    }

    /// Output configuration used by every render.
    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    /// Registered fonts.
    pub fn fonts(&self) -> &FontBook {
        self.engine.fonts()
    }

    /// Mutable font book, e.g. to register faces that finished loading.
    pub fn fonts_mut(&mut self) -> &mut FontBook {
        self.engine.fonts_mut()
    }

    /// Render `request` to a final-resolution frame.
    #[tracing::instrument(skip_all, fields(family = %request.font.family))]
    pub fn render_frame(&mut self, request: &RenderRequest) -> QuoteResult<Frame> {
        let mut canvas = CpuCanvas::new(
            self.config.scaled_width(),
            self.config.scaled_height(),
            &mut self.engine,
        )?;
        raster::render_frame(request, &self.config, &mut canvas)
    }

    /// Render `request` and encode it as BMP.
    #[tracing::instrument(skip_all, fields(family = %request.font.family))]
    pub fn render_bmp(&mut self, request: &RenderRequest) -> QuoteResult<BmpImage> {
        let mut canvas = CpuCanvas::new(
            self.config.scaled_width(),
            self.config.scaled_height(),
            &mut self.engine,
        )?;
        raster::render_bmp(request, &self.config, &mut canvas)
    }

    /// Render now, with a fallback face for any family that is not registered yet.
    ///
    /// Both the body family and, when a footer is drawn, the footer family are checked.
    /// When either is missing, the returned [`PendingFont`] re-renders exactly once after
    /// the face is supplied.
    pub fn render_with_pending_font(
        &mut self,
        request: &RenderRequest,
    ) -> QuoteResult<(BmpImage, Option<PendingFont>)> {
        let bmp = self.render_bmp(request)?;
        let missing = self.missing_families(request);
        if missing.is_empty() {
            return Ok((bmp, None));
        }
        tracing::debug!(families = ?missing, "rendered with fallback face");
        Ok((
            bmp,
            Some(PendingFont {
                request: request.clone(),
                missing,
            }),
        ))
    }

    /// Families `request` draws with that the font book does not hold.
    fn missing_families(&self, request: &RenderRequest) -> Vec<String> {
        let mut wanted = vec![request.font.family.as_str()];
        if request.footer().is_some() {
            wanted.push(self.config.footer_family.as_str());
        }
        let mut missing: Vec<String> = Vec::new();
        for family in wanted {
            let known = self.fonts().has_family(family)
                || missing.iter().any(|m| m.eq_ignore_ascii_case(family));
            if !known {
                missing.push(family.to_string());
            }
        }
        missing
    }
}

/// One-shot "font ready" notification for a render that used a fallback face.
#[derive(Debug)]
#[must_use = "a pending font does nothing until resolved"]
pub struct PendingFont {
    request: RenderRequest,
    missing: Vec<String>,
}

impl PendingFont {
    /// First family the render is waiting for.
    pub fn family(&self) -> &str {
        self.missing
            .first()
            .map_or(self.request.font.family.as_str(), String::as_str)
    }

    /// Every family that fell back, body first.
    pub fn families(&self) -> &[String] {
        &self.missing
    }

    /// Register the loaded face and perform the single follow-up render.
    pub fn resolve(self, renderer: &mut QuoteRenderer, font_bytes: Vec<u8>) -> QuoteResult<BmpImage> {
        renderer.fonts_mut().register(font_bytes)?;
        renderer.render_bmp(&self.request)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/session.rs"]
mod tests;
