use std::borrow::Cow;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{QuoteError, QuoteResult};
use crate::model::request::FontSpec;
use crate::render::surface::TextMeasurer;

/// One face registered in a [`FontBook`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceInfo {
    /// Family name reported by the font file.
    pub family: String,
    /// Weight is 600 or heavier.
    pub bold: bool,
    /// Italic or oblique style.
    pub italic: bool,
}

/// Registry of font faces loaded from raw bytes.
///
/// Fonts are never fetched here; callers hand over bytes they already hold. The first
/// registered family doubles as the fallback when a requested family is missing.
#[derive(Default)]
pub struct FontBook {
    font_ctx: parley::FontContext,
    faces: Vec<FaceInfo>,
    fallback_family: Option<String>,
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBook")
            .field("faces", &self.faces)
            .field("fallback_family", &self.fallback_family)
            .finish()
    }
}

impl FontBook {
    /// Empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every face contained in `font_bytes` (TTF, OTF or a collection).
    ///
    /// Returns the faces that were added.
    pub fn register(&mut self, font_bytes: Vec<u8>) -> QuoteResult<Vec<FaceInfo>> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes), None);
        if families.is_empty() {
            return Err(QuoteError::validation(
                "no font families registered from font bytes",
            ));
        }

        let mut added = Vec::new();
        for (family_id, infos) in families {
            let family = self
                .font_ctx
                .collection
                .family_name(family_id)
                .ok_or_else(|| QuoteError::validation("registered font family has no name"))?
                .to_string();
            for info in infos {
                let face = FaceInfo {
                    family: family.clone(),
                    bold: info.weight().value() >= 600.0,
                    italic: !matches!(info.style(), parley::fontique::FontStyle::Normal),
                };
                if !self.faces.contains(&face) {
                    self.faces.push(face.clone());
                }
                added.push(face);
            }
            if self.fallback_family.is_none() {
                self.fallback_family = Some(family);
            }
        }

        tracing::debug!(faces = added.len(), "registered font faces");
        Ok(added)
    }

    /// Read a font file from disk and register it.
    pub fn register_file(&mut self, path: &std::path::Path) -> QuoteResult<Vec<FaceInfo>> {
        let bytes = std::fs::read(path).map_err(|e| {
            QuoteError::Other(anyhow::anyhow!(
                "failed to read font '{}': {e}",
                path.display()
            ))
        })?;
        self.register(bytes)
    }

    /// Prefer `family` over the first registered family when a request misses.
    pub fn set_fallback_family(&mut self, family: impl Into<String>) {
        self.fallback_family = Some(family.into());
    }

    /// All registered faces in registration order.
    pub fn faces(&self) -> &[FaceInfo] {
        &self.faces
    }

    /// Whether any face of `family` is registered (ASCII case-insensitive).
    pub fn has_family(&self, family: &str) -> bool {
        self.faces
            .iter()
            .any(|f| f.family.eq_ignore_ascii_case(family))
    }

    /// Registered family name to use for `spec`, falling back when it is missing.
    pub fn resolve_family(&self, spec: &FontSpec) -> QuoteResult<String> {
        if let Some(face) = self
            .faces
            .iter()
            .find(|f| f.family.eq_ignore_ascii_case(&spec.family))
        {
            return Ok(face.family.clone());
        }
        match &self.fallback_family {
            Some(fallback) if self.has_family(fallback) => {
                tracing::debug!(requested = %spec.family, %fallback, "font family fallback");
                Ok(fallback.clone())
            }
            _ => Err(QuoteError::measurement(format!(
                "no font face available for family '{}'",
                spec.family
            ))),
        }
    }
}

/// Shapes and measures text against a [`FontBook`] using Parley.
#[derive(Debug, Default)]
pub struct TextEngine {
    fonts: FontBook,
    layout_ctx: LayoutCtx,
}

struct LayoutCtx(parley::LayoutContext<Rgba8>);

impl Default for LayoutCtx {
    fn default() -> Self {
        Self(parley::LayoutContext::new())
    }
}

impl std::fmt::Debug for LayoutCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("LayoutCtx")
    }
}

impl TextEngine {
    /// Engine over an existing font book.
    pub fn new(fonts: FontBook) -> Self {
        Self {
            fonts,
            layout_ctx: LayoutCtx::default(),
        }
    }

    /// Registered fonts.
    pub fn fonts(&self) -> &FontBook {
        &self.fonts
    }

    /// Mutable access for registering more fonts.
    pub fn fonts_mut(&mut self) -> &mut FontBook {
        &mut self.fonts
    }

    /// Shape `text` as a single unbroken line.
    pub(crate) fn layout_line(
        &mut self,
        spec: &FontSpec,
        text: &str,
        brush: Rgba8,
    ) -> QuoteResult<parley::Layout<Rgba8>> {
        if spec.size_px == 0 {
            return Err(QuoteError::validation("font size_px must be > 0"));
        }
        let family = self.fonts.resolve_family(spec)?;

        let weight = if spec.bold {
            parley::style::FontWeight::BOLD
        } else {
            parley::style::FontWeight::NORMAL
        };
        let style = if spec.italic {
            parley::style::FontStyle::Italic
        } else {
            parley::style::FontStyle::Normal
        };

        let mut builder =
            self.layout_ctx
                .0
                .ranged_builder(&mut self.fonts.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(format!("\"{family}\""))),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(spec.size_px as f32));
        builder.push_default(parley::style::StyleProperty::FontWeight(weight));
        builder.push_default(parley::style::StyleProperty::FontStyle(style));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

impl TextMeasurer for TextEngine {
    fn measure(&mut self, font: &FontSpec, text: &str) -> QuoteResult<f32> {
        let layout = self.layout_line(font, text, Rgba8::BLACK)?;
        Ok(layout.width())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/engine.rs"]
mod tests;
