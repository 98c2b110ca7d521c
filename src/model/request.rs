use std::str::FromStr;

use crate::foundation::error::{QuoteError, QuoteResult};

/// Quote used when the primary text is empty or whitespace-only.
pub const PLACEHOLDER_QUOTE: &str = "The only thing that you absolutely have to know, is the location of the library.\n\n— Albert Einstein";

/// Family selected when the caller does not pick one.
pub const DEFAULT_FAMILY: &str = "Literata";

/// Body font size used when the caller does not pick one.
pub const DEFAULT_FONT_SIZE_PX: u32 = 28;

/// Largest body or footer font size accepted, in 1x pixels.
pub const MAX_FONT_SIZE_PX: u32 = 1024;

/// Font selection shared by the wrap pass and the draw pass.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FontSpec {
    /// Family name as registered in the font book.
    pub family: String,
    /// Request a 700-weight face.
    pub bold: bool,
    /// Request an italic face.
    pub italic: bool,
    /// Font size in pixels on the surface being drawn.
    pub size_px: u32,
}

impl FontSpec {
    /// Regular-weight upright spec.
    pub fn regular(family: impl Into<String>, size_px: u32) -> Self {
        Self {
            family: family.into(),
            bold: false,
            italic: false,
            size_px,
        }
    }

    /// Same face at `scale x` size.
    pub fn scaled(&self, scale: u32) -> Self {
        Self {
            size_px: self.size_px.saturating_mul(scale),
            ..self.clone()
        }
    }

    /// Reject sizes outside `1..=MAX_FONT_SIZE_PX`.
    pub fn validate(&self) -> QuoteResult<()> {
        validate_font_size("font size_px", self.size_px)
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::regular(DEFAULT_FAMILY, DEFAULT_FONT_SIZE_PX)
    }
}

/// Horizontal alignment of the text block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Lines start at the left padding.
    Left,
    /// Lines are centered on the canvas midline.
    #[default]
    Center,
    /// Lines end at the right padding.
    Right,
}

impl FromStr for Alignment {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(QuoteError::validation(format!(
                "unknown alignment '{other}' (expected left, center or right)"
            ))),
        }
    }
}

/// Decorative frame drawn around the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// No border.
    #[default]
    None,
    /// One thin rectangle.
    Simple,
    /// Two concentric rectangles.
    Double,
    /// Double rectangle with corner diamonds and edge dots.
    Ornament,
}

impl FromStr for BorderStyle {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "simple" => Ok(Self::Simple),
            "double" => Ok(Self::Double),
            "ornament" => Ok(Self::Ornament),
            other => Err(QuoteError::validation(format!(
                "unknown border style '{other}' (expected none, simple, double or ornament)"
            ))),
        }
    }
}

/// Everything one render needs besides the [`crate::OutputConfig`].
///
/// Built fresh for each render call; the pipeline never reads ambient state.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderRequest {
    /// Quote body; newlines separate paragraphs.
    pub text: String,
    /// Optional footer line drawn at the bottom of the page.
    pub footer_text: Option<String>,
    /// Horizontal alignment of the body.
    pub alignment: Alignment,
    /// Border decoration.
    pub border_style: BorderStyle,
    /// Body font at final (1x) resolution.
    pub font: FontSpec,
}

impl RenderRequest {
    /// Request for `text` with default styling.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Body text after the placeholder policy: blank input becomes [`PLACEHOLDER_QUOTE`].
    pub fn effective_text(&self) -> &str {
        if self.text.trim().is_empty() {
            PLACEHOLDER_QUOTE
        } else {
            &self.text
        }
    }

    /// Check the body font before any drawing happens.
    pub fn validate(&self) -> QuoteResult<()> {
        self.font.validate()
    }

    /// Trimmed footer, or `None` when absent or blank.
    pub fn footer(&self) -> Option<&str> {
        self.footer_text
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

pub(crate) fn validate_font_size(what: &str, size_px: u32) -> QuoteResult<()> {
    if size_px == 0 || size_px > MAX_FONT_SIZE_PX {
        return Err(QuoteError::validation(format!(
            "{what} must be in 1..={MAX_FONT_SIZE_PX}, got {size_px}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/model/request.rs"]
mod tests;
