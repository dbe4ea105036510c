use crate::{
    config::CoverConfig,
    error::{CoverError, Result},
};
use rusttype::{point, Font, PositionedGlyph, Scale};
use std::path::Path;

static EMBEDDED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSerif.ttf");

/// TrueType face used for cover lettering.
pub struct CoverFont {
    font: Font<'static>,
}

impl CoverFont {
    pub fn embedded() -> Result<Self> {
        Font::try_from_bytes(EMBEDDED_FONT)
            .map(|font| Self { font })
            .ok_or_else(|| CoverError::ConfigError("embedded cover font failed to load".into()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            CoverError::ConfigError(format!("cannot read font {}: {}", path.display(), e))
        })?;
        Font::try_from_vec(bytes)
            .map(|font| Self { font })
            .ok_or_else(|| {
                CoverError::ConfigError(format!("{} is not a usable TrueType font", path.display()))
            })
    }

    pub fn from_config(config: &CoverConfig) -> Result<Self> {
        match &config.font_path {
            Some(path) => Self::from_file(path),
            None => Self::embedded(),
        }
    }

    /// Horizontal advance of `text` at `px`, kerning included.
    pub fn text_width(&self, text: &str, px: f32) -> f32 {
        self.font
            .layout(text, Scale::uniform(px), point(0.0, 0.0))
            .last()
            .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
    }

    /// Glyphs for `text` whose box top-left sits at `(x, y)`.
    pub(crate) fn layout_at(&self, text: &str, px: f32, x: f32, y: f32) -> Vec<PositionedGlyph<'static>> {
        let scale = Scale::uniform(px);
        let ascent = self.font.v_metrics(scale).ascent;
        self.font.layout(text, scale, point(x, y + ascent)).collect()
    }
}
