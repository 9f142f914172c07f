use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

use super::{FontFace, Glyph};

/// Error returned by [`TrueTypeFont::from_bytes`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// A TrueType or OpenType font rendered at a fixed pixel size.
pub struct TrueTypeFont {
    font: fontdue::Font,
    px: f32,
}

impl TrueTypeFont {
    /// Parses a font from raw bytes for rendering at `px` pixels.
    pub fn from_bytes(bytes: &[u8], px: f32) -> Result<Self, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        log::debug!("loaded font ({} bytes) at {px}px", bytes.len());
        Ok(Self { font, px })
    }

    /// Reads and parses a font file.
    pub fn from_file(path: impl AsRef<Path>, px: f32) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("reading font file {}", path.display()))?;
        Self::from_bytes(&bytes, px)
            .with_context(|| format!("parsing font file {}", path.display()))
    }

    #[inline]
    pub fn px(&self) -> f32 {
        self.px
    }
}

impl fmt::Debug for TrueTypeFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrueTypeFont").field("px", &self.px).finish_non_exhaustive()
    }
}

impl FontFace for TrueTypeFont {
    fn advance(&self, ch: char) -> f32 {
        self.font.metrics(ch, self.px).advance_width
    }

    fn glyph(&self, ch: char) -> Option<Glyph> {
        let (m, coverage) = self.font.rasterize(ch, self.px);
        if m.width == 0 || m.height == 0 {
            return None;
        }
        // fontdue's ymin is the distance from the baseline up to the bitmap's bottom edge.
        Some(Glyph {
            width: m.width,
            height: m.height,
            left: m.xmin,
            top: -(m.ymin + m.height as i32),
            coverage,
        })
    }
}
