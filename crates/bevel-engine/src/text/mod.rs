//! Text faces: glyph advances for layout and coverage bitmaps for painting.
//!
//! Layout only needs [`FontFace::advance`]; surfaces that rasterize text ask
//! for [`FontFace::glyph`]. Two faces ship with the engine:
//! - [`BitmapFont`], a fixed-cell ASCII font that needs no font file
//! - [`TrueTypeFont`], any TrueType/OpenType font rendered through `fontdue`

mod bitmap;
mod truetype;

pub use bitmap::BitmapFont;
pub use truetype::{FontLoadError, TrueTypeFont};

/// Coverage bitmap for one character, positioned relative to the pen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub width: usize,
    pub height: usize,
    /// Horizontal offset from the pen position to the bitmap's left column.
    pub left: i32,
    /// Vertical offset from the baseline to the bitmap's top row (negative is above).
    pub top: i32,
    /// Row-major coverage, `width * height` bytes, 0 = empty, 255 = full.
    pub coverage: Vec<u8>,
}

/// A font at a fixed pixel size.
pub trait FontFace {
    /// Horizontal pen advance after `ch`, in pixels.
    fn advance(&self, ch: char) -> f32;

    /// Coverage bitmap for `ch`, or `None` for characters that draw nothing.
    fn glyph(&self, ch: char) -> Option<Glyph>;

    /// Width of a single line of text in whole pixels.
    ///
    /// Newlines are not interpreted; callers split lines first.
    fn measure(&self, line: &str) -> i32 {
        line.chars().map(|c| self.advance(c)).sum::<f32>().ceil() as i32
    }
}
