//! The drawing capability components paint onto.

use crate::coords::{Size, Vec2};
use crate::paint::{Color, Paint};
use crate::path::{FillRule, Path};
use crate::text::FontFace;

/// A target that can fill paths and draw text.
///
/// Implemented by [`Canvas`](crate::canvas::Canvas) (software raster) and
/// [`DrawList`](crate::scene::DrawList) (command recording for inspecting
/// layout in tests). Components only ever see `&mut dyn Surface`.
pub trait Surface {
    /// Pixel dimensions. Components resolve viewport-relative sizes against this.
    fn size(&self) -> Size;

    /// Fills the region enclosed by `path` under `rule`, shading each covered
    /// point with `paint`.
    fn fill_path(&mut self, path: &Path, rule: FillRule, paint: &Paint);

    /// Draws `text` with its first baseline at `origin`.
    ///
    /// Each `'\n'` starts a new line `line_height` pixels further down.
    /// Glyph coverage is tinted by `color`.
    fn draw_text(&mut self, text: &str, face: &dyn FontFace, origin: Vec2, line_height: f32, color: Color);
}
