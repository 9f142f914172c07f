use crate::coords::{Size, Vec2};
use crate::paint::{Color, Paint};
use crate::path::{FillRule, Path};
use crate::surface::Surface;
use crate::text::FontFace;

use super::DrawCmd;

/// Draw commands recorded for one frame at a fixed viewport size.
///
/// Performance characteristics:
/// - recording is O(1) per command plus the cost of cloning the path
/// - `clear()` keeps allocated capacity for reuse across frames
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
    size: Size,
}

impl DrawList {
    #[inline]
    pub fn new(size: Size) -> Self {
        Self { items: Vec::new(), size }
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in paint order (back to front).
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }
}

impl Surface for DrawList {
    fn size(&self) -> Size {
        self.size
    }

    fn fill_path(&mut self, path: &Path, rule: FillRule, paint: &Paint) {
        self.push(DrawCmd::FillPath { path: path.clone(), rule, paint: paint.clone() });
    }

    fn draw_text(&mut self, text: &str, _face: &dyn FontFace, origin: Vec2, line_height: f32, color: Color) {
        self.push(DrawCmd::Text { text: text.to_owned(), origin, line_height, color });
    }
}
