use crate::coords::Vec2;
use crate::paint::{Color, Paint};
use crate::path::{FillRule, Path};

/// One recorded drawing call.
///
/// Text commands keep the string and placement only, not the face. A list is
/// for inspecting layout output, not for replaying glyphs.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillPath {
        path: Path,
        rule: FillRule,
        paint: Paint,
    },
    Text {
        text: String,
        /// First baseline.
        origin: Vec2,
        line_height: f32,
        color: Color,
    },
}
