//! Style records for boxes and text, plus parsers for compact style literals.
//!
//! Styles are plain data. Every field is optional so that a style can act as
//! an override: [`BoxStyle::merge`] and [`TextStyle::merge`] lay a list of
//! overrides over a base, last set value winning per field.

mod box_style;
mod error;
mod parse;
mod text_style;

pub use box_style::{Align, BoxStyle, Direction};
pub use error::StyleParseError;
pub use parse::{parse_color, parse_colors, parse_edges, parse_radius};
pub use text_style::{TextFont, TextStyle};

use bevel_engine::coords::Corners;
use bevel_engine::paint::Color;

/// Overwrites `slot` when the override sets a value.
fn overlay<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        slot.clone_from(value);
    }
}

// ── Color quads from packed 0xRRGGBBAA codes ──────────────────────────────

/// The same color on every corner.
pub fn corner_colors(code: u32) -> Corners<Color> {
    Corners::all(Color::from_rgba_u32(code))
}

/// `left` on both left corners, `right` on both right corners.
pub fn corner_colors_horizontal(left: u32, right: u32) -> Corners<Color> {
    Corners::horizontal(Color::from_rgba_u32(left), Color::from_rgba_u32(right))
}

/// `top` on both top corners, `bottom` on both bottom corners.
pub fn corner_colors_vertical(top: u32, bottom: u32) -> Corners<Color> {
    Corners::vertical(Color::from_rgba_u32(top), Color::from_rgba_u32(bottom))
}

/// Explicit corners in `[top_left, top_right, bottom_right, bottom_left]` order.
pub fn corner_colors4(top_left: u32, top_right: u32, bottom_right: u32, bottom_left: u32) -> Corners<Color> {
    Corners::new(top_left, top_right, bottom_right, bottom_left).map(Color::from_rgba_u32)
}
