//! Bevel UI: a retained box-model component tree on top of `bevel-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use bevel_ui::prelude::*;
//!
//! let mut window = Window::new()
//!     .child(Text::new("Hello"))
//!     .child(
//!         View::new(BoxStyle::new().padding(Edges::symmetric(px(5), px(45))).background(corner_colors(0x000000ff)))
//!             .child(Text::new("START")),
//!     );
//!
//! let mut canvas = Canvas::new(640, 480);
//! window.draw(&mut canvas, 0, 0);
//! ```
//!
//! Trees are built once and mutated between frames: [`Text::change_text`]
//! and the view style stack (`push_style`, `pop_style`, `replace_style`)
//! cover the usual per-frame changes. After a draw, [`Component::area`]
//! reports where each node landed, for hit-testing.
//!
//! [`Text::change_text`]: components::Text::change_text

pub mod component;
pub mod components;
pub mod size;
pub mod style;

pub use component::{Component, Node};

/// The component API plus the engine types needed to use it.
pub mod prelude {
    pub use crate::component::{Component, Node};
    pub use crate::components::{Text, View, Window};
    pub use crate::size::{SizeExpr, SizeTerm, px, vh, vw};
    pub use crate::style::{
        Align, BoxStyle, Direction, StyleParseError, TextFont, TextStyle, corner_colors, corner_colors4,
        corner_colors_horizontal, corner_colors_vertical, parse_color, parse_colors, parse_edges, parse_radius,
    };

    pub use bevel_engine::Surface;
    pub use bevel_engine::canvas::Canvas;
    pub use bevel_engine::coords::{Area, Corners, Edges, Point, Size};
    pub use bevel_engine::paint::Color;
    pub use bevel_engine::scene::DrawList;
}
