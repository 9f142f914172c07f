//! Paint model shared between components and surfaces.
//!
//! Scope:
//! - color representation (straight alpha, `f32` channels)
//! - paint sources (solid, four-corner gradient)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::CornerGradient;

use crate::coords::{Corners, Rect, Vec2};

/// Paint source for filling a path.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Corners(CornerGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Four-corner paint over `bounds`. A quad whose corners are all equal
    /// collapses to [`Paint::Solid`].
    pub fn corners(colors: Corners<Color>, bounds: Rect) -> Self {
        let c = colors.top_left;
        if colors.top_right == c && colors.bottom_right == c && colors.bottom_left == c {
            Paint::Solid(c)
        } else {
            Paint::Corners(CornerGradient::new(colors, bounds))
        }
    }

    /// Color of this paint at `p`.
    #[inline]
    pub fn sample(&self, p: Vec2) -> Color {
        match self {
            Paint::Solid(c) => *c,
            Paint::Corners(g) => g.sample(p),
        }
    }

    /// True when no part of the fill can be visible.
    pub fn is_invisible(&self) -> bool {
        match self {
            Paint::Solid(c) => c.is_transparent(),
            Paint::Corners(g) => !g.corners.any(|c| !c.is_transparent()),
        }
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}
