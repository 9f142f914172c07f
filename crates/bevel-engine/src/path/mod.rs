//! Path construction and flattening.
//!
//! A [`Path`] is a list of contours made of straight and quadratic segments.
//! Surfaces fill paths with a [`FillRule`]; two nested contours filled with
//! [`FillRule::EvenOdd`] paint only the ring between them, which is how box
//! borders are drawn.

mod builder;
mod flatten;

pub use builder::{Path, Segment};

/// Rule deciding which regions enclosed by a path's contours are inside.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum FillRule {
    /// Inside when the winding number is non-zero.
    #[default]
    NonZero,
    /// Inside when an odd number of contours encloses the point.
    EvenOdd,
}

impl FillRule {
    /// Applies the rule to a winding number accumulated along a scanline.
    #[inline]
    pub fn is_inside(self, winding: i32) -> bool {
        match self {
            FillRule::NonZero => winding != 0,
            FillRule::EvenOdd => winding % 2 != 0,
        }
    }
}
