//! Size expressions: a dimension written as pixels, a fraction of the
//! viewport, or a sum of those.
//!
//! Expressions are resolved fresh on every layout pass because the viewport
//! can change between frames.

use std::fmt;

use bevel_engine::coords::Size;

/// Leaf value of a [`SizeExpr`].
///
/// Viewport terms hold a percentage, as written in `"53vw"`, so a parsed
/// literal resolves to exactly `viewport * 53 / 100` before flooring.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SizeTerm {
    /// Absolute pixels.
    Px(i32),
    /// Percent of the viewport width (`50.0` = half).
    Vw(f64),
    /// Percent of the viewport height.
    Vh(f64),
}

impl SizeTerm {
    #[inline]
    pub fn resolve(self, viewport: Size) -> i32 {
        match self {
            SizeTerm::Px(v) => v,
            SizeTerm::Vw(p) => percent_of(viewport.width, p),
            SizeTerm::Vh(p) => percent_of(viewport.height, p),
        }
    }
}

#[inline]
fn percent_of(dimension: i32, percent: f64) -> i32 {
    (f64::from(dimension) * percent / 100.0).floor() as i32
}

/// A term plus an ordered list of sub-expressions added to it.
///
/// ```rust,ignore
/// // Half the viewport width plus ten pixels.
/// let w = SizeExpr::vw(0.5).plus(SizeExpr::px(10));
/// assert_eq!(w.resolve(Size::new(640, 480)), 330);
/// ```
///
/// No clamping happens here: negative pixel values resolve to negative sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeExpr {
    term: SizeTerm,
    sum: Vec<SizeExpr>,
}

impl SizeExpr {
    #[inline]
    pub const fn new(term: SizeTerm) -> Self {
        Self { term, sum: Vec::new() }
    }

    #[inline]
    pub const fn px(v: i32) -> Self {
        Self::new(SizeTerm::Px(v))
    }

    /// Fraction of the viewport width (`0.5` = half).
    ///
    /// The fraction is a binary float, so a value like `0.57` lands just
    /// below its decimal; `"57vw".parse()` keeps the exact percentage.
    #[inline]
    pub fn vw(fraction: f64) -> Self {
        Self::new(SizeTerm::Vw(fraction * 100.0))
    }

    /// Fraction of the viewport height.
    #[inline]
    pub fn vh(fraction: f64) -> Self {
        Self::new(SizeTerm::Vh(fraction * 100.0))
    }

    /// Appends `other` to the list of added sub-expressions.
    #[must_use]
    pub fn plus(mut self, other: SizeExpr) -> Self {
        self.sum.push(other);
        self
    }

    /// Evaluates the expression against `viewport`.
    pub fn resolve(&self, viewport: Size) -> i32 {
        self.term.resolve(viewport) + self.sum.iter().map(|e| e.resolve(viewport)).sum::<i32>()
    }
}

impl Default for SizeExpr {
    fn default() -> Self {
        Self::px(0)
    }
}

impl From<i32> for SizeExpr {
    fn from(v: i32) -> Self {
        Self::px(v)
    }
}

/// Shorthand for [`SizeExpr::px`].
#[inline]
pub const fn px(v: i32) -> SizeExpr {
    SizeExpr::px(v)
}

/// Shorthand for [`SizeExpr::vw`].
#[inline]
pub fn vw(fraction: f64) -> SizeExpr {
    SizeExpr::vw(fraction)
}

/// Shorthand for [`SizeExpr::vh`].
#[inline]
pub fn vh(fraction: f64) -> SizeExpr {
    SizeExpr::vh(fraction)
}

impl fmt::Display for SizeTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SizeTerm::Px(v) => write!(f, "{v}px"),
            SizeTerm::Vw(p) => write!(f, "{p}vw"),
            SizeTerm::Vh(p) => write!(f, "{p}vh"),
        }
    }
}

impl fmt::Display for SizeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.term)?;
        for e in &self.sum {
            write!(f, " + {e}")?;
        }
        Ok(())
    }
}
