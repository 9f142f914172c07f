use core::ops::Add;

/// Per-edge values in CSS order: top, right, bottom, left.
///
/// Used for margin, border width and padding, either as unresolved size
/// expressions or as resolved pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Edges<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T> Edges<T> {
    #[inline]
    pub const fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self { top, right, bottom, left }
    }

    #[inline]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Edges<U> {
        Edges::new(f(self.top), f(self.right), f(self.bottom), f(self.left))
    }
}

impl<T: Clone> Edges<T> {
    /// Same value on every edge.
    #[inline]
    pub fn all(v: T) -> Self {
        Self::new(v.clone(), v.clone(), v.clone(), v)
    }

    /// `vertical` on top/bottom, `horizontal` on left/right.
    #[inline]
    pub fn symmetric(vertical: T, horizontal: T) -> Self {
        Self::new(vertical.clone(), horizontal.clone(), vertical, horizontal)
    }

    /// Distinct top and bottom, shared left/right.
    #[inline]
    pub fn top_horizontal_bottom(top: T, horizontal: T, bottom: T) -> Self {
        Self::new(top, horizontal.clone(), bottom, horizontal)
    }
}

impl<T: Copy + Add<Output = T>> Edges<T> {
    /// Total inset on the horizontal axis (left + right).
    #[inline]
    pub fn horizontal(&self) -> T {
        self.left + self.right
    }

    /// Total inset on the vertical axis (top + bottom).
    #[inline]
    pub fn vertical(&self) -> T {
        self.top + self.bottom
    }
}

/// Per-corner values, clockwise from the top-left: top-left, top-right,
/// bottom-right, bottom-left.
///
/// Used for corner radii and for four-corner gradient colors.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Corners<T> {
    pub top_left: T,
    pub top_right: T,
    pub bottom_right: T,
    pub bottom_left: T,
}

impl<T> Corners<T> {
    #[inline]
    pub const fn new(top_left: T, top_right: T, bottom_right: T, bottom_left: T) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    #[inline]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Corners<U> {
        Corners::new(f(self.top_left), f(self.top_right), f(self.bottom_right), f(self.bottom_left))
    }

    /// Returns true if `f` holds for at least one corner.
    #[inline]
    pub fn any(&self, mut f: impl FnMut(&T) -> bool) -> bool {
        f(&self.top_left) || f(&self.top_right) || f(&self.bottom_right) || f(&self.bottom_left)
    }
}

impl<T: Clone> Corners<T> {
    #[inline]
    pub fn all(v: T) -> Self {
        Self::new(v.clone(), v.clone(), v.clone(), v)
    }

    /// `left` on both left corners, `right` on both right corners.
    #[inline]
    pub fn horizontal(left: T, right: T) -> Self {
        Self::new(left.clone(), right.clone(), right, left)
    }

    /// `top` on both top corners, `bottom` on both bottom corners.
    #[inline]
    pub fn vertical(top: T, bottom: T) -> Self {
        Self::new(top.clone(), top, bottom.clone(), bottom)
    }
}
