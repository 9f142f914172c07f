/// Integer position in layout space.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Integer extent in layout space.
///
/// Also used as the viewport size that size expressions resolve against.
/// Components may produce negative extents for degenerate layouts; nothing here clamps.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0, 0)
    }
}

/// Screen-space rectangle a component covered during its most recent paint.
///
/// `min` is the top-left corner, `max` the bottom-right corner.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Area {
    pub min: Point,
    pub max: Point,
}

impl Area {
    #[inline]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin, Point::new(origin.x + size.width, origin.y + size.height))
    }

    #[inline]
    pub fn size(self) -> Size {
        Size::new(self.max.x - self.min.x, self.max.y - self.min.y)
    }

    /// Closed containment: both edges belong to the area.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_contains_both_edges() {
        let a = Area::new(Point::new(10, 10), Point::new(20, 30));
        assert!(a.contains(Point::new(10, 10)));
        assert!(a.contains(Point::new(20, 30)));
        assert!(a.contains(Point::new(15, 12)));
        assert!(!a.contains(Point::new(21, 12)));
        assert!(!a.contains(Point::new(15, 9)));
    }

    #[test]
    fn default_area_is_a_single_point() {
        let a = Area::default();
        assert_eq!(a.size(), Size::zero());
        assert!(a.contains(Point::new(0, 0)));
    }

    #[test]
    fn area_from_origin_size() {
        let a = Area::from_origin_size(Point::new(3, 4), Size::new(10, 20));
        assert_eq!(a.max, Point::new(13, 24));
        assert_eq!(a.size(), Size::new(10, 20));
    }
}
