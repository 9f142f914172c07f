use crate::coords::{Corners, Rect, Vec2};

/// One drawing instruction of a [`Path`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Segment {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Quadratic Bézier from the current point through `ctrl` to `to`.
    QuadTo { ctrl: Vec2, to: Vec2 },
    Close,
}

/// Vector path in pixel space.
///
/// Contours are implicitly closed when filled: a `MoveTo` or the end of the
/// path terminates the previous contour the same way `Close` does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        self.segments.push(Segment::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        self.segments.push(Segment::LineTo(p));
        self
    }

    pub fn quad_to(&mut self, ctrl: Vec2, to: Vec2) -> &mut Self {
        self.segments.push(Segment::QuadTo { ctrl, to });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.segments.push(Segment::Close);
        self
    }

    /// Appends a closed rounded-rectangle contour.
    ///
    /// Each corner is a quadratic arc whose control point is the rectangle's
    /// own corner. Radii are used as given; callers clamp them to the
    /// rectangle beforehand.
    pub fn rounded_rect(&mut self, rect: Rect, radii: Corners<f32>) -> &mut Self {
        let Vec2 { x: l, y: t } = rect.min();
        let Vec2 { x: r, y: b } = rect.max();
        let Corners { top_left: tl, top_right: tr, bottom_right: br, bottom_left: bl } = radii;

        self.move_to(Vec2::new(l + tl, t))
            .line_to(Vec2::new(r - tr, t))
            .quad_to(Vec2::new(r, t), Vec2::new(r, t + tr))
            .line_to(Vec2::new(r, b - br))
            .quad_to(Vec2::new(r, b), Vec2::new(r - br, b))
            .line_to(Vec2::new(l + bl, b))
            .quad_to(Vec2::new(l, b), Vec2::new(l, b - bl))
            .line_to(Vec2::new(l, t + tl))
            .quad_to(Vec2::new(l, t), Vec2::new(l + tl, t))
            .close()
    }

    /// Bounding box of every point and control point, or `None` for an empty path.
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = self.segments.iter().flat_map(|s| match *s {
            Segment::MoveTo(p) | Segment::LineTo(p) => [Some(p), None],
            Segment::QuadTo { ctrl, to } => [Some(ctrl), Some(to)],
            Segment::Close => [None, None],
        }).flatten();

        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Rect::from_min_max(min, max))
    }
}
