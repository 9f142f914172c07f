use crate::coords::{Corners, Rect, Vec2};

use super::Color;

/// Bilinear four-corner gradient over a rectangle.
///
/// Semantics:
/// - `bounds` is the rectangle the corners are pinned to, in path space.
/// - A point is normalized into `bounds` (clamped to `[0, 1]` per axis).
/// - The top edge blends top-left → top-right and the bottom edge blends
///   bottom-left → bottom-right by the normalized X; the two results are then
///   blended top → bottom by the normalized Y.
///
/// The path being filled acts as a mask over this gradient, so a rounded
/// rectangle or border ring shows exactly the part of the gradient it covers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CornerGradient {
    pub corners: Corners<Color>,
    pub bounds: Rect,
}

impl CornerGradient {
    #[inline]
    pub fn new(corners: Corners<Color>, bounds: Rect) -> Self {
        Self { corners, bounds }
    }

    /// Color at `p`. Corners of `bounds` return the corner colors exactly.
    pub fn sample(&self, p: Vec2) -> Color {
        let tx = normalize(p.x, self.bounds.origin.x, self.bounds.size.x);
        let ty = normalize(p.y, self.bounds.origin.y, self.bounds.size.y);

        let c = &self.corners;
        let top = c.top_left.lerp(c.top_right, tx);
        let bottom = c.bottom_left.lerp(c.bottom_right, tx);
        top.lerp(bottom, ty)
    }
}

/// Maps `v` into `[0, 1]` over `[start, start + extent]`. A zero or
/// non-finite extent pins to the start edge.
#[inline]
fn normalize(v: f32, start: f32, extent: f32) -> f32 {
    if extent == 0.0 || !extent.is_finite() {
        return 0.0;
    }
    ((v - start) / extent).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(code: u32) -> Color {
        Color::from_rgba_u32(code)
    }

    fn quad() -> CornerGradient {
        CornerGradient::new(
            Corners::new(rgba(0xff0000ff), rgba(0x00ff00ff), rgba(0x0000ffff), rgba(0xffffff00)),
            Rect::new(10.0, 20.0, 100.0, 50.0),
        )
    }

    #[test]
    fn corners_sample_exactly() {
        let g = quad();
        assert_eq!(g.sample(Vec2::new(10.0, 20.0)), g.corners.top_left);
        assert_eq!(g.sample(Vec2::new(110.0, 20.0)), g.corners.top_right);
        assert_eq!(g.sample(Vec2::new(110.0, 70.0)), g.corners.bottom_right);
        assert_eq!(g.sample(Vec2::new(10.0, 70.0)), g.corners.bottom_left);
    }

    #[test]
    fn vertical_pair_blends_linearly() {
        let red = rgba(0xff0000ff);
        let blue = rgba(0x0000ffff);
        let g = CornerGradient::new(Corners::vertical(red, blue), Rect::new(0.0, 0.0, 40.0, 40.0));

        assert_eq!(g.sample(Vec2::new(17.0, 0.0)), red);
        assert_eq!(g.sample(Vec2::new(17.0, 40.0)), blue);
        assert_eq!(g.sample(Vec2::new(3.0, 20.0)).to_rgba8(), [128, 0, 128, 255]);
    }

    #[test]
    fn center_is_average_of_corners() {
        let g = quad();
        let c = g.sample(Vec2::new(60.0, 45.0));
        let expected_r = (1.0 + 0.0 + 0.0 + 1.0) / 4.0;
        assert!((c.r - expected_r).abs() < 1e-6);
        assert!((c.a - 0.75).abs() < 1e-6);
    }

    #[test]
    fn points_outside_bounds_clamp_to_edges() {
        let g = quad();
        assert_eq!(g.sample(Vec2::new(-500.0, -500.0)), g.corners.top_left);
        assert_eq!(g.sample(Vec2::new(500.0, 500.0)), g.corners.bottom_right);
    }

    #[test]
    fn zero_extent_pins_to_start_edge() {
        let red = rgba(0xff0000ff);
        let blue = rgba(0x0000ffff);
        let g = CornerGradient::new(Corners::horizontal(red, blue), Rect::new(5.0, 5.0, 0.0, 10.0));
        assert_eq!(g.sample(Vec2::new(5.0, 7.0)), red);
    }
}
