use bevel_engine::coords::{Corners, Edges};
use bevel_engine::paint::Color;

use super::overlay;
use crate::size::SizeExpr;

/// Axis along which a view stacks its non-floating children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Horizontal,
    #[default]
    Vertical,
}

/// Placement along one axis of the free space inside a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    First,
    Center,
    Last,
}

impl Align {
    /// Fraction of the free space placed before the content.
    #[inline]
    pub fn anchor(self) -> f32 {
        match self {
            Align::First => 0.0,
            Align::Center => 0.5,
            Align::Last => 1.0,
        }
    }
}

/// Style of a [`View`](crate::components::View).
///
/// A view keeps one base style and a stack of overrides; the effective style
/// is [`BoxStyle::merge`] of the two, recomputed on every query.
///
/// ```rust,ignore
/// let card = BoxStyle::new()
///     .background(corner_colors(0x202020ff))
///     .padding(Edges::symmetric(px(5), px(45)))
///     .radius(Corners::all(8));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxStyle {
    pub background: Option<Corners<Color>>,
    pub border_color: Option<Corners<Color>>,
    pub padding: Option<Edges<SizeExpr>>,
    pub margin: Option<Edges<SizeExpr>>,
    pub border_width: Option<Edges<SizeExpr>>,
    pub radius: Option<Corners<i32>>,
    /// Minimum width; content can still grow the box past it.
    pub width: Option<SizeExpr>,
    /// Minimum height.
    pub height: Option<SizeExpr>,
    pub direction: Option<Direction>,
    pub align_horizontal: Option<Align>,
    pub align_vertical: Option<Align>,
    /// Floating views overlay their siblings instead of taking part in flow.
    pub floating: bool,
}

impl BoxStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, colors: Corners<Color>) -> Self {
        self.background = Some(colors);
        self
    }

    pub fn border_color(mut self, colors: Corners<Color>) -> Self {
        self.border_color = Some(colors);
        self
    }

    pub fn padding(mut self, edges: Edges<SizeExpr>) -> Self {
        self.padding = Some(edges);
        self
    }

    pub fn margin(mut self, edges: Edges<SizeExpr>) -> Self {
        self.margin = Some(edges);
        self
    }

    pub fn border_width(mut self, edges: Edges<SizeExpr>) -> Self {
        self.border_width = Some(edges);
        self
    }

    pub fn radius(mut self, radii: Corners<i32>) -> Self {
        self.radius = Some(radii);
        self
    }

    pub fn width(mut self, w: impl Into<SizeExpr>) -> Self {
        self.width = Some(w.into());
        self
    }

    pub fn height(mut self, h: impl Into<SizeExpr>) -> Self {
        self.height = Some(h.into());
        self
    }

    pub fn direction(mut self, d: Direction) -> Self {
        self.direction = Some(d);
        self
    }

    pub fn align_horizontal(mut self, a: Align) -> Self {
        self.align_horizontal = Some(a);
        self
    }

    pub fn align_vertical(mut self, a: Align) -> Self {
        self.align_vertical = Some(a);
        self
    }

    pub fn floating(mut self, v: bool) -> Self {
        self.floating = v;
        self
    }

    /// Lays `overrides` over `self` in order.
    ///
    /// Each optional field takes the last set value. `floating` is OR-ed
    /// across the base and every override, so no override can clear it.
    pub fn merge(&self, overrides: &[BoxStyle]) -> BoxStyle {
        let mut out = self.clone();
        for o in overrides {
            overlay(&mut out.background, &o.background);
            overlay(&mut out.border_color, &o.border_color);
            overlay(&mut out.padding, &o.padding);
            overlay(&mut out.margin, &o.margin);
            overlay(&mut out.border_width, &o.border_width);
            overlay(&mut out.radius, &o.radius);
            overlay(&mut out.width, &o.width);
            overlay(&mut out.height, &o.height);
            overlay(&mut out.direction, &o.direction);
            overlay(&mut out.align_horizontal, &o.align_horizontal);
            overlay(&mut out.align_vertical, &o.align_vertical);
            out.floating |= o.floating;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::px;

    #[test]
    fn anchors() {
        assert_eq!(Align::First.anchor(), 0.0);
        assert_eq!(Align::Center.anchor(), 0.5);
        assert_eq!(Align::Last.anchor(), 1.0);
        assert_eq!(Direction::default(), Direction::Vertical);
    }

    #[test]
    fn single_override_wins_regardless_of_list_length() {
        let base = BoxStyle::new().width(px(10));
        let mut overrides = vec![BoxStyle::new(); 5];
        overrides[2] = BoxStyle::new().width(px(99));
        assert_eq!(base.merge(&overrides).width, Some(px(99)));
        assert_eq!(base.merge(&overrides[..2]).width, Some(px(10)));
    }

    #[test]
    fn later_override_wins() {
        let merged = BoxStyle::new().merge(&[
            BoxStyle::new().direction(Direction::Horizontal).radius(Corners::all(4)),
            BoxStyle::new().direction(Direction::Vertical),
        ]);
        assert_eq!(merged.direction, Some(Direction::Vertical));
        assert_eq!(merged.radius, Some(Corners::all(4)));
    }

    #[test]
    fn floating_is_never_reset() {
        let floating = BoxStyle::new().floating(true);
        for overrides in [
            vec![floating.clone(), BoxStyle::new()],
            vec![BoxStyle::new(), floating.clone()],
        ] {
            assert!(BoxStyle::new().merge(&overrides).floating);
        }
        assert!(floating.merge(&[BoxStyle::new().floating(false)]).floating);
    }

    #[test]
    fn merge_leaves_inputs_untouched() {
        let base = BoxStyle::new().height(px(3));
        let overrides = [BoxStyle::new().height(px(4))];
        let _ = base.merge(&overrides);
        assert_eq!(base.height, Some(px(3)));
        assert_eq!(overrides[0].height, Some(px(4)));
    }
}
