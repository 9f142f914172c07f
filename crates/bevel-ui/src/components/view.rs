use bevel_engine::Surface;
use bevel_engine::coords::{Area, Corners, Edges, Point, Rect, Size};
use bevel_engine::paint::{Color, Paint};
use bevel_engine::path::{FillRule, Path};
use log::trace;

use crate::component::{Component, Node};
use crate::size::SizeExpr;
use crate::style::{BoxStyle, Direction};

/// A styled box laying out its children along one axis.
///
/// The footprint is content + padding + border + margin. Transient looks
/// (hover, selection) go on the extra-style stack instead of the base style:
/// use a fixed slot through [`View::replace_style`] for state that is set
/// every frame, and [`View::push_style`]/[`View::pop_style`] for short-lived
/// effects.
#[derive(Debug, Clone, Default)]
pub struct View {
    children: Vec<Node>,
    style: BoxStyle,
    extra_styles: Vec<BoxStyle>,
    viewport: Size,
    area: Area,
}

/// Box-model numbers for one layout pass, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BoxLayout {
    margin: Edges<i32>,
    border: Edges<i32>,
    padding: Edges<i32>,
    radius: Corners<i32>,
    content: Size,
    size: Size,
    content_offset: Point,
}

fn resolve_edges(edges: Option<&Edges<SizeExpr>>, viewport: Size) -> Edges<i32> {
    match edges {
        Some(e) => Edges::new(
            e.top.resolve(viewport),
            e.right.resolve(viewport),
            e.bottom.resolve(viewport),
            e.left.resolve(viewport),
        ),
        None => Edges::all(0),
    }
}

/// Raises `content` to the explicit width/height, which act as minimums.
fn explicit_floor(style: &BoxStyle, content: Size, viewport: Size) -> Size {
    let mut size = content;
    if let Some(w) = &style.width {
        size.width = size.width.max(w.resolve(viewport));
    }
    if let Some(h) = &style.height {
        size.height = size.height.max(h.resolve(viewport));
    }
    size
}

fn visible(colors: &Corners<Color>) -> bool {
    colors.any(|c| !c.is_transparent())
}

impl View {
    pub fn new(style: BoxStyle) -> Self {
        Self { style, ..Self::default() }
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn push_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.children.get_mut(index)
    }

    // ── Style stack ───────────────────────────────────────────────────────

    /// Adds `style` on top of the stack.
    pub fn push_style(&mut self, style: BoxStyle) {
        self.extra_styles.push(style);
    }

    /// Removes the topmost style. Does nothing on an empty stack.
    pub fn pop_style(&mut self) {
        self.extra_styles.pop();
    }

    /// Overwrites slot `index`, or pushes when `index` is past the top.
    pub fn replace_style(&mut self, index: usize, style: BoxStyle) {
        match self.extra_styles.get_mut(index) {
            Some(slot) => *slot = style,
            None => self.extra_styles.push(style),
        }
    }

    pub fn styles_count(&self) -> usize {
        self.extra_styles.len()
    }

    pub fn extra_styles(&self) -> &[BoxStyle] {
        &self.extra_styles
    }

    /// Base style merged with the whole stack.
    pub fn effective_style(&self) -> BoxStyle {
        self.style.merge(&self.extra_styles)
    }

    // ── Sizing ────────────────────────────────────────────────────────────

    /// Size of the flowing children plus padding, border and margin.
    pub fn content_size(&mut self, viewport: Size) -> Size {
        let style = self.effective_style();
        self.content_size_with(&style, viewport)
    }

    fn content_size_with(&mut self, style: &BoxStyle, viewport: Size) -> Size {
        let direction = style.direction.unwrap_or_default();
        let mut flow = Size::zero();
        for child in self.children.iter_mut().filter(|c| !c.is_floating()) {
            let s = child.measure(viewport);
            match direction {
                Direction::Vertical => {
                    flow.width = flow.width.max(s.width);
                    flow.height += s.height;
                }
                Direction::Horizontal => {
                    flow.width += s.width;
                    flow.height = flow.height.max(s.height);
                }
            }
        }

        let edges = [&style.padding, &style.margin, &style.border_width]
            .map(|e| resolve_edges(e.as_ref(), viewport));
        for e in edges {
            flow.width += e.horizontal();
            flow.height += e.vertical();
        }
        flow
    }

    fn size_with(&mut self, style: &BoxStyle, viewport: Size) -> Size {
        let content = self.content_size_with(style, viewport);
        explicit_floor(style, content, viewport)
    }

    fn layout(&mut self, style: &BoxStyle, viewport: Size) -> BoxLayout {
        let margin = resolve_edges(style.margin.as_ref(), viewport);
        let border = resolve_edges(style.border_width.as_ref(), viewport);
        let padding = resolve_edges(style.padding.as_ref(), viewport);
        let content = self.content_size_with(style, viewport);
        let size = explicit_floor(style, content, viewport);

        let limit = (size.width - margin.horizontal() - border.horizontal())
            .min(size.height - margin.vertical() - border.vertical())
            / 2;
        let limit = limit.max(0);
        let radius = style.radius.unwrap_or_default().map(|r| r.clamp(0, limit));

        let ax = style.align_horizontal.unwrap_or_default().anchor();
        let ay = style.align_vertical.unwrap_or_default().anchor();
        let content_offset = Point::new(
            (ax * (size.width - content.width) as f32) as i32,
            (ay * (size.height - content.height) as f32) as i32,
        );

        BoxLayout { margin, border, padding, radius, content, size, content_offset }
    }
}

impl Component for View {
    fn measure(&mut self, viewport: Size) -> Size {
        self.viewport = viewport;
        let style = self.effective_style();
        self.size_with(&style, viewport)
    }

    fn draw(&mut self, surface: &mut dyn Surface, x: i32, y: i32) {
        let viewport = surface.size();
        self.viewport = viewport;
        let style = self.effective_style();
        let BoxLayout { margin, border, padding, radius, content, size, content_offset } = self.layout(&style, viewport);

        let outer_w = size.width - margin.horizontal();
        let outer_h = size.height - margin.vertical();
        self.area = Area::from_origin_size(Point::new(x + margin.left, y + margin.top), Size::new(outer_w, outer_h));
        trace!(
            "view at ({x}, {y}) size {}x{} content {}x{} radius {:?}",
            size.width, size.height, content.width, content.height, radius
        );

        let outer = Rect::new((x + margin.left) as f32, (y + margin.top) as f32, outer_w as f32, outer_h as f32);
        let inner = Rect::new(
            outer.origin.x + border.left as f32,
            outer.origin.y + border.top as f32,
            (outer_w - border.horizontal()) as f32,
            (outer_h - border.vertical()) as f32,
        );
        let radii = radius.map(|r| r as f32);

        if let Some(colors) = style.border_color {
            if (border.horizontal() > 0 || border.vertical() > 0) && visible(&colors) {
                let mut ring = Path::new();
                ring.rounded_rect(outer, radii).rounded_rect(inner, radii);
                surface.fill_path(&ring, FillRule::EvenOdd, &Paint::corners(colors, outer));
            } else {
                trace!("view border skipped: zero width or transparent");
            }
        }

        if let Some(colors) = style.background {
            if visible(&colors) {
                let mut fill = Path::new();
                fill.rounded_rect(inner, radii);
                surface.fill_path(&fill, FillRule::NonZero, &Paint::corners(colors, inner));
            } else {
                trace!("view background skipped: transparent");
            }
        }

        let direction = style.direction.unwrap_or_default();
        let ax = style.align_horizontal.unwrap_or_default().anchor();
        let ay = style.align_vertical.unwrap_or_default().anchor();
        let interior = Size::new(
            content.width - margin.horizontal() - border.horizontal() - padding.horizontal(),
            content.height - margin.vertical() - border.vertical() - padding.vertical(),
        );

        let mut cursor = Point::new(
            margin.left + border.left + padding.left + content_offset.x,
            margin.top + border.top + padding.top + content_offset.y,
        );
        for child in &mut self.children {
            let child_size = child.measure(viewport);
            let floating = child.is_floating();
            match direction {
                Direction::Vertical => {
                    // Truncates toward zero, so an oversized child shifts left by the smaller half.
                    let dx = (ax * (interior.width - child_size.width) as f32) as i32;
                    child.draw(surface, x + cursor.x + dx, y + cursor.y);
                    if !floating {
                        cursor.y += child_size.height;
                    }
                }
                Direction::Horizontal => {
                    let dy = (ay * (interior.height - child_size.height) as f32) as i32;
                    child.draw(surface, x + cursor.x, y + cursor.y + dy);
                    if !floating {
                        cursor.x += child_size.width;
                    }
                }
            }
        }
    }

    fn is_floating(&self) -> bool {
        self.style.floating || self.extra_styles.iter().any(|s| s.floating)
    }

    fn components(&self) -> &[Node] {
        &self.children
    }

    fn area(&self) -> Area {
        self.area
    }

    fn viewport(&self) -> Size {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::Mono;
    use crate::components::Text;
    use crate::size::{px, vw};
    use crate::style::{Align, TextFont, TextStyle, corner_colors, corner_colors_vertical};
    use bevel_engine::canvas::Canvas;
    use bevel_engine::coords::Vec2;
    use bevel_engine::path::Segment;
    use bevel_engine::scene::{DrawCmd, DrawList};

    const VIEWPORT: Size = Size::new(640, 480);

    fn text(s: &str) -> Text {
        Text::with_style(s, TextStyle::new().font(TextFont::from_face(Mono(10.0))))
    }

    fn block(w: i32, h: i32) -> View {
        View::new(BoxStyle::new().width(px(w)).height(px(h)))
    }

    fn fills(list: &DrawList) -> Vec<(&Path, FillRule, &Paint)> {
        list.items()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::FillPath { path, rule, paint } => Some((path, *rule, paint)),
                _ => None,
            })
            .collect()
    }

    fn near(a: [u8; 4], b: [u8; 4], tol: u8) -> bool {
        a.iter().zip(b).all(|(x, y)| x.abs_diff(y) <= tol)
    }

    // ── sizing ──

    #[test]
    fn vertical_stack_of_two_texts() {
        let mut v = View::new(BoxStyle::new().direction(Direction::Vertical)).child(text("A")).child(text("BB"));
        assert_eq!(v.measure(VIEWPORT), Size::new(20, 24));
    }

    #[test]
    fn explicit_width_is_a_floor() {
        let mut wide = View::new(BoxStyle::new().width(px(100))).child(text("A")).child(text("BB"));
        assert_eq!(wide.measure(VIEWPORT), Size::new(100, 24));

        let mut narrow = View::new(BoxStyle::new().width(px(5)).height(px(30))).child(text("BB"));
        assert_eq!(narrow.measure(VIEWPORT), Size::new(20, 30));
    }

    #[test]
    fn edges_add_to_content_size() {
        let style = BoxStyle::new()
            .margin(Edges::all(px(5)))
            .border_width(Edges::all(px(2)))
            .padding(Edges::all(px(3)));
        let mut v = View::new(style).child(block(10, 10));
        assert_eq!(v.content_size(VIEWPORT), Size::new(30, 30));
    }

    #[test]
    fn direction_swaps_max_and_sum() {
        let children = || [block(10, 12), block(20, 7)];
        let mut vertical = View::new(BoxStyle::new());
        let mut horizontal = View::new(BoxStyle::new().direction(Direction::Horizontal));
        for c in children() {
            vertical.push_child(c);
        }
        for c in children() {
            horizontal.push_child(c);
        }
        assert_eq!(vertical.content_size(VIEWPORT), Size::new(20, 19));
        assert_eq!(horizontal.content_size(VIEWPORT), Size::new(30, 12));
    }

    #[test]
    fn floating_children_do_not_change_content_size() {
        let mut plain = View::new(BoxStyle::new()).child(block(10, 10));
        let overlay = View::new(BoxStyle::new().width(px(500)).height(px(500)).floating(true));
        let mut with_overlay = plain.clone().child(overlay);
        assert_eq!(with_overlay.content_size(VIEWPORT), plain.content_size(VIEWPORT));
    }

    #[test]
    fn floating_can_come_from_the_stack() {
        let mut v = View::new(BoxStyle::new());
        assert!(!v.is_floating());
        v.push_style(BoxStyle::new().floating(true));
        v.push_style(BoxStyle::new());
        assert!(v.is_floating());
    }

    // ── style stack ──

    #[test]
    fn push_push_pop_equals_single_push() {
        let a = BoxStyle::new().width(px(1));
        let b = BoxStyle::new().width(px(2));

        let mut popped = View::new(BoxStyle::new());
        popped.push_style(a.clone());
        popped.push_style(b);
        popped.pop_style();

        let mut single = View::new(BoxStyle::new());
        single.push_style(a);
        assert_eq!(popped.effective_style(), single.effective_style());
    }

    #[test]
    fn replace_on_empty_stack_pushes() {
        let a = BoxStyle::new().radius(Corners::all(3));
        let mut replaced = View::new(BoxStyle::new());
        replaced.replace_style(0, a.clone());
        let mut pushed = View::new(BoxStyle::new());
        pushed.push_style(a);
        assert_eq!(replaced.extra_styles(), pushed.extra_styles());
    }

    #[test]
    fn replace_reuses_the_slot() {
        let a = BoxStyle::new().width(px(1));
        let b = BoxStyle::new().width(px(2));
        let mut v = View::new(BoxStyle::new());
        v.replace_style(0, a);
        v.replace_style(0, b.clone());
        assert_eq!(v.styles_count(), 1);
        assert_eq!(v.extra_styles(), [b]);
        assert_eq!(v.effective_style().width, Some(px(2)));
    }

    #[test]
    fn pop_on_empty_stack_is_a_no_op() {
        let mut v = View::new(BoxStyle::new());
        v.pop_style();
        assert_eq!(v.styles_count(), 0);
    }

    // ── draw ──

    #[test]
    fn area_excludes_margin() {
        let style = BoxStyle::new().margin(Edges::new(px(1), px(2), px(3), px(4))).width(px(50)).height(px(20));
        let mut v = View::new(style);
        v.draw(&mut DrawList::new(VIEWPORT), 10, 10);
        assert_eq!(v.area(), Area::new(Point::new(14, 11), Point::new(58, 27)));
    }

    #[test]
    fn viewport_sizes_resolve_on_the_first_draw() {
        let mut v = View::new(BoxStyle::new().width(vw(0.5)).height(px(4)));
        v.draw(&mut DrawList::new(Size::new(200, 100)), 0, 0);
        assert_eq!(v.area().size(), Size::new(100, 4));
        assert_eq!(v.viewport(), Size::new(200, 100));
    }

    #[test]
    fn radius_is_clamped_to_half_the_inner_box() {
        let style = BoxStyle::new()
            .width(px(20))
            .height(px(10))
            .margin(Edges::all(px(1)))
            .border_width(Edges::all(px(1)))
            .border_color(corner_colors(0xffffffff))
            .radius(Corners::all(100));
        let mut v = View::new(style);
        let mut list = DrawList::new(VIEWPORT);
        v.draw(&mut list, 0, 0);

        let fills = fills(&list);
        assert_eq!(fills.len(), 1);
        let (ring, rule, _) = fills[0];
        assert_eq!(rule, FillRule::EvenOdd);
        // min(20 - 4, 10 - 4) / 2 = 3
        assert_eq!(ring.segments()[0], Segment::MoveTo(Vec2::new(4.0, 1.0)));
    }

    #[test]
    fn border_and_background_use_their_own_bounds() {
        let style = BoxStyle::new()
            .width(px(30))
            .height(px(30))
            .border_width(Edges::all(px(5)))
            .border_color(corner_colors_vertical(0xff0000ff, 0x0000ffff))
            .background(corner_colors_vertical(0x00ff00ff, 0x000000ff));
        let mut v = View::new(style);
        let mut list = DrawList::new(VIEWPORT);
        v.draw(&mut list, 0, 0);

        let fills = fills(&list);
        assert_eq!(fills.len(), 2);
        assert_eq!(fills[0].0.bounds(), Some(Rect::new(0.0, 0.0, 30.0, 30.0)));
        assert_eq!(fills[1].0.bounds(), Some(Rect::new(5.0, 5.0, 20.0, 20.0)));
        assert_eq!(fills[1].1, FillRule::NonZero);
        assert_eq!(fills[1].2.sample(Vec2::new(5.0, 5.0)), Color::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn invisible_border_and_background_are_skipped() {
        let style = BoxStyle::new()
            .width(px(10))
            .height(px(10))
            .border_color(corner_colors(0xffffffff))
            .background(corner_colors(0xffffff00));
        let mut list = DrawList::new(VIEWPORT);
        View::new(style).draw(&mut list, 0, 0);
        assert!(list.is_empty());
    }

    #[test]
    fn children_follow_the_cursor() {
        let floating = View::new(BoxStyle::new().width(px(8)).height(px(8)).floating(true));
        let mut v = View::new(BoxStyle::new().padding(Edges::all(px(2))))
            .child(text("A"))
            .child(floating)
            .child(text("B"));
        v.draw(&mut DrawList::new(VIEWPORT), 100, 50);

        let ys: Vec<i32> = v.components().iter().map(|c| c.area().min.y).collect();
        assert_eq!(ys, vec![52, 64, 64]);
        assert!(v.components().iter().all(|c| c.area().min.x == 102));
    }

    #[test]
    fn alignment_centers_content_and_children() {
        let style = BoxStyle::new()
            .width(px(100))
            .height(px(50))
            .align_horizontal(Align::Center)
            .align_vertical(Align::Last);
        let mut v = View::new(style).child(text("BB")).child(text("A"));
        v.draw(&mut DrawList::new(VIEWPORT), 0, 0);

        // content is 20x24: offset (40, 26); "A" is centred in the 20 px interior.
        let first = v.components()[0].area();
        let second = v.components()[1].area();
        assert_eq!(first.min, Point::new(40, 26));
        assert_eq!(second.min, Point::new(45, 38));
    }

    #[test]
    fn horizontal_children_align_on_the_cross_axis() {
        let style = BoxStyle::new().direction(Direction::Horizontal).align_vertical(Align::Center);
        let mut v = View::new(style).child(block(10, 20)).child(block(10, 10));
        v.draw(&mut DrawList::new(VIEWPORT), 0, 0);
        assert_eq!(v.components()[1].area().min, Point::new(10, 5));
    }

    #[test]
    fn oversized_floating_child_offset_truncates_toward_zero() {
        let wide = View::new(BoxStyle::new().width(px(25)).height(px(5)).floating(true));
        let mut v = View::new(BoxStyle::new().align_horizontal(Align::Center))
            .child(text("AB"))
            .child(wide);
        v.draw(&mut DrawList::new(VIEWPORT), 0, 0);

        // Interior is 20 wide: 0.5 * (20 - 25) = -2.5 places the child at -2, not -3.
        assert_eq!(v.components()[1].area().min, Point::new(-2, 12));
    }

    // ── pixels ──

    #[test]
    fn uniform_background_is_flat() {
        let style = BoxStyle::new().width(px(8)).height(px(8)).background(corner_colors(0xff0000ff));
        let mut canvas = Canvas::new(8, 8);
        View::new(style).draw(&mut canvas, 0, 0);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(canvas.pixel(x, y), Some([255, 0, 0, 255]));
            }
        }
    }

    #[test]
    fn vertical_background_gradient_blends_linearly() {
        let style = BoxStyle::new()
            .width(px(4))
            .height(px(101))
            .background(corner_colors_vertical(0xff0000ff, 0x0000ffff));
        let mut canvas = Canvas::new(4, 101);
        View::new(style).draw(&mut canvas, 0, 0);

        let top = canvas.pixel(1, 0).unwrap();
        let mid = canvas.pixel(1, 50).unwrap();
        let bottom = canvas.pixel(1, 100).unwrap();
        assert!(near(top, [255, 0, 0, 255], 2), "{top:?}");
        assert!(near(mid, [128, 0, 128, 255], 1), "{mid:?}");
        assert!(near(bottom, [0, 0, 255, 255], 2), "{bottom:?}");
    }

    #[test]
    fn border_ring_leaves_the_middle_empty() {
        let style = BoxStyle::new()
            .width(px(20))
            .height(px(20))
            .border_width(Edges::all(px(3)))
            .border_color(corner_colors(0xffffffff));
        let mut canvas = Canvas::new(20, 20);
        View::new(style).draw(&mut canvas, 0, 0);
        assert_eq!(canvas.pixel(1, 10), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(10, 18), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(10, 10), Some([0, 0, 0, 0]));
    }
}
