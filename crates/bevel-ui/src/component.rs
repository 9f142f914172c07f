//! The component contract and the closed set of node kinds.

use bevel_engine::Surface;
use bevel_engine::coords::{Area, Size};

use crate::components::{Text, View, Window};

/// A node in the component tree.
///
/// Sizes are measured against a viewport, the pixel size of the surface the
/// tree is drawn on. `draw` measures against the surface it is given, so a
/// tree is laid out correctly on its first frame.
pub trait Component {
    /// Intrinsic size under `viewport`. Records `viewport` as the node's current one.
    fn measure(&mut self, viewport: Size) -> Size;

    /// Intrinsic size under the last recorded viewport.
    fn size(&mut self) -> Size {
        let viewport = self.viewport();
        self.measure(viewport)
    }

    /// Paints the node with its top-left corner at `(x, y)` and records its area.
    fn draw(&mut self, surface: &mut dyn Surface, x: i32, y: i32);

    /// Floating nodes are painted in place without taking up flow space.
    fn is_floating(&self) -> bool;

    fn components(&self) -> &[Node];

    /// Rectangle covered by the most recent `draw`, for hit-testing.
    ///
    /// Meaningless before the first draw and stale after a resize until the next one.
    fn area(&self) -> Area;

    fn viewport(&self) -> Size;
}

/// Owned tree node.
#[derive(Debug, Clone)]
pub enum Node {
    Text(Text),
    View(View),
    Window(Window),
}

impl Node {
    pub fn as_view_mut(&mut self) -> Option<&mut View> {
        match self {
            Node::View(v) => Some(v),
            _ => None,
        }
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Node> {
        match self {
            Node::Text(_) => None,
            Node::View(v) => v.child_mut(index),
            Node::Window(w) => w.child_mut(index),
        }
    }

    /// Follows `path` (child indices from this node) down the tree.
    pub fn at_path_mut(&mut self, path: &[usize]) -> Option<&mut Node> {
        path.iter().try_fold(self, |node, &i| node.child_mut(i))
    }

    fn inner(&self) -> &dyn Component {
        match self {
            Node::Text(t) => t,
            Node::View(v) => v,
            Node::Window(w) => w,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Component {
        match self {
            Node::Text(t) => t,
            Node::View(v) => v,
            Node::Window(w) => w,
        }
    }
}

impl Component for Node {
    fn measure(&mut self, viewport: Size) -> Size {
        self.inner_mut().measure(viewport)
    }

    fn draw(&mut self, surface: &mut dyn Surface, x: i32, y: i32) {
        self.inner_mut().draw(surface, x, y)
    }

    fn is_floating(&self) -> bool {
        self.inner().is_floating()
    }

    fn components(&self) -> &[Node] {
        self.inner().components()
    }

    fn area(&self) -> Area {
        self.inner().area()
    }

    fn viewport(&self) -> Size {
        self.inner().viewport()
    }
}

impl From<Text> for Node {
    fn from(t: Text) -> Self {
        Node::Text(t)
    }
}

impl From<View> for Node {
    fn from(v: View) -> Self {
        Node::View(v)
    }
}

impl From<Window> for Node {
    fn from(w: Window) -> Self {
        Node::Window(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::px;
    use crate::style::BoxStyle;

    fn tree() -> Node {
        Window::new()
            .child(View::new(BoxStyle::new()).child(Text::new("a")).child(View::new(BoxStyle::new())))
            .into()
    }

    #[test]
    fn at_path_mut_walks_child_indices() {
        let mut root = tree();
        assert!(matches!(root.at_path_mut(&[]), Some(Node::Window(_))));
        assert!(matches!(root.at_path_mut(&[0, 0]), Some(Node::Text(_))));
        assert!(root.at_path_mut(&[0, 1]).and_then(Node::as_view_mut).is_some());
    }

    #[test]
    fn at_path_mut_stops_at_leaves_and_bad_indices() {
        let mut root = tree();
        assert!(root.at_path_mut(&[0, 0, 0]).is_none());
        assert!(root.at_path_mut(&[3]).is_none());
        assert!(root.at_path_mut(&[0, 0]).and_then(Node::as_view_mut).is_none());
    }

    #[test]
    fn mutation_through_a_path_reaches_the_owned_node() {
        let mut root = tree();
        if let Some(v) = root.at_path_mut(&[0, 1]).and_then(Node::as_view_mut) {
            v.push_style(BoxStyle::new().width(px(30)).height(px(4)));
        }
        assert_eq!(root.measure(Size::new(100, 100)), Size::new(30, 16));
    }
}
