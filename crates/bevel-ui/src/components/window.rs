use bevel_engine::Surface;
use bevel_engine::coords::{Area, Point, Size};

use crate::component::{Component, Node};

/// Root of a frame: stacks its children top to bottom, left-aligned, with no
/// styling of its own.
#[derive(Debug, Clone, Default)]
pub struct Window {
    children: Vec<Node>,
    viewport: Size,
    area: Area,
}

impl Window {
    pub fn new() -> Self {
        Self::default()
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
}

impl Component for Window {
    fn measure(&mut self, viewport: Size) -> Size {
        self.viewport = viewport;
        self.children.iter_mut().fold(Size::zero(), |acc, c| {
            let s = c.measure(viewport);
            Size::new(acc.width.max(s.width), acc.height + s.height)
        })
    }

    fn draw(&mut self, surface: &mut dyn Surface, x: i32, y: i32) {
        let viewport = surface.size();
        let size = self.measure(viewport);
        self.area = Area::from_origin_size(Point::new(x, y), size);

        let mut cy = y;
        for child in &mut self.children {
            let height = child.measure(viewport).height;
            child.draw(surface, x, cy);
            cy += height;
        }
    }

    fn is_floating(&self) -> bool {
        false
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
