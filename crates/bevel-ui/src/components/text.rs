use bevel_engine::Surface;
use bevel_engine::coords::{Area, Point, Size, Vec2};
use bevel_engine::paint::Color;
use bevel_engine::text::FontFace;
use log::{debug, trace};

use crate::component::{Component, Node};
use crate::style::{TextFont, TextStyle};

/// A block of text, one or more lines.
///
/// The source string is kept as given. Lines are derived from it on each
/// layout, so changing the viewport (and with it a viewport-relative max
/// width) reflows from scratch.
#[derive(Debug, Clone)]
pub struct Text {
    source: String,
    lines: Vec<String>,
    style: TextStyle,
    /// Size of `lines`, keyed by the viewport it was measured under.
    cached: Option<(Size, Size)>,
    viewport: Size,
    area: Area,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_style(text, TextStyle::new())
    }

    /// Unset fields of `style` take [`TextStyle::defaults`].
    pub fn with_style(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            source: text.into(),
            lines: Vec::new(),
            style: TextStyle::defaults().merge(std::slice::from_ref(&style)),
            cached: None,
            viewport: Size::zero(),
            area: Area::default(),
        }
    }

    /// Replaces the text; the next measure lays it out again.
    pub fn change_text(&mut self, text: impl Into<String>) {
        self.source = text.into();
        self.cached = None;
    }

    /// The text as last given to [`Text::new`] or [`Text::change_text`].
    pub fn text(&self) -> &str {
        &self.source
    }

    /// Lines produced by the most recent layout.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Effective style, defaults included.
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    fn font(&self) -> TextFont {
        self.style.font.clone().unwrap_or_else(TextFont::bitmap)
    }

    fn line_height(&self, viewport: Size) -> i32 {
        self.style.line_height.as_ref().map_or(12, |h| h.resolve(viewport))
    }
}

impl Component for Text {
    fn measure(&mut self, viewport: Size) -> Size {
        self.viewport = viewport;
        if let Some((at, size)) = self.cached {
            if at == viewport {
                return size;
            }
        }

        let font = self.font();
        let face = font.face();
        self.lines = match &self.style.max_width {
            Some(w) => {
                let max_width = w.resolve(viewport);
                let lines = wrap_text(&self.source, face, max_width);
                debug!("text reflowed into {} line(s) at max width {max_width}", lines.len());
                lines
            }
            None => self.source.split('\n').map(str::to_owned).collect(),
        };

        let width = self.lines.iter().map(|l| face.measure(l)).max().unwrap_or(0);
        let size = Size::new(width, self.lines.len() as i32 * self.line_height(viewport));
        trace!("text {:?} measured {}x{}", self.source, size.width, size.height);

        self.cached = Some((viewport, size));
        size
    }

    fn draw(&mut self, surface: &mut dyn Surface, x: i32, y: i32) {
        let size = self.measure(surface.size());
        self.area = Area::from_origin_size(Point::new(x, y), size);
        if self.source.is_empty() {
            return;
        }

        let font = self.font();
        let line_height = self.line_height(self.viewport);
        let baseline = y + line_height - line_height / 2 + font.y_adjustment();
        let origin = Vec2::new((x + font.x_adjustment()) as f32, baseline as f32);
        let color = self.style.color.unwrap_or_else(Color::white);

        surface.draw_text(&self.lines.join("\n"), font.face(), origin, line_height as f32, color);
    }

    fn is_floating(&self) -> bool {
        false
    }

    fn components(&self) -> &[Node] {
        &[]
    }

    fn area(&self) -> Area {
        self.area
    }

    fn viewport(&self) -> Size {
        self.viewport
    }
}

/// Greedy character wrap of every `'\n'`-separated line of `text`.
///
/// A line breaks before the character that would push its measured width past
/// `max_width`. A character too wide to fit anywhere still gets a line of its
/// own. Text whose lines already fit comes back unchanged.
pub fn wrap_text(text: &str, face: &dyn FontFace, max_width: i32) -> Vec<String> {
    let mut out = Vec::new();
    for source_line in text.split('\n') {
        let mut line = String::new();
        let mut width = 0.0f32;
        for ch in source_line.chars() {
            let advance = face.advance(ch);
            if !line.is_empty() && (width + advance).ceil() as i32 > max_width {
                out.push(std::mem::take(&mut line));
                width = 0.0;
            }
            line.push(ch);
            width += advance;
        }
        out.push(line);
    }
    out
}
