use std::fmt;
use std::rc::Rc;

use bevel_engine::paint::Color;
use bevel_engine::text::{BitmapFont, FontFace};

use super::overlay;
use crate::size::SizeExpr;

// ── TextFont ──────────────────────────────────────────────────────────────

/// A font face plus the pixel nudge that lines its glyphs up inside a line box.
///
/// Faces place glyphs relative to a baseline; the adjustments move that
/// baseline so the ink of a particular face sits where the layout expects.
/// Clones share the face.
#[derive(Clone)]
pub struct TextFont {
    face: Rc<dyn FontFace>,
    x_adjustment: i32,
    y_adjustment: i32,
}

thread_local! {
    static BITMAP: TextFont = TextFont::new(Rc::new(BitmapFont::new()), 0, 3);
}

impl TextFont {
    pub fn new(face: Rc<dyn FontFace>, x_adjustment: i32, y_adjustment: i32) -> Self {
        Self { face, x_adjustment, y_adjustment }
    }

    /// Wraps `face` with no adjustment.
    pub fn from_face(face: impl FontFace + 'static) -> Self {
        Self::new(Rc::new(face), 0, 0)
    }

    /// The built-in bitmap font. Every call on one thread returns the same face.
    pub fn bitmap() -> Self {
        BITMAP.with(Clone::clone)
    }

    #[inline]
    pub fn face(&self) -> &dyn FontFace {
        &*self.face
    }

    #[inline]
    pub fn x_adjustment(&self) -> i32 {
        self.x_adjustment
    }

    #[inline]
    pub fn y_adjustment(&self) -> i32 {
        self.y_adjustment
    }

    pub fn with_adjustment(mut self, x: i32, y: i32) -> Self {
        self.x_adjustment = x;
        self.y_adjustment = y;
        self
    }
}

impl PartialEq for TextFont {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.face), Rc::as_ptr(&other.face))
            && self.x_adjustment == other.x_adjustment
            && self.y_adjustment == other.y_adjustment
    }
}

impl fmt::Debug for TextFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextFont")
            .field("face", &Rc::as_ptr(&self.face))
            .field("x_adjustment", &self.x_adjustment)
            .field("y_adjustment", &self.y_adjustment)
            .finish()
    }
}

// ── TextStyle ─────────────────────────────────────────────────────────────

/// Style of a [`Text`](crate::components::Text) node. Unset fields fall back
/// to [`TextStyle::defaults`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub line_height: Option<SizeExpr>,
    pub font: Option<TextFont>,
    /// Lines longer than this are wrapped.
    pub max_width: Option<SizeExpr>,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// White, 12 px lines, bitmap font, no wrapping.
    pub fn defaults() -> Self {
        Self {
            color: Some(Color::white()),
            line_height: Some(SizeExpr::px(12)),
            font: Some(TextFont::bitmap()),
            max_width: None,
        }
    }

    pub fn color(mut self, c: Color) -> Self {
        self.color = Some(c);
        self
    }

    pub fn line_height(mut self, h: impl Into<SizeExpr>) -> Self {
        self.line_height = Some(h.into());
        self
    }

    pub fn font(mut self, font: TextFont) -> Self {
        self.font = Some(font);
        self
    }

    pub fn max_width(mut self, w: impl Into<SizeExpr>) -> Self {
        self.max_width = Some(w.into());
        self
    }

    /// Lays `overrides` over `self` in order; for each field the last set value wins.
    pub fn merge(&self, overrides: &[TextStyle]) -> TextStyle {
        let mut out = self.clone();
        for o in overrides {
            overlay(&mut out.color, &o.color);
            overlay(&mut out.line_height, &o.line_height);
            overlay(&mut out.font, &o.font);
            overlay(&mut out.max_width, &o.max_width);
        }
        out
    }
}
