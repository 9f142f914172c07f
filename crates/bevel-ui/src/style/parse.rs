//! Compact string literals for style values.
//!
//! Parsing happens once, when a style is built. Draw code only ever sees the
//! typed values.
//!
//! | literal                  | result                                   |
//! |--------------------------|------------------------------------------|
//! | `"12"`, `"12px"`         | 12 pixels                                |
//! | `"50vw"`, `"25vh"`       | half the viewport width, a quarter height|
//! | `"50vw + 10px"`          | sum of terms (`-` negates the next term) |
//! | `"5 45"`                 | edges: vertical 5, horizontal 45         |
//! | `"#fff"`, `"#ffffff99"`  | colors                                   |

use std::str::FromStr;

use bevel_engine::coords::{Corners, Edges};
use bevel_engine::paint::Color;

use super::StyleParseError;
use crate::size::{SizeExpr, SizeTerm};

// ── Sizes ─────────────────────────────────────────────────────────────────

impl FromStr for SizeExpr {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(StyleParseError::new("empty size", s));
        }

        let mut terms = split_terms(&compact)
            .into_iter()
            .map(|(negative, body)| parse_term(negative, body).ok_or_else(|| StyleParseError::new("bad size term", s)));

        let first = match terms.next() {
            Some(t) => t?,
            None => return Err(StyleParseError::new("empty size", s)),
        };
        terms.try_fold(SizeExpr::new(first), |expr, t| Ok(expr.plus(SizeExpr::new(t?))))
    }
}

/// Splits `"50vw+10px-2px"` into signed term bodies. A sign directly after
/// another sign stays attached to the term (`"10px+-2px"`).
fn split_terms(s: &str) -> Vec<(bool, &str)> {
    let mut out = Vec::new();
    let mut negative = false;
    let mut start = 0;

    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        start = s.len() - rest.len();
    } else if let Some(rest) = s.strip_prefix('+') {
        start = s.len() - rest.len();
    }

    for (i, c) in s.char_indices().skip(start) {
        if (c == '+' || c == '-') && i > start {
            out.push((negative, &s[start..i]));
            negative = c == '-';
            start = i + 1;
        }
    }
    out.push((negative, &s[start..]));
    out
}

fn parse_term(negative: bool, body: &str) -> Option<SizeTerm> {
    let sign = if negative { -1 } else { 1 };
    if let Some(v) = body.strip_suffix("vw") {
        let p: f64 = v.parse().ok()?;
        return p.is_finite().then(|| SizeTerm::Vw(f64::from(sign) * p));
    }
    if let Some(v) = body.strip_suffix("vh") {
        let p: f64 = v.parse().ok()?;
        return p.is_finite().then(|| SizeTerm::Vh(f64::from(sign) * p));
    }
    let digits = body.strip_suffix("px").unwrap_or(body);
    let v: i32 = digits.parse().ok()?;
    Some(SizeTerm::Px(sign * v))
}

/// Parses 1 to 4 whitespace-separated sizes in CSS shorthand order.
///
/// Terms inside one size must not contain spaces here (`"50vw+10px 4"`).
pub fn parse_edges(s: &str) -> Result<Edges<SizeExpr>, StyleParseError> {
    let parts = s
        .split_whitespace()
        .map(SizeExpr::from_str)
        .collect::<Result<Vec<_>, _>>()?;

    match parts.as_slice() {
        [a] => Ok(Edges::all(a.clone())),
        [v, h] => Ok(Edges::symmetric(v.clone(), h.clone())),
        [t, h, b] => Ok(Edges::top_horizontal_bottom(t.clone(), h.clone(), b.clone())),
        [t, r, b, l] => Ok(Edges::new(t.clone(), r.clone(), b.clone(), l.clone())),
        _ => Err(StyleParseError::new("expected 1 to 4 edge values", s)),
    }
}

// ── Radii ─────────────────────────────────────────────────────────────────

/// Parses 1, 2 or 4 integer radii: all corners; left/right; tl tr br bl.
pub fn parse_radius(s: &str) -> Result<Corners<i32>, StyleParseError> {
    let parts = s
        .split_whitespace()
        .map(|p| p.strip_suffix("px").unwrap_or(p).parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| StyleParseError::new("bad radius", s))?;

    corners_from(parts).ok_or_else(|| StyleParseError::new("expected 1, 2 or 4 radii", s))
}

fn corners_from<T: Clone>(parts: Vec<T>) -> Option<Corners<T>> {
    match parts.as_slice() {
        [a] => Some(Corners::all(a.clone())),
        [l, r] => Some(Corners::horizontal(l.clone(), r.clone())),
        [tl, tr, br, bl] => Some(Corners::new(tl.clone(), tr.clone(), br.clone(), bl.clone())),
        _ => None,
    }
}

// ── Colors ────────────────────────────────────────────────────────────────

/// Parses `#RGB`, `#RRGGBB` or `#RRGGBBAA`. Alpha defaults to opaque.
pub fn parse_color(s: &str) -> Result<Color, StyleParseError> {
    let err = || StyleParseError::new("expected #RGB, #RRGGBB or #RRGGBBAA", s);
    let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(err());
    }

    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17).map_err(|_| err());

    match hex.len() {
        3 => Ok(Color::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
        6 => Ok(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, 255)),
        8 => Ok(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => Err(err()),
    }
}

/// Parses 1, 2 or 4 whitespace-separated colors into a corner quad.
pub fn parse_colors(s: &str) -> Result<Corners<Color>, StyleParseError> {
    let parts = s.split_whitespace().map(parse_color).collect::<Result<Vec<_>, _>>()?;
    corners_from(parts).ok_or_else(|| StyleParseError::new("expected 1, 2 or 4 colors", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::{px, vh, vw};

    // ── sizes ──

    #[test]
    fn size_literals() {
        assert_eq!("12".parse::<SizeExpr>(), Ok(px(12)));
        assert_eq!("12px".parse::<SizeExpr>(), Ok(px(12)));
        assert_eq!("-3px".parse::<SizeExpr>(), Ok(px(-3)));
        assert_eq!("50vw".parse::<SizeExpr>(), Ok(vw(0.5)));
        assert_eq!("25vh".parse::<SizeExpr>(), Ok(vh(0.25)));
    }

    #[test]
    fn size_sums_keep_term_order() {
        assert_eq!("50vw + 10px".parse::<SizeExpr>(), Ok(vw(0.5).plus(px(10))));
        assert_eq!("10px-2px".parse::<SizeExpr>(), Ok(px(10).plus(px(-2))));
        assert_eq!("10px+-2px".parse::<SizeExpr>(), Ok(px(10).plus(px(-2))));
    }

    #[test]
    fn whole_percentages_resolve_exactly() {
        use bevel_engine::coords::Size;

        for viewport in [100, 200, 300, 640, 1000] {
            for n in 0..=100 {
                let width = format!("{n}vw").parse::<SizeExpr>().unwrap();
                let height = format!("{n}vh").parse::<SizeExpr>().unwrap();
                let size = Size::new(viewport, viewport);
                assert_eq!(width.resolve(size), viewport * n / 100, "{n}vw of {viewport}");
                assert_eq!(height.resolve(size), viewport * n / 100, "{n}vh of {viewport}");
            }
        }
    }

    #[test]
    fn fractional_percentages_floor() {
        use bevel_engine::coords::Size;

        let e = "25.5vh".parse::<SizeExpr>().unwrap();
        assert_eq!(e.resolve(Size::new(0, 100)), 25);
        assert_eq!(e.resolve(Size::new(0, 200)), 51);
        assert_eq!("-10vw".parse::<SizeExpr>().unwrap().resolve(Size::new(55, 0)), -6);
    }

    #[test]
    fn size_rejects_garbage() {
        assert!("".parse::<SizeExpr>().is_err());
        assert!("12em".parse::<SizeExpr>().is_err());
        assert!("10px+".parse::<SizeExpr>().is_err());
        assert!("1.5px".parse::<SizeExpr>().is_err());
    }

    // ── edges ──

    #[test]
    fn edges_accept_css_shorthand_counts() {
        assert_eq!(parse_edges("4"), Ok(Edges::all(px(4))));
        assert_eq!(parse_edges("5 45"), Ok(Edges::new(px(5), px(45), px(5), px(45))));
        assert_eq!(parse_edges("1 2 3"), Ok(Edges::new(px(1), px(2), px(3), px(2))));
        assert_eq!(parse_edges("1 2 3 4"), Ok(Edges::new(px(1), px(2), px(3), px(4))));
    }

    #[test]
    fn edges_reject_wrong_counts() {
        let err = parse_edges("1 2 3 4 5").unwrap_err();
        assert_eq!(err.literal, "1 2 3 4 5");
        assert!(parse_edges("").is_err());
        assert!(parse_edges("1 x").is_err());
    }

    // ── radii ──

    #[test]
    fn radius_counts() {
        assert_eq!(parse_radius("8"), Ok(Corners::all(8)));
        assert_eq!(parse_radius("8 0"), Ok(Corners::new(8, 0, 0, 8)));
        assert_eq!(parse_radius("1 2 3 4"), Ok(Corners::new(1, 2, 3, 4)));
        assert!(parse_radius("1 2 3").is_err());
        assert!(parse_radius("a").is_err());
    }

    // ── colors ──

    #[test]
    fn hex_colors() {
        assert_eq!(parse_color("#fff"), Ok(Color::white()));
        assert_eq!(parse_color("#000000"), Ok(Color::black()));
        assert_eq!(parse_color("#ffffff99"), Ok(Color::from_rgba8(255, 255, 255, 0x99)));
        assert!(parse_color("fff").is_err());
        assert!(parse_color("#ffff").is_err());
        assert!(parse_color("#gg0000").is_err());
    }

    #[test]
    fn color_quads() {
        let q = parse_colors("#f00 #00f").unwrap();
        assert_eq!(q.top_left, Color::from_rgba8(255, 0, 0, 255));
        assert_eq!(q.bottom_right, Color::from_rgba8(0, 0, 255, 255));
        assert!(parse_colors("#f00 #0f0 #00f").is_err());
    }
}
