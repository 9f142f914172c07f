//! Scanline polygon filling.

use crate::coords::{Size, Vec2};
use crate::path::FillRule;

/// Non-horizontal polygon edge, stored top to bottom.
#[derive(Debug, Copy, Clone)]
struct Edge {
    y_top: f32,
    y_bottom: f32,
    x_at_top: f32,
    dx_dy: f32,
    /// +1 for edges running downward in contour order, -1 for upward.
    winding: i32,
}

fn build_edges(contours: &[Vec<Vec2>]) -> Vec<Edge> {
    let mut edges = Vec::new();
    for contour in contours {
        for (i, &a) in contour.iter().enumerate() {
            let b = contour[(i + 1) % contour.len()];
            if a.y == b.y {
                continue;
            }
            let (top, bottom, winding) = if a.y < b.y { (a, b, 1) } else { (b, a, -1) };
            edges.push(Edge {
                y_top: top.y,
                y_bottom: bottom.y,
                x_at_top: top.x,
                dx_dy: (bottom.x - top.x) / (bottom.y - top.y),
                winding,
            });
        }
    }
    edges
}

/// Calls `span(x_start, x_end, y)` for every run of pixels whose centers lie
/// inside the contours under `rule`, clipped to `size`. `x_end` is exclusive.
pub(super) fn scan_spans(
    contours: &[Vec<Vec2>],
    rule: FillRule,
    size: Size,
    mut span: impl FnMut(i32, i32, i32),
) {
    let edges = build_edges(contours);
    if edges.is_empty() || size.width <= 0 || size.height <= 0 {
        return;
    }

    let y_min = edges.iter().map(|e| e.y_top).fold(f32::INFINITY, f32::min);
    let y_max = edges.iter().map(|e| e.y_bottom).fold(f32::NEG_INFINITY, f32::max);
    let row_start = ((y_min - 0.5).ceil() as i32).max(0);
    let row_end = ((y_max - 0.5).ceil() as i32).min(size.height);

    let mut crossings: Vec<(f32, i32)> = Vec::new();
    for y in row_start..row_end {
        let cy = y as f32 + 0.5;

        crossings.clear();
        crossings.extend(
            edges
                .iter()
                .filter(|e| e.y_top <= cy && cy < e.y_bottom)
                .map(|e| (e.x_at_top + (cy - e.y_top) * e.dx_dy, e.winding)),
        );
        crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut winding = 0;
        for pair in crossings.windows(2) {
            winding += pair[0].1;
            if !rule.is_inside(winding) {
                continue;
            }
            let x0 = ((pair[0].0 - 0.5).ceil() as i32).max(0);
            let x1 = ((pair[1].0 - 0.5).ceil() as i32).min(size.width);
            if x0 < x1 {
                span(x0, x1, y);
            }
        }
    }
}
