use lyon::math::point;
use lyon::path::PathEvent;
use lyon::path::iterator::PathIterator;

use crate::coords::Vec2;

use super::{Path, Segment};

/// Maximum distance in pixels between a curve and its flattened polyline.
const TOLERANCE: f32 = 0.1;

impl Path {
    /// Flattens the path into closed polylines.
    ///
    /// Consecutive duplicate points are dropped and contours with fewer than
    /// three points are discarded, since they enclose no area.
    pub fn contours(&self) -> Vec<Vec<Vec2>> {
        let mut out = Vec::new();
        let mut current: Vec<Vec2> = Vec::new();

        for event in self.to_lyon().iter().flattened(TOLERANCE) {
            match event {
                PathEvent::Begin { at } => {
                    current.clear();
                    push_point(&mut current, Vec2::new(at.x, at.y));
                }
                PathEvent::Line { to, .. } => push_point(&mut current, Vec2::new(to.x, to.y)),
                PathEvent::End { .. } => finish(&mut out, &mut current),
                // Flattening only yields lines.
                PathEvent::Quadratic { .. } | PathEvent::Cubic { .. } => {}
            }
        }
        out
    }

    /// Converts the recorded segments into a lyon path.
    ///
    /// Every sub-path is ended before the next one begins; a segment that
    /// follows `Close` starts a new sub-path at the pen position.
    fn to_lyon(&self) -> lyon::path::Path {
        let mut builder = lyon::path::Path::builder();
        let mut open = false;
        let mut start = Vec2::zero();
        let mut pen = Vec2::zero();

        for seg in self.segments() {
            match *seg {
                Segment::MoveTo(p) => {
                    if open {
                        builder.end(false);
                    }
                    builder.begin(point(p.x, p.y));
                    open = true;
                    start = p;
                    pen = p;
                }
                Segment::LineTo(to) | Segment::QuadTo { to, .. } => {
                    if !open {
                        builder.begin(point(pen.x, pen.y));
                        open = true;
                        start = pen;
                    }
                    match *seg {
                        // A quad whose control point sits on an endpoint is a straight line.
                        Segment::QuadTo { ctrl, to } if ctrl != pen && ctrl != to => {
                            builder.quadratic_bezier_to(point(ctrl.x, ctrl.y), point(to.x, to.y));
                        }
                        _ => {
                            builder.line_to(point(to.x, to.y));
                        }
                    }
                    pen = to;
                }
                Segment::Close => {
                    if open {
                        builder.end(true);
                        open = false;
                    }
                    pen = start;
                }
            }
        }
        if open {
            builder.end(false);
        }
        builder.build()
    }
}

fn push_point(contour: &mut Vec<Vec2>, p: Vec2) {
    if contour.last() != Some(&p) {
        contour.push(p);
    }
}

fn finish(out: &mut Vec<Vec<Vec2>>, current: &mut Vec<Vec2>) {
    // The closing edge is implicit; a repeated start point adds nothing.
    if current.len() > 1 && current.first() == current.last() {
        current.pop();
    }
    if current.len() >= 3 {
        out.push(std::mem::take(current));
    } else {
        current.clear();
    }
}
