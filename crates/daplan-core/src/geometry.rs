use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A grid-intersection candidate, in page coordinates (already
/// viewport-transformed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Base type for every positioned entity in the pipeline.
/// Invariant: `width >= 0` and `height >= 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// The overlapping rectangle of `a` and `b`, or a zero rectangle when they
/// are disjoint.
pub fn intersect(a: &Rect, b: &Rect) -> Rect {
    let x1 = a.x.max(b.x);
    let y1 = a.y.max(b.y);
    let x2 = a.right().min(b.right());
    let y2 = a.bottom().min(b.bottom());

    if x2 < x1 || y2 < y1 {
        return Rect::default();
    }
    Rect::new(x1, y1, x2 - x1, y2 - y1)
}

/// True iff `inner` lies entirely within `outer`, boundaries inclusive.
pub fn contains(outer: &Rect, inner: &Rect) -> bool {
    inner.x >= outer.x
        && inner.y >= outer.y
        && inner.right() <= outer.right()
        && inner.bottom() <= outer.bottom()
}

pub fn area(r: &Rect) -> f64 {
    r.width * r.height
}

/// Overlap of the X projections of `a` and `b` as a percentage of their
/// combined X span, in `[0, 100]`.
///
/// This is the metric used wherever a cell must be matched to a header
/// column: it tolerates rows that are marginally narrower or wider than
/// the header row.
pub fn horizontal_overlap_percentage(a: &Rect, b: &Rect) -> f64 {
    if a.width == 0.0 || b.width == 0.0 {
        return 0.0;
    }
    let overlap = a.right().min(b.right()) - a.x.max(b.x);
    if overlap <= 0.0 {
        return 0.0;
    }
    let span = a.right().max(b.right()) - a.x.min(b.x);
    100.0 * overlap / span
}

/// Overlap of the Y projections of `a` and `b` as a percentage of `b`'s
/// height, in `[0, 100]`.
///
/// Deliberately asymmetric: it answers "how much of `b` does `a` cover
/// vertically", for testing whether a candidate row-mate overlaps a
/// reference element.
pub fn vertical_overlap_percentage(a: &Rect, b: &Rect) -> f64 {
    if a.height == 0.0 || b.height == 0.0 {
        return 0.0;
    }
    let overlap = a.bottom().min(b.bottom()) - a.y.max(b.y);
    if overlap <= 0.0 {
        return 0.0;
    }
    100.0 * overlap / b.height
}

pub fn squared_distance(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Y-then-X ordering with a Y coincidence band: rectangles whose `y`
/// values differ by less than `y_tolerance` count as the same band and
/// order by `x`. This ordering is load-bearing for cell ownership and
/// header lookup ("first in the sort order wins").
pub fn cmp_y_then_x(a: &Rect, b: &Rect, y_tolerance: f64) -> Ordering {
    if (a.y - b.y).abs() < y_tolerance {
        a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal)
    } else {
        a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal)
    }
}
