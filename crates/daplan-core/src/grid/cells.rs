use crate::geometry::{cmp_y_then_x, Point, Rect};
use crate::model::Cell;
use std::cmp::Ordering;

/// Points whose x (or y) differ by less than this sit on the same grid
/// line.
const SAME_LINE_TOLERANCE: f64 = 1.0;

/// Y band within which cells count as the same row when sorting.
const CELL_SORT_Y_TOLERANCE: f64 = 2.0;

/// Synthesize cells by pairing each point with its nearest right and down
/// neighbors.
///
/// Points lacking either neighbor (grid boundary and corner artifacts)
/// produce no cell; that is intentional. The result is sorted y-then-x
/// with a 2px y band, a precondition for the element binder and the row
/// grouper.
pub fn from_points(points: &[Point]) -> Vec<Cell> {
    let mut cells = Vec::new();
    for p in points {
        let right = nearest_right(points, p);
        let down = nearest_down(points, p);
        if let (Some(right), Some(down)) = (right, down) {
            cells.push(Cell::new(Rect::new(
                p.x,
                p.y,
                right.x - p.x,
                down.y - p.y,
            )));
        }
    }
    cells.sort_by(|a, b| cmp_y_then_x(&a.rect, &b.rect, CELL_SORT_Y_TOLERANCE));
    cells
}

/// Nearest point to the right of `p` on the same horizontal line.
fn nearest_right<'a>(points: &'a [Point], p: &Point) -> Option<&'a Point> {
    points
        .iter()
        .filter(|q| (q.y - p.y).abs() < SAME_LINE_TOLERANCE && q.x > p.x)
        .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
}

/// Nearest point directly below `p` on the same vertical line.
fn nearest_down<'a>(points: &'a [Point], p: &Point) -> Option<&'a Point> {
    points
        .iter()
        .filter(|q| (q.x - p.x).abs() < SAME_LINE_TOLERANCE && q.y > p.y)
        .min_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}
