use crate::geometry::{squared_distance, Point, Rect};
use crate::grid::LINE_THICKNESS_MAX;

/// Points closer than one pixel (squared distance < 1) are the same grid
/// intersection reported with sub-pixel jitter.
const COINCIDENT_DISTANCE_SQ: f64 = 1.0;

/// Collapse the retained lines' endpoints into a deduplicated point set.
pub fn build_point_grid(lines: &[Rect]) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::new();
    for line in lines {
        let (start, end) = endpoints(line);
        insert(&mut points, start);
        insert(&mut points, end);
    }
    points
}

fn endpoints(line: &Rect) -> (Point, Point) {
    if line.height <= LINE_THICKNESS_MAX {
        // Horizontal line: runs along x.
        (
            Point {
                x: line.x,
                y: line.y,
            },
            Point {
                x: line.x + line.width,
                y: line.y,
            },
        )
    } else {
        // Vertical line: runs along y.
        (
            Point {
                x: line.x,
                y: line.y,
            },
            Point {
                x: line.x,
                y: line.y + line.height,
            },
        )
    }
}

fn insert(points: &mut Vec<Point>, candidate: Point) {
    let coincident = points
        .iter()
        .any(|p| squared_distance(p, &candidate) < COINCIDENT_DISTANCE_SQ);
    if !coincident {
        points.push(candidate);
    }
}
