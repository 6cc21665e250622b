use crate::geometry::Rect;
use crate::grid::LINE_THICKNESS_MAX;
use crate::source::PageOperator;

/// Lines shorter than this are serifs or underlines, not table borders.
const LINE_LENGTH_MIN: f64 = 10.0;

/// Scan a page's drawing operators for degenerate, line-like rectangles.
///
/// Path arguments arrive in the decoder's `[y, x, height, width]` order.
pub fn extract_lines(operators: &[PageOperator]) -> Vec<Rect> {
    let mut lines = Vec::new();
    for op in operators {
        let PageOperator::Path { args } = op else {
            continue;
        };
        if args.len() < 4 {
            continue;
        }
        let rect = Rect::new(args[1], args[0], args[3], args[2]);
        if is_grid_line(&rect) {
            lines.push(rect);
        }
    }
    lines
}

fn is_grid_line(r: &Rect) -> bool {
    // Thick in both directions: a filled shape, not a grid line.
    if r.width > LINE_THICKNESS_MAX && r.height > LINE_THICKNESS_MAX {
        return false;
    }
    // Thin but short: decorative marks.
    if r.width <= LINE_THICKNESS_MAX && r.height < LINE_LENGTH_MIN {
        return false;
    }
    if r.height <= LINE_THICKNESS_MAX && r.width < LINE_LENGTH_MIN {
        return false;
    }
    true
}
