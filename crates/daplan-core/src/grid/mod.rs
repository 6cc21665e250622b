//! Grid recovery: from raw drawing operators to table cells.
//!
//! Register PDFs carry no semantic table structure. The grid is recovered
//! from the drawn border lines in three steps: keep the line-like path
//! rectangles, coalesce their endpoints into a point set, then pair each
//! point with its nearest right and down neighbors to synthesize cells.

pub mod cells;
pub mod lines;
pub mod points;

use crate::model::Cell;
use crate::source::PageOperator;

/// Rectangles no thicker than this count as drawn lines.
pub(crate) const LINE_THICKNESS_MAX: f64 = 2.0;

/// Recover the page's cell grid from its drawing operators.
pub fn reconstruct_cells(operators: &[PageOperator]) -> Vec<Cell> {
    let lines = lines::extract_lines(operators);
    let points = points::build_point_grid(&lines);
    let cells = cells::from_points(&points);
    log::debug!(
        "grid: {} line(s) -> {} point(s) -> {} cell(s)",
        lines.len(),
        points.len(),
        cells.len()
    );
    cells
}
