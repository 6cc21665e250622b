use crate::model::{Cell, Row};
use std::cmp::Ordering;

/// Cells whose y differs by less than this from a row's first cell join
/// that row.
pub(crate) const ROW_Y_TOLERANCE: f64 = 2.0;

/// Cluster cells into rows by approximate y coordinate.
///
/// The input is expected in y-then-x order already (the cell
/// reconstructor's sort); the trailing re-sorts are a safety net, not the
/// primary ordering mechanism.
pub fn group_rows(cells: Vec<Cell>) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::new();
    for cell in cells {
        let row = rows
            .iter_mut()
            .find(|row| (row.cells[0].rect.y - cell.rect.y).abs() < ROW_Y_TOLERANCE);
        match row {
            Some(row) => row.cells.push(cell),
            None => rows.push(Row { cells: vec![cell] }),
        }
    }

    rows.sort_by(|a, b| {
        a.cells[0]
            .rect
            .y
            .partial_cmp(&b.cells[0].rect.y)
            .unwrap_or(Ordering::Equal)
    });
    for row in &mut rows {
        row.cells
            .sort_by(|a, b| a.rect.x.partial_cmp(&b.rect.x).unwrap_or(Ordering::Equal));
    }
    rows
}
