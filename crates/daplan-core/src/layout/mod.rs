//! Page layout: binding text elements to cells and repairing runs that
//! leaked across cell boundaries.

pub mod binder;
pub mod elements;
pub mod overhang;
pub mod rows;

use crate::model::{Cell, Element, HeaderLabels, Row};
use crate::records::headers::Headers;

/// Compose binding, row grouping and overhang splitting into rows ready
/// for record extraction.
///
/// Overhang splitting needs the header cells to know which semantic
/// column a cell belongs to; when the required headers are missing the
/// splitting pass is skipped (the page will be skipped downstream anyway).
pub fn build_rows(cells: Vec<Cell>, elements: &[Element], labels: &HeaderLabels) -> Vec<Row> {
    let mut cells = cells;
    binder::bind_elements(&mut cells, elements);
    let mut rows = rows::group_rows(cells);
    if let Some(headers) = Headers::locate(&rows, labels) {
        overhang::split_overhangs(&mut rows, &headers);
    }
    rows
}
