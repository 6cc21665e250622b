use crate::geometry::{area, intersect};
use crate::model::{Cell, Element};

/// Assign each element to exactly one owning cell: the first cell, in the
/// grid's y-then-x order, whose intersection with the element has positive
/// area.
///
/// A single PDF text run can straddle several adjacent cells (the renderer
/// sometimes merges multiple logical columns' text into one run separated
/// by wide whitespace). The first-in-sort-order rule deterministically
/// hands such a run to the left-most overlapping cell; the overhang
/// splitter redistributes it later. Elements overlapping no cell are
/// dropped.
pub fn bind_elements(cells: &mut [Cell], elements: &[Element]) {
    for element in elements {
        let owner = cells
            .iter_mut()
            .find(|cell| area(&intersect(&cell.rect, &element.rect)) > 0.0);
        if let Some(cell) = owner {
            cell.elements.push(element.clone());
        }
    }
}
