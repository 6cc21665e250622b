use crate::geometry::{cmp_y_then_x, contains, Rect};
use crate::layout::elements::ELEMENT_SORT_Y_TOLERANCE;
use crate::model::{Cell, Element, Row};
use crate::records::headers::{Column, Headers};
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

/// The renderer separates merged columns with runs of three or more
/// spaces inside a single text run.
static COLUMN_GAP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {3,}").expect("valid regex"));

/// Elements within this vertical distance of an overhang element belong
/// to the same logical line of the cell.
const ALIGNED_Y_TOLERANCE: f64 = 5.0;

/// Detect text elements that leaked across cell boundaries and
/// redistribute their sub-tokens to the correct neighboring cells.
///
/// An overhang element is one not fully contained by the cell it was
/// bound to: the renderer merged several logical columns' text into one
/// run. The run (joined with whatever else sits on its line) is split on
/// column gaps and re-routed based on which semantic column the cell
/// belongs to.
pub fn split_overhangs(rows: &mut [Row], headers: &Headers) {
    for row in rows.iter_mut() {
        for i in 0..row.cells.len() {
            split_cell(&mut row.cells, i, headers);
        }
    }
    for row in rows.iter_mut() {
        for cell in &mut row.cells {
            cell.elements
                .sort_by(|a, b| cmp_y_then_x(&a.rect, &b.rect, ELEMENT_SORT_Y_TOLERANCE));
        }
    }
}

fn split_cell(cells: &mut [Cell], i: usize, headers: &Headers) {
    let cell_rect = cells[i].rect;
    let column = headers.classify(&cell_rect);

    // Pull the overhang elements out up front; everything contained stays
    // until it is absorbed as line-mate of an overhang. Working on a new
    // collection avoids mutating the element list while iterating it.
    let (contained, mut pending): (Vec<Element>, Vec<Element>) = cells[i]
        .elements
        .drain(..)
        .partition(|e| contains(&cell_rect, &e.rect));
    cells[i].elements = contained;

    while !pending.is_empty() {
        let anchor = pending.remove(0);
        let anchor_y = anchor.rect.y;

        let mut aligned = take_aligned(&mut cells[i].elements, anchor_y);
        aligned.extend(take_aligned(&mut pending, anchor_y));
        aligned.push(anchor);
        aligned.sort_by(|a, b| a.rect.x.partial_cmp(&b.rect.x).unwrap_or(Ordering::Equal));

        let joined = aligned
            .iter()
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let joined = joined.trim();
        if joined.is_empty() {
            continue;
        }

        // Replacement elements take the position of the first removed
        // line-mate.
        let origin = aligned[0].rect;
        route_tokens(cells, i, column, joined, origin);
    }
}

/// Remove and return every element of `list` within the aligned band of
/// `y`.
fn take_aligned(list: &mut Vec<Element>, y: f64) -> Vec<Element> {
    let mut aligned = Vec::new();
    let mut kept = Vec::new();
    for element in list.drain(..) {
        if (element.rect.y - y).abs() < ALIGNED_Y_TOLERANCE {
            aligned.push(element);
        } else {
            kept.push(element);
        }
    }
    *list = kept;
    aligned
}

/// Split the joined line on column gaps and push the tokens into this
/// cell and its right-hand neighbors.
///
/// Routing only applies when the token count matches the column's known
/// shape; any other shape re-emits the joined text in place so the row
/// still yields a plausible record. Tokens aimed at a neighbor that does
/// not exist in the row are dropped.
fn route_tokens(cells: &mut [Cell], i: usize, column: Option<Column>, joined: &str, origin: Rect) {
    let tokens: Vec<&str> = COLUMN_GAP_RE.split(joined).collect();
    let cell_right = cells[i].rect.right();
    // The anchor token stretches to the cell's right edge.
    let anchor_rect = Rect::new(origin.x, origin.y, cell_right - origin.x, origin.height);

    match (column, tokens.len()) {
        // assessment | VG number | application number
        (Some(Column::Assessment), 3) => {
            push(cells, i, anchor_rect, tokens[0]);
            push_into_neighbor(cells, i + 1, origin, tokens[1]);
            push_into_neighbor(cells, i + 2, origin, tokens[2]);
        }
        // description | decision date
        (Some(Column::Description), 2) => {
            push(cells, i, anchor_rect, tokens[0]);
            push_into_neighbor(cells, i + 1, origin, tokens[1]);
        }
        // Decision-date cells expect a single token; that and every
        // unrecognized shape re-emit in place.
        _ => {
            push(cells, i, anchor_rect, joined);
        }
    }
}

fn push(cells: &mut [Cell], i: usize, rect: Rect, text: &str) {
    cells[i].elements.push(Element {
        rect,
        text: text.to_string(),
    });
}

/// Tokens moved into a neighbor adopt the neighbor's own x and width so
/// they land inside it and are not treated as overhangs again.
fn push_into_neighbor(cells: &mut [Cell], i: usize, origin: Rect, text: &str) {
    let Some(cell) = cells.get_mut(i) else {
        return;
    };
    cell.elements.push(Element {
        rect: Rect::new(cell.rect.x, origin.y, cell.rect.width, origin.height),
        text: text.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeaderLabels;

    fn cell(x: f64, width: f64) -> Cell {
        Cell::new(Rect::new(x, 20.0, width, 20.0))
    }

    fn element(x: f64, width: f64, text: &str) -> Element {
        Element {
            rect: Rect::new(x, 25.0, width, 10.0),
            text: text.to_string(),
        }
    }

    fn headers_with_assessment() -> Headers {
        Headers {
            assessment: Some(Rect::new(0.0, 0.0, 60.0, 20.0)),
            vg_number: Some(Rect::new(60.0, 0.0, 60.0, 20.0)),
            identifier: Rect::new(120.0, 0.0, 80.0, 20.0),
            address: Rect::new(200.0, 0.0, 120.0, 20.0),
            description: Some(Rect::new(320.0, 0.0, 120.0, 20.0)),
            decision: Some(Rect::new(440.0, 0.0, 60.0, 20.0)),
        }
    }

    fn row_of_cells() -> Row {
        Row {
            cells: vec![
                cell(0.0, 60.0),
                cell(60.0, 60.0),
                cell(120.0, 80.0),
                cell(200.0, 120.0),
                cell(320.0, 120.0),
                cell(440.0, 60.0),
            ],
        }
    }

    #[test]
    fn assessment_overhang_routes_three_tokens() {
        let headers = headers_with_assessment();
        let mut row = row_of_cells();
        row.cells[0]
            .elements
            .push(element(5.0, 250.0, "123   ABC123   1/2020/45"));

        let mut rows = vec![row];
        split_overhangs(&mut rows, &headers);

        let row = &rows[0];
        assert_eq!(row.cells[0].text(), "123");
        assert_eq!(row.cells[1].text(), "ABC123");
        assert_eq!(row.cells[2].text(), "1/2020/45");
        // The anchor stretches to the assessment cell's right edge.
        assert_eq!(row.cells[0].elements[0].rect.right(), 60.0);
        // Neighbor tokens adopt the neighbor's width.
        assert_eq!(row.cells[1].elements[0].rect.width, 60.0);
    }

    #[test]
    fn description_overhang_routes_decision_date() {
        let headers = headers_with_assessment();
        let mut row = row_of_cells();
        row.cells[4]
            .elements
            .push(element(325.0, 150.0, "Dwelling extension   21/06/2024"));

        let mut rows = vec![row];
        split_overhangs(&mut rows, &headers);

        assert_eq!(rows[0].cells[4].text(), "Dwelling extension");
        assert_eq!(rows[0].cells[5].text(), "21/06/2024");
    }

    #[test]
    fn decision_overhang_is_reemitted_in_place() {
        let headers = headers_with_assessment();
        let mut row = row_of_cells();
        row.cells[5].elements.push(element(445.0, 80.0, " 21/06/2024 "));

        let mut rows = vec![row];
        split_overhangs(&mut rows, &headers);

        assert_eq!(rows[0].cells[5].text(), "21/06/2024");
        assert_eq!(rows[0].cells[5].elements.len(), 1);
    }

    #[test]
    fn line_mates_are_absorbed_into_the_joined_text() {
        let headers = headers_with_assessment();
        let mut row = row_of_cells();
        // A contained fragment on the same line as the overhang run.
        row.cells[4].elements.push(element(325.0, 30.0, "Dwelling"));
        row.cells[4]
            .elements
            .push(element(360.0, 120.0, "extension   21/06/2024"));

        let mut rows = vec![row];
        split_overhangs(&mut rows, &headers);

        assert_eq!(rows[0].cells[4].text(), "Dwelling extension");
        assert_eq!(rows[0].cells[5].text(), "21/06/2024");
    }

    #[test]
    fn missing_neighbor_drops_the_token() {
        let headers = headers_with_assessment();
        // Row with only the description and decision columns absent.
        let mut row = Row {
            cells: vec![cell(320.0, 120.0)],
        };
        row.cells[0]
            .elements
            .push(element(325.0, 150.0, "Dwelling extension   21/06/2024"));

        let mut rows = vec![row];
        split_overhangs(&mut rows, &headers);

        assert_eq!(rows[0].cells[0].text(), "Dwelling extension");
        assert_eq!(rows[0].cells.len(), 1);
    }

    #[test]
    fn contained_elements_on_other_lines_are_untouched() {
        let headers = headers_with_assessment();
        let mut row = row_of_cells();
        let far = Element {
            rect: Rect::new(325.0, 32.0, 30.0, 6.0),
            text: "second line".to_string(),
        };
        row.cells[4].elements.push(far.clone());
        row.cells[4]
            .elements
            .push(element(325.0, 150.0, "Dwelling extension   21/06/2024"));

        let mut rows = vec![row];
        split_overhangs(&mut rows, &headers);

        assert!(rows[0].cells[4].elements.iter().any(|e| e == &far));
    }

    // Keeps HeaderLabels in scope for the default-locate smoke check.
    #[test]
    fn classify_uses_header_overlap() {
        let headers = headers_with_assessment();
        assert_eq!(
            headers.classify(&Rect::new(1.0, 40.0, 58.0, 20.0)),
            Some(Column::Assessment)
        );
        assert_eq!(headers.classify(&Rect::new(200.0, 40.0, 120.0, 20.0)), None);
        let _ = HeaderLabels::default();
    }
}
