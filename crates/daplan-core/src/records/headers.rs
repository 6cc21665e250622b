use crate::geometry::{contains, horizontal_overlap_percentage, Rect};
use crate::model::{Cell, HeaderLabels, Row};

/// Minimum horizontal overlap (percent) for a cell to count as belonging
/// to a header's column.
pub(crate) const COLUMN_OVERLAP_MIN: f64 = 90.0;

/// The semantic columns the overhang splitter knows how to repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Assessment,
    Description,
    Decision,
}

/// The located header cells of a page. Only the identifier and address
/// columns are mandatory; everything else degrades gracefully when absent.
#[derive(Debug, Clone)]
pub struct Headers {
    pub assessment: Option<Rect>,
    pub vg_number: Option<Rect>,
    pub identifier: Rect,
    pub address: Rect,
    pub description: Option<Rect>,
    pub decision: Option<Rect>,
}

impl Headers {
    /// Scan all cells for header labels. Returns `None` when the
    /// identifier or address header cannot be found, in which case the
    /// whole page must be skipped.
    pub fn locate(rows: &[Row], labels: &HeaderLabels) -> Option<Headers> {
        let identifier = find_header(rows, &labels.identifier)?;
        let address = find_header(rows, &labels.address)?;
        Some(Headers {
            assessment: find_header(rows, &labels.assessment),
            vg_number: find_header(rows, &labels.vg_number),
            identifier,
            address,
            description: find_header(rows, &labels.description),
            decision: find_header(rows, &labels.decision),
        })
    }

    /// Which repairable column does a cell belong to, if any.
    pub fn classify(&self, rect: &Rect) -> Option<Column> {
        let candidates = [
            (self.assessment, Column::Assessment),
            (self.description, Column::Description),
            (self.decision, Column::Decision),
        ];
        for (header, column) in candidates {
            if let Some(header) = header {
                if horizontal_overlap_percentage(rect, &header) > COLUMN_OVERLAP_MIN {
                    return Some(column);
                }
            }
        }
        None
    }
}

/// First cell containing an element whose trimmed text exactly equals one
/// of the candidate labels.
///
/// The element must be fully contained by the cell: that excludes
/// accidental matches from overhang runs that merely cross the cell.
fn find_header(rows: &[Row], labels: &[String]) -> Option<Rect> {
    for row in rows {
        for cell in &row.cells {
            for element in &cell.elements {
                let text = element.text.trim();
                if labels.iter().any(|label| label == text)
                    && contains(&cell.rect, &element.rect)
                {
                    return Some(cell.rect);
                }
            }
        }
    }
    None
}

/// The cell of `row` lying in the column of `header`, by >90% horizontal
/// overlap.
pub fn column_cell<'a>(row: &'a Row, header: &Rect) -> Option<&'a Cell> {
    row.cells
        .iter()
        .find(|cell| horizontal_overlap_percentage(&cell.rect, header) > COLUMN_OVERLAP_MIN)
}
