//! daplan-core: table reconstruction and record extraction for council
//! development application PDF registers.
//!
//! The registers encode their tables purely as drawn line segments plus
//! independently positioned text runs. The engine recovers the grid from
//! the lines, binds text to cells, repairs runs the renderer merged
//! across column boundaries, classifies columns by header label and
//! normalizes addresses against a gazetteer.
//!
//! PDF decoding, HTTP retrieval and persistence are external
//! collaborators: pages arrive through the [`source::PageSource`] trait
//! and records leave as plain values.

pub mod error;
pub mod gazetteer;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod model;
pub mod records;
pub mod source;

pub use error::DaplanError;
pub use gazetteer::normalize::normalize_address;
pub use gazetteer::Gazetteer;
pub use grid::reconstruct_cells;
pub use layout::build_rows;
pub use layout::elements::extract_elements;
pub use model::{Cell, Element, ExtractOptions, HeaderLabels, Record, Row};

use records::headers::Headers;
use source::{PageInput, PageSource};

/// Map each row of a page to records.
///
/// When the identifier or address header cell cannot be found the page is
/// skipped: every element text is logged for diagnosis and an empty vec
/// is returned. This is deliberate; a register often ends with a
/// free-form notes page.
pub fn extract_records(
    rows: &[Row],
    labels: &HeaderLabels,
    gazetteer: &Gazetteer,
    options: &ExtractOptions,
) -> Vec<Record> {
    match Headers::locate(rows, labels) {
        Some(headers) => records::extract_rows(rows, &headers, gazetteer, options),
        None => {
            log::warn!("required header column not found; skipping page");
            for text in records::page_element_texts(rows) {
                log::warn!("  element: {text:?}");
            }
            Vec::new()
        }
    }
}

/// Run the full pipeline over one page of decoder output.
pub fn extract_page(
    page: &PageInput,
    gazetteer: &Gazetteer,
    options: &ExtractOptions,
) -> Vec<Record> {
    let cells = reconstruct_cells(&page.operators);
    let elements = extract_elements(&page.text_items, &page.viewport);
    let rows = build_rows(cells, &elements, &options.labels);
    extract_records(&rows, &options.labels, gazetteer, options)
}

/// Process every page of a document, sequentially.
///
/// Page skips (missing headers, malformed rows) are non-fatal; a failure
/// from the source itself aborts the run.
pub fn extract_document(
    source: &dyn PageSource,
    gazetteer: &Gazetteer,
    options: &ExtractOptions,
) -> Result<Vec<Record>, DaplanError> {
    let mut records = Vec::new();
    for index in 0..source.page_count() {
        let page = source.page(index)?;
        let page_records = extract_page(&page, gazetteer, options);
        log::debug!(
            "page {} ({}): {} record(s)",
            index + 1,
            source.backend_name(),
            page_records.len()
        );
        records.extend(page_records);
    }
    Ok(records)
}
