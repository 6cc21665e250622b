//! Field extraction: from repaired rows to development application
//! records.

pub mod headers;

use crate::gazetteer::{normalize::normalize_address, Gazetteer};
use crate::model::{ExtractOptions, Record, Row, NO_DESCRIPTION};
use chrono::NaiveDate;
use headers::{column_cell, Headers};
use regex::Regex;
use std::sync::LazyLock;

/// Shape of a council application identifier, e.g. `960/45/12`. Heading,
/// footer and blank rows all fail this test.
static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+/\d+/\d").expect("valid regex"));

/// Extract one record per valid row.
///
/// Rows whose identifier does not match the application pattern are
/// dropped silently; rows without an address are dropped; everything else
/// degrades towards a plausible record (placeholder description, absent
/// dates) rather than towards nothing.
pub fn extract_rows(
    rows: &[Row],
    headers: &Headers,
    gazetteer: &Gazetteer,
    options: &ExtractOptions,
) -> Vec<Record> {
    rows.iter()
        .filter_map(|row| extract_row(row, headers, gazetteer, options))
        .collect()
}

fn extract_row(
    row: &Row,
    headers: &Headers,
    gazetteer: &Gazetteer,
    options: &ExtractOptions,
) -> Option<Record> {
    let identifier = collapse(&column_cell(row, &headers.identifier)?.text());
    if !IDENTIFIER_RE.is_match(&identifier) {
        return None;
    }

    let raw_address = collapse(&column_cell(row, &headers.address)?.text());
    if raw_address.is_empty() {
        return None;
    }
    let address = normalize_address(&raw_address, gazetteer);

    let description = headers
        .description
        .and_then(|header| column_cell(row, &header))
        .map(|cell| collapse(&cell.text()))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    let date_received = headers
        .decision
        .and_then(|header| column_cell(row, &header))
        .and_then(|cell| parse_register_date(&cell.text()));

    Some(Record {
        identifier,
        address,
        description,
        info_url: options.info_url.clone(),
        comment_url: options.comment_url.clone(),
        date_scraped: options.date_scraped,
        date_received,
    })
}

/// Collapse runs of whitespace into single spaces and trim.
fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strict `D/MM/YYYY` register date. Unparseable text is treated as an
/// absent date, not an error.
pub fn parse_register_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%d/%m/%Y").ok()
}

/// Every element text on the page, for diagnostics when a page is
/// skipped.
pub fn page_element_texts(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .flat_map(|row| row.cells.iter())
        .flat_map(|cell| cell.elements.iter())
        .map(|element| element.text.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::model::{Cell, Element};

    fn gazetteer() -> Gazetteer {
        Gazetteer::from_text(
            "MAIN STREET,PENOLA\n",
            "ST,STREET\n",
            "PENOLA,PENOLA SA 5277,PENOLA\n",
        )
    }

    fn headers() -> Headers {
        Headers {
            assessment: None,
            vg_number: None,
            identifier: Rect::new(0.0, 0.0, 80.0, 20.0),
            address: Rect::new(80.0, 0.0, 120.0, 20.0),
            description: Some(Rect::new(200.0, 0.0, 120.0, 20.0)),
            decision: Some(Rect::new(320.0, 0.0, 60.0, 20.0)),
        }
    }

    fn data_row(identifier: &str, address: &str, description: &str, decision: &str) -> Row {
        let texts = [
            (0.0, 80.0, identifier),
            (80.0, 120.0, address),
            (200.0, 120.0, description),
            (320.0, 60.0, decision),
        ];
        Row {
            cells: texts
                .iter()
                .map(|&(x, width, text)| Cell {
                    rect: Rect::new(x, 40.0, width, 20.0),
                    elements: vec![Element {
                        rect: Rect::new(x + 2.0, 45.0, width - 4.0, 10.0),
                        text: text.to_string(),
                    }],
                })
                .collect(),
        }
    }

    #[test]
    fn valid_row_becomes_a_record() {
        let rows = vec![data_row(
            "960/45/12",
            "12 MAIN STREET, PENOLA",
            "Dwelling extension",
            "21/06/2024",
        )];
        let records = extract_rows(&rows, &headers(), &gazetteer(), &ExtractOptions::default());
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.identifier, "960/45/12");
        assert_eq!(record.address, "12 MAIN STREET, PENOLA SA 5277");
        assert_eq!(record.description, "Dwelling extension");
        assert_eq!(
            record.date_received,
            NaiveDate::from_ymd_opt(2024, 6, 21)
        );
    }

    #[test]
    fn malformed_identifier_drops_the_row() {
        let rows = vec![data_row(
            "DA NUMBER",
            "12 MAIN STREET, PENOLA",
            "Dwelling extension",
            "",
        )];
        let records = extract_rows(&rows, &headers(), &gazetteer(), &ExtractOptions::default());
        assert!(records.is_empty());
    }

    #[test]
    fn empty_description_gets_the_placeholder() {
        let rows = vec![data_row("960/45/12", "12 MAIN STREET, PENOLA", "  ", "")];
        let records = extract_rows(&rows, &headers(), &gazetteer(), &ExtractOptions::default());
        assert_eq!(records[0].description, NO_DESCRIPTION);
    }

    #[test]
    fn unparseable_date_is_absent_not_an_error() {
        let rows = vec![data_row("960/45/12", "12 MAIN STREET, PENOLA", "Shed", "TBA")];
        let records = extract_rows(&rows, &headers(), &gazetteer(), &ExtractOptions::default());
        assert_eq!(records[0].date_received, None);
    }

    #[test]
    fn single_digit_day_parses() {
        assert_eq!(
            parse_register_date("1/02/2020"),
            NaiveDate::from_ymd_opt(2020, 2, 1)
        );
        assert_eq!(parse_register_date("1/02/2020 extra"), None);
    }
}
