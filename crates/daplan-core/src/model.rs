use crate::geometry::Rect;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A positioned run of text as emitted by the PDF text layer, prior to any
/// column assignment. Lives for one page-processing pass; immutable except
/// during overhang splitting, where replacement elements are synthesized.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub rect: Rect,
    pub text: String,
}

/// A reconstructed table cell, derived purely from drawn line segments.
/// Owns zero or more elements; mutated during binding and overhang
/// splitting; discarded at end of page processing.
#[derive(Debug, Clone)]
pub struct Cell {
    pub rect: Rect,
    pub elements: Vec<Element>,
}

impl Cell {
    pub fn new(rect: Rect) -> Cell {
        Cell {
            rect,
            elements: Vec::new(),
        }
    }

    /// Element texts concatenated with no separator; callers collapse
    /// whitespace afterwards.
    pub fn text(&self) -> String {
        self.elements.iter().map(|e| e.text.as_str()).collect()
    }
}

/// An ordered run of cells sharing an approximate Y coordinate. A grouping
/// view over cells, not a distinct owned entity.
#[derive(Debug, Clone)]
pub struct Row {
    pub cells: Vec<Cell>,
}

/// Placeholder description for rows where the description cell is empty.
pub const NO_DESCRIPTION: &str = "No description provided";

/// A development application extracted from one register row. Created only
/// when an identifier pattern and an address were both extracted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub identifier: String,
    pub address: String,
    pub description: String,
    pub info_url: String,
    pub comment_url: String,
    pub date_scraped: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_received: Option<NaiveDate>,
}

/// Candidate labels per semantic column. Register variants disagree on the
/// exact label set, so each column accepts a list; the first header cell
/// whose trimmed text equals any candidate wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderLabels {
    pub assessment: Vec<String>,
    pub vg_number: Vec<String>,
    pub identifier: Vec<String>,
    pub address: Vec<String>,
    pub description: Vec<String>,
    pub decision: Vec<String>,
}

impl Default for HeaderLabels {
    fn default() -> Self {
        HeaderLabels {
            assessment: vec!["ASSESS".into()],
            vg_number: vec!["VG NUMBER".into()],
            identifier: vec!["DA NUMBER".into()],
            address: vec!["LOCATION".into()],
            description: vec!["DESCRIPTION".into()],
            decision: vec!["DECISION".into()],
        }
    }
}

/// Options for record extraction. `info_url` and `comment_url` are supplied
/// by the orchestration layer (they are per-council constants).
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub info_url: String,
    pub comment_url: String,
    pub date_scraped: NaiveDate,
    pub labels: HeaderLabels,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            info_url: String::new(),
            comment_url: String::new(),
            date_scraped: chrono::Local::now().date_naive(),
            labels: HeaderLabels::default(),
        }
    }
}
