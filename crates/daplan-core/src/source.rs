//! Interface to the external PDF content layer.
//!
//! The engine does not decode PDFs itself. An upstream decoder supplies,
//! per page, the raw drawing operators, the positioned text runs, and the
//! page's viewport transform; implementations of [`PageSource`] adapt
//! whatever decoder the orchestration layer uses.

use crate::error::DaplanError;
use serde::{Deserialize, Serialize};

/// A single drawing instruction from a page's content stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PageOperator {
    /// A path-construction operator. The numeric arguments preserve the
    /// decoder's order: `[y, x, height, width]`.
    Path { args: Vec<f64> },
    /// Any other operator; carried so page dumps round-trip, ignored by
    /// the engine.
    #[serde(other)]
    Other,
}

/// A raw text run with its 2x3 transform matrix, in the decoder's own
/// text-space coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextItem {
    #[serde(rename = "str")]
    pub text: String,
    pub transform: [f64; 6],
    pub width: f64,
}

/// Everything the engine needs to process one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInput {
    /// Transform projecting text-run transforms into page space.
    pub viewport: [f64; 6],
    pub operators: Vec<PageOperator>,
    #[serde(rename = "text")]
    pub text_items: Vec<TextItem>,
}

/// A serialized capture of a document's pages, as produced by the
/// orchestration layer's decoder. This is the CLI's input format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDump {
    pub pages: Vec<PageInput>,
}

/// Trait for page-content backends.
///
/// A failure here is fatal to the whole run (network or decode errors have
/// no recovery path inside the engine), unlike per-page header misses,
/// which merely skip the page.
pub trait PageSource {
    fn page_count(&self) -> usize;

    fn page(&self, index: usize) -> Result<PageInput, DaplanError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

impl PageSource for PageDump {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<PageInput, DaplanError> {
        self.pages
            .get(index)
            .cloned()
            .ok_or_else(|| DaplanError::Source {
                backend: self.backend_name().to_string(),
                reason: format!("page index {index} out of range"),
            })
    }

    fn backend_name(&self) -> &str {
        "dump"
    }
}
