use crate::geometry::{cmp_y_then_x, Rect};
use crate::model::Element;
use crate::source::TextItem;

/// Y band within which elements count as the same text line when sorting.
pub(crate) const ELEMENT_SORT_Y_TOLERANCE: f64 = 1.0;

/// Convert raw text runs into positioned, height-corrected elements in
/// page coordinates, sorted y-then-x.
///
/// The register PDFs over-report text height, so the height is recomputed
/// from the scale magnitude of the composed transform instead of trusting
/// the run, and the baseline-relative origin is converted to top-left.
pub fn extract_elements(items: &[TextItem], viewport: &[f64; 6]) -> Vec<Element> {
    let mut elements: Vec<Element> = items
        .iter()
        .map(|item| {
            let t = compose(viewport, &item.transform);
            let height = (t[2] * t[2] + t[3] * t[3]).sqrt();
            Element {
                rect: Rect::new(t[4], t[5] - height, item.width, height),
                text: item.text.clone(),
            }
        })
        .collect();
    elements.sort_by(|a, b| cmp_y_then_x(&a.rect, &b.rect, ELEMENT_SORT_Y_TOLERANCE));
    elements
}

/// Product of two 2x3 affine matrices, `a` applied after `b` (the pdf.js
/// `Util.transform` convention the decoder uses).
fn compose(a: &[f64; 6], b: &[f64; 6]) -> [f64; 6] {
    [
        a[0] * b[0] + a[2] * b[1],
        a[1] * b[0] + a[3] * b[1],
        a[0] * b[2] + a[2] * b[3],
        a[1] * b[2] + a[3] * b[3],
        a[0] * b[4] + a[2] * b[5] + a[4],
        a[1] * b[4] + a[3] * b[5] + a[5],
    ]
}
