//! Machine-readable summary of a consistency run.

use serde::{Deserialize, Serialize};

use gt_core::{ElemWidth, Variant};

/// Summary of one checker run: what was compared and with which decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyReport {
    /// Grid dimension; each file holds `width * width` elements.
    pub width: usize,
    /// Elements compared per variant.
    pub elements: usize,
    /// Element size in bytes used to decode the files.
    pub elem_bytes: usize,
    /// Variants that matched the reference, in checking order.
    pub matched: Vec<Variant>,
}

impl ConsistencyReport {
    pub fn new(width: usize, elem: ElemWidth) -> Self {
        Self {
            width,
            elements: width * width,
            elem_bytes: elem.bytes(),
            matched: Vec::new(),
        }
    }

    /// Record a variant that passed its comparison against the reference.
    pub fn record_match(&mut self, variant: Variant) {
        self.matched.push(variant);
    }

    /// True once every compared variant matched.
    pub fn all_matched(&self) -> bool {
        self.matched.len() == Variant::COMPARED.len()
    }

    /// Serialize to a pretty JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_tracks_matched_variants() {
        let mut report = ConsistencyReport::new(4, ElemWidth::I32);
        assert!(!report.all_matched());

        report.record_match(Variant::Dynamic);
        report.record_match(Variant::Static);
        assert!(report.all_matched());
        assert_eq!(report.elements, 16);
        assert_eq!(report.elem_bytes, 4);
    }

    #[test]
    fn json_round_trips() {
        let mut report = ConsistencyReport::new(2, ElemWidth::I64);
        report.record_match(Variant::Dynamic);

        let parsed: ConsistencyReport = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(parsed.width, 2);
        assert_eq!(parsed.elem_bytes, 8);
        assert_eq!(parsed.matched, vec![Variant::Dynamic]);
    }
}
