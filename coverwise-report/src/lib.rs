//! coverwise-report: parsing of free-text analysis summaries into structured sections
//! and headline fields.
//!
//! The analyze service returns a human-readable multi-line report (capitalized
//! section titles, optional `=`/`-` underlines, bullets, numbered items,
//! `key: value` lines, free paragraphs). This crate turns that blob into a
//! [`SummaryDocument`]: an ordered list of classified [`Section`]s plus the four
//! headline numbers pulled out by pattern matching. Every step is total — malformed
//! input degrades to fewer sections or absent fields, never an error.

pub mod classify;
pub mod document;
pub mod expand;
pub mod fields;
pub mod segment;
pub mod types;

pub use classify::classify;
pub use document::{SummaryDocument, SCHEMA_VERSION};
pub use expand::ExpansionState;
pub use fields::extract_fields;
pub use segment::{segment, tokenize, RawSection};
pub use types::{ContentLine, ExtractedFields, Section};

/// Parse a free-text report into classified sections, in source order.
///
/// Section ids are `section-<index>`. Content before the first detected header is
/// dropped; a report with no headers yields no sections.
pub fn parse_summary(report: &str) -> Vec<Section> {
    let lines = segment::tokenize(report);
    segment::segment(&lines)
        .into_iter()
        .enumerate()
        .map(|(i, raw)| Section {
            id: format!("section-{i}"),
            title: raw.title,
            content: raw.lines.iter().map(|l| classify::classify(l)).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_headers_yields_no_sections() {
        let report = "just a line\nanother line\n";
        assert!(parse_summary(report).is_empty());
    }

    #[test]
    fn test_section_ids_follow_source_order() {
        let report = "FIRST PART\ncontent\nSECOND PART\nmore\n";
        let sections = parse_summary(report);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].id, "section-0");
        assert_eq!(sections[0].title, "FIRST PART");
        assert_eq!(sections[1].id, "section-1");
        assert_eq!(sections[1].title, "SECOND PART");
    }

    #[test]
    fn test_reparse_is_idempotent() {
        let report = "OVERVIEW\n--------\n- first\n- second\n";
        assert_eq!(parse_summary(report), parse_summary(report));
    }
}
