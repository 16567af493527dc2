//! Section segmentation: group report lines under their titles.
//!
//! A header is either an all-caps line (at least one letter, equal to its own
//! uppercased form) or any line whose successor consists entirely of repeated
//! `=` or `-` characters. Content before the first header is dropped.

/// A section title with its raw (unclassified) content lines.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSection {
    pub title: String,
    pub lines: Vec<String>,
}

/// Split a report into lines, preserving blank lines and order.
pub fn tokenize(report: &str) -> Vec<&str> {
    report.split('\n').collect()
}

fn is_underline(line: &str) -> bool {
    !line.is_empty() && (line.bytes().all(|b| b == b'=') || line.bytes().all(|b| b == b'-'))
}

fn is_all_caps_title(line: &str) -> bool {
    !line.is_empty() && line.chars().any(|c| c.is_alphabetic()) && line.to_uppercase() == line
}

/// Walk the lines and accumulate titled sections.
///
/// Underline detection looks at the raw successor line; everything else works on
/// the trimmed line, and content is stored trimmed. A header with an empty title
/// (blank line above an underline) starts an accumulation that is never emitted,
/// so its content is silently discarded.
pub fn segment(lines: &[&str]) -> Vec<RawSection> {
    let mut sections = Vec::new();
    let mut title = String::new();
    let mut body: Vec<String> = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        let underlined = lines.get(i + 1).is_some_and(|next| is_underline(next));

        if is_all_caps_title(line) || underlined {
            if !title.is_empty() {
                sections.push(RawSection {
                    title: std::mem::take(&mut title),
                    lines: std::mem::take(&mut body),
                });
            } else {
                body.clear();
            }
            title = line.to_string();
            i += if underlined { 2 } else { 1 };
        } else if !line.is_empty() {
            body.push(line.to_string());
            i += 1;
        } else {
            i += 1;
        }
    }

    if !title.is_empty() {
        sections.push(RawSection { title, lines: body });
    }
    sections
}
