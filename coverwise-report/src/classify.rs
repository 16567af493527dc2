//! Per-line classification of section content.
//!
//! Check order matters: bullet and numbered patterns win over the generic
//! key-value colon check, and a trailing colon wins over an embedded one.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::ContentLine;

static NUMBERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.").expect("numbered-line pattern"));

/// Classify one content line. Total: every input maps to some variant.
pub fn classify(line: &str) -> ContentLine {
    if line.starts_with("  -") || line.starts_with("- ") {
        let stripped = line.trim_start();
        let text = stripped
            .strip_prefix('-')
            .unwrap_or(stripped)
            .trim_start()
            .to_string();
        return ContentLine::Bullet { text };
    }

    if NUMBERED_RE.is_match(line) {
        return ContentLine::Numbered {
            text: line.trim().to_string(),
        };
    }

    if line.ends_with(':') {
        return ContentLine::Header {
            text: line.to_string(),
        };
    }

    if let Some((key, value)) = line.split_once(':') {
        return ContentLine::KeyValue {
            key: key.trim().to_string(),
            value: value.trim().to_string(),
        };
    }

    ContentLine::Paragraph {
        text: line.to_string(),
    }
}
