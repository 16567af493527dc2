//! Per-section expansion flags for the dashboard view.
//!
//! Sections default to expanded; state lives only for the duration of one
//! render pass and is never persisted.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    flags: HashMap<String, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absent ids read as expanded.
    pub fn is_expanded(&self, section_id: &str) -> bool {
        self.flags.get(section_id).copied().unwrap_or(true)
    }

    pub fn toggle(&mut self, section_id: &str) {
        let next = !self.is_expanded(section_id);
        self.flags.insert(section_id.to_string(), next);
    }

    pub fn collapse(&mut self, section_id: &str) {
        self.flags.insert(section_id.to_string(), false);
    }
}
