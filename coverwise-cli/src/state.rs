use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use coverwise_core::{RecommendationResponse, TransactionAnalysis};
use coverwise_report::SummaryDocument;

pub fn coverwise_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".coverwise"))
}

pub fn ensure_coverwise_home() -> Result<PathBuf> {
    let dir = coverwise_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Typed handoff between commands.
///
/// Written explicitly by `analyze` and `recommend`, read by `dashboard` and
/// `compare`, removed by `session clear`. Nothing else touches it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub created_at_utc: Option<String>,
    pub source_file: Option<String>,
    pub analysis: Option<TransactionAnalysis>,
    pub document: Option<SummaryDocument>,
    pub recommendations: Option<RecommendationResponse>,
}

impl Session {
    pub fn stamp_now(&mut self) {
        self.created_at_utc = Some(Utc::now().to_rfc3339());
    }
}

pub fn session_path() -> Result<PathBuf> {
    Ok(ensure_coverwise_home()?.join("session.json"))
}

pub fn write_session(session: &Session) -> Result<()> {
    let p = session_path()?;
    let json = serde_json::to_string_pretty(session)?;
    fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// Read the current session, or `None` when no handoff exists.
pub fn read_session() -> Result<Option<Session>> {
    let p = session_path()?;
    if !p.exists() {
        return Ok(None);
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(Some(serde_json::from_str(&s).context("parse session.json")?))
}

/// Remove the session file. Returns whether one existed.
pub fn clear_session() -> Result<bool> {
    let p = session_path()?;
    if !p.exists() {
        return Ok(false);
    }
    fs::remove_file(&p).with_context(|| format!("remove {}", p.display()))?;
    Ok(true)
}
