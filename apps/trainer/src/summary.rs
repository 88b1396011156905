//! Per-session statistics.

use std::fmt;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use morse_core::Tempo;
use serde::Serialize;

/// Outcome counts for one sitting, printed at quit and optionally
/// exported as JSON.
#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub drills: u32,
    pub first_try: u32,
    pub retried: u32,
    pub final_active: usize,
    pub final_overall_error: u8,
    pub tempo: Tempo,
}

impl SessionSummary {
    pub fn first_try_percent(&self) -> u32 {
        if self.drills == 0 {
            0
        } else {
            self.first_try * 100 / self.drills
        }
    }

    pub fn duration_secs(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }

    pub fn write_json(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Session: {} drills in {}s at {}",
            self.drills,
            self.duration_secs(),
            self.tempo
        )?;
        writeln!(
            f,
            "First-try answers: {} ({}%), retried: {}",
            self.first_try,
            self.first_try_percent(),
            self.retried
        )?;
        write!(
            f,
            "Practice alphabet: {} symbols, overall error {}/255",
            self.final_active, self.final_overall_error
        )
    }
}
