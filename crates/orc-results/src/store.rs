//! On-disk run artifacts.

use crate::error::ResultsResult;
use crate::types::RunSummary;
use std::fs;
use std::path::{Path, PathBuf};

pub const SUMMARY_JSON: &str = "summary.json";
pub const SUMMARY_TEXT: &str = "summary.txt";

/// Writes one run's artifacts into a flat output directory.
#[derive(Clone)]
pub struct ResultsStore {
    out_dir: PathBuf,
}

impl ResultsStore {
    pub fn new(out_dir: PathBuf) -> ResultsResult<Self> {
        if !out_dir.exists() {
            fs::create_dir_all(&out_dir)?;
        }
        Ok(Self { out_dir })
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Path a named artifact will land at.
    pub fn artifact_path(&self, file_name: &str) -> PathBuf {
        self.out_dir.join(file_name)
    }

    /// Write `summary.json` (pretty JSON) and `summary.txt`.
    pub fn write_summary(&self, summary: &RunSummary) -> ResultsResult<()> {
        let json = serde_json::to_string_pretty(summary)?;
        fs::write(self.artifact_path(SUMMARY_JSON), json)?;
        fs::write(self.artifact_path(SUMMARY_TEXT), summary.to_text())?;
        Ok(())
    }

    /// Load a previously written summary.
    pub fn load_summary(&self) -> ResultsResult<RunSummary> {
        let content = fs::read_to_string(self.artifact_path(SUMMARY_JSON))?;
        let summary = serde_json::from_str(&content)?;
        Ok(summary)
    }
}
