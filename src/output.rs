//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::config::MatchOrder;
use crate::core::services::{StreamReport, StreamStats};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of replaying a stream against an expectation file
#[derive(Debug, Serialize)]
pub struct ReplayResult {
    /// Whether every expectation was met
    pub passed: bool,
    /// Matching policy used
    pub ordering: MatchOrder,
    /// Number of expectations
    pub expectations: usize,
    /// Stream counters
    #[serde(flatten)]
    pub stats: StreamStats,
    /// Verdict error, when the replay failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReplayResult {
    /// Summarize a stream report
    #[must_use]
    pub fn new(report: &StreamReport, ordering: MatchOrder, expectations: usize) -> Self {
        Self {
            passed: report.passed(),
            ordering,
            expectations,
            stats: report.stats(),
            error: report.verdict.as_ref().err().map(ToString::to_string),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> Result<(), serde_json::Error> {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => println!("{}", self.to_json()?),
        }
        Ok(())
    }

    /// Human-readable rendering
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = format!(
            "Replayed {} response(s) against {} {} expectation(s)\n",
            self.stats.responses_seen, self.expectations, self.ordering
        );
        if self.stats.mismatches > 0 {
            out.push_str(&format!("  {} response(s) did not match\n", self.stats.mismatches));
        }

        match &self.error {
            None => out.push_str(&format!("{} all expectations met\n", "PASS".green().bold())),
            Some(err) => out.push_str(&format!("{} {err}\n", "FAIL".red().bold())),
        }
        out
    }

    /// Pretty-printed JSON rendering
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
