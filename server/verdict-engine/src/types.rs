//! Core types for the verdict engine (JSON contracts + internal models).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Inbound type (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// One commit/PR change to analyze. Unknown fields are silently ignored.
///
/// All fields are read-only inputs; the classifiers never mutate them.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitChange {
  pub commit_message: String,
  #[serde(default)]
  pub pr_title: String,
  #[serde(default)]
  pub pr_labels: Vec<String>,
  #[serde(default, alias = "files")]
  pub changed_files: Vec<String>,
  #[serde(default)]
  pub author_email: Option<String>,
  #[serde(default)]
  pub timestamp: Option<String>,
  #[serde(default)]
  pub lines_changed: i64,
  #[serde(default)]
  pub prev_bugs: i64,
  #[serde(default = "default_coverage")]
  pub test_coverage: i64,
}

fn default_coverage() -> i64 {
  100
}

impl CommitChange {
  /// Minimal constructor for callers that only have a message + file list.
  pub fn new(commit_message: impl Into<String>, changed_files: Vec<String>) -> Self {
    Self {
      commit_message: commit_message.into(),
      pr_title: String::new(),
      pr_labels: Vec::new(),
      changed_files,
      author_email: None,
      timestamp: None,
      lines_changed: 0,
      prev_bugs: 0,
      test_coverage: 100,
    }
  }
}

// ---------------------------------------------------------------------------
// Intent enum (closed set of commit categories)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
  BugFix,
  Feature,
  Refactor,
  Documentation,
  Test,
  Performance,
  Security,
  Chore,
  Other,
  LabelOverride,
}

impl Intent {
  /// Human-readable label used in verdict messages ("bug_fix allowed").
  pub fn as_str(self) -> &'static str {
    match self {
      Self::BugFix => "bug_fix",
      Self::Feature => "feature",
      Self::Refactor => "refactor",
      Self::Documentation => "documentation",
      Self::Test => "test",
      Self::Performance => "performance",
      Self::Security => "security",
      Self::Chore => "chore",
      Self::Other => "other",
      Self::LabelOverride => "label_override",
    }
  }
}

// ---------------------------------------------------------------------------
// Outbound types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// Compliance verdict for one change.
///
/// `confidence` starts at the intent base value and is only ever multiplied
/// by a per-rule factor in (0,1]; it never increases. Rounded to two decimals.
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceVerdict {
  pub is_compliant: bool,
  pub category: Intent,
  pub confidence: f64,
  pub message: String,
}

/// Feature record the risk scorer consumes (and echoes back verbatim).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
  pub lines_changed: i64,
  pub prev_bugs: i64,
  pub test_coverage: i64,
  /// 1 if any changed file sits under a core prefix, else 0.
  pub touches_core: u8,
  pub num_files_modified: usize,
}

/// Risk estimate with an auditable per-factor breakdown.
///
/// Invariant: `risk_score == 100 - clamp(safety, 0, 100)`, so it is always in
/// [0,100] even when the individual impacts sum past -100.
#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
  pub risk_score: f64,
  pub factors: FeatureRecord,
  /// Signed, unclamped deduction per feature (BTreeMap for stable JSON order).
  pub factor_impact: BTreeMap<String, f64>,
  pub message: String,
}

/// Combined output of one engine run (both classifiers over the same change).
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
  pub compliance: ComplianceVerdict,
  pub risk: RiskAssessment,
}
