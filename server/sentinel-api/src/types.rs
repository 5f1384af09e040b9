//! Request/response types for the Sentinel API (the validation boundary:
//! the core only ever sees well-typed records deserialized here).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use verdict_engine::CommitChange;

/// Body for POST /api/compliance-check.
#[derive(Debug, Deserialize)]
pub struct ComplianceRequest {
  pub commit_message: String,
  #[serde(default)]
  pub pr_title: String,
  #[serde(default, alias = "labels")]
  pub pr_labels: Vec<String>,
  #[serde(default, alias = "changed_files")]
  pub files: Vec<String>,
  #[serde(default)]
  pub author_email: Option<String>,
  #[serde(default)]
  pub timestamp: Option<String>,
}

impl ComplianceRequest {
  pub fn into_change(self) -> CommitChange {
    let mut change = CommitChange::new(self.commit_message, self.files);
    change.pr_title = self.pr_title;
    change.pr_labels = self.pr_labels;
    change.author_email = self.author_email;
    change.timestamp = self.timestamp;
    change
  }
}

/// Body for POST /api/risk-score.
#[derive(Debug, Deserialize)]
pub struct RiskRequest {
  #[serde(default, alias = "changed_files")]
  pub files: Vec<String>,
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

impl RiskRequest {
  pub fn into_change(self) -> CommitChange {
    let mut change = CommitChange::new(String::new(), self.files);
    change.lines_changed = self.lines_changed;
    change.prev_bugs = self.prev_bugs;
    change.test_coverage = self.test_coverage;
    change
  }
}

/// Body for POST /api/analyze: commit identity + the full change record.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
  #[serde(default)]
  pub project: Option<String>,
  #[serde(default)]
  pub user: Option<String>,
  #[serde(default)]
  pub repo_name: Option<String>,
  #[serde(default)]
  pub repo_url: Option<String>,
  #[serde(default)]
  pub commit_hash: Option<String>,
  #[serde(flatten)]
  pub change: CommitChange,
}

/// Response for POST /api/analyze.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
  pub status: &'static str,
  pub commit_hash: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub compliance_id: Option<i64>,
  pub compliance: verdict_engine::ComplianceVerdict,
  pub risk: verdict_engine::RiskAssessment,
}

/// One joined compliance+risk row from the store (newest first).
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRow {
  pub id: i64,
  pub commit_hash: String,
  pub repo_name: Option<String>,
  pub project: Option<String>,
  pub author: Option<String>,
  pub commit_message: String,
  pub files_changed: Vec<String>,
  pub labels: Vec<String>,
  pub is_compliant: bool,
  pub category: String,
  pub confidence: f64,
  pub compliance_message: String,
  pub risk_score: Option<f64>,
  pub factors: Option<serde_json::Value>,
  pub factor_impact: Option<serde_json::Value>,
  pub risk_message: Option<String>,
  pub created_at: DateTime<Utc>,
}

/// Query params for GET /api/history and /api/export.csv.
#[derive(Debug, Deserialize)]
pub struct HistoryParams {
  #[serde(default = "default_limit")]
  pub limit: i64,
}

fn default_limit() -> i64 {
  100
}

/// Response for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
  pub status: &'static str,
  pub database: String,
  pub timestamp: String,
}
