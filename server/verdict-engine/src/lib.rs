//! Sentinel Verdict Engine — rule-based compliance + heuristic risk scoring.
//! No AI, no DB, no network. Used by the binary for stdin/stdout; called
//! in-process by the API.
//!
//! The two classifiers are independent leaf components over input data only:
//! they share no state, never call each other, and never mutate their inputs,
//! so they are thread-safe by construction.

pub mod classifier;
pub mod compliance;
pub mod config;
pub mod intent;
pub mod risk;
pub mod types;

pub use classifier::{IntentModel, ModelError};
pub use config::{PolicyConfig, RiskConfig};
pub use types::{Analysis, CommitChange, ComplianceVerdict, FeatureRecord, Intent, RiskAssessment};

/// Check a change against the default editorial policy.
pub fn check_compliance(change: &CommitChange) -> ComplianceVerdict {
  compliance::classify(change, &PolicyConfig::default())
}

/// Extract risk features with the default scoring config.
pub fn extract_features(change: &CommitChange) -> FeatureRecord {
  risk::extract_features(change, &RiskConfig::default())
}

/// Score a feature record with the default scoring config.
pub fn predict_risk_score(features: &FeatureRecord) -> RiskAssessment {
  risk::predict_risk_score(features, &RiskConfig::default())
}

/// Run both classifiers on one change and return the combined result (no I/O).
pub fn analyze(change: &CommitChange) -> Analysis {
  let compliance = check_compliance(change);
  let features = extract_features(change);
  let risk = predict_risk_score(&features);
  Analysis { compliance, risk }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn analyze_returns_valid_output_shape() {
    let mut change = CommitChange::new(
      "fix: race in session refresh",
      vec!["auth/session.py".to_string(), "core/clock.py".to_string()],
    );
    change.lines_changed = 80;
    change.prev_bugs = 1;

    let out = analyze(&change);
    assert_eq!(out.compliance.category, Intent::BugFix);
    assert!(!out.compliance.is_compliant); // protected paths, no label
    assert!(out.compliance.confidence > 0.0 && out.compliance.confidence <= 1.0);
    assert!(out.risk.risk_score >= 0.0 && out.risk.risk_score <= 100.0);
    assert_eq!(out.risk.factors.touches_core, 1);
    assert_eq!(out.risk.factors.num_files_modified, 2);
  }
}
