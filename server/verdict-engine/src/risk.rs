//! Risk scorer: feature extraction + additive safety deductions.
//!
//! Deductions are computed individually and unclamped, summed against a
//! safety budget of 100, and the budget is clamped to [0,100] once at the
//! end. `risk_score = 100 - safety`, so a commit with many simultaneous red
//! flags saturates at 100 while the per-factor report still shows each true
//! contribution.

use std::collections::BTreeMap;

use crate::config::RiskConfig;
use crate::types::{CommitChange, FeatureRecord, RiskAssessment};

/// Pull the scoring features out of a change record.
///
/// Missing numeric inputs already defaulted at deserialization (0, 0, 100).
pub fn extract_features(change: &CommitChange, config: &RiskConfig) -> FeatureRecord {
  let touches_core = change.changed_files.iter().any(|f| {
    config
      .core_prefixes
      .iter()
      .any(|p| f.starts_with(p.as_str()))
  });
  FeatureRecord {
    lines_changed: change.lines_changed,
    prev_bugs: change.prev_bugs,
    test_coverage: change.test_coverage,
    touches_core: touches_core as u8,
    num_files_modified: change.changed_files.len(),
  }
}

/// Score a feature record. Pure; independent, non-interacting deductions.
pub fn predict_risk_score(features: &FeatureRecord, config: &RiskConfig) -> RiskAssessment {
  let mut safety = 100.0f64;
  let mut impact: BTreeMap<String, f64> = BTreeMap::new();
  let mut deduct = |name: &str, points: f64| {
    safety -= points;
    impact.insert(name.to_string(), -points);
  };

  let lines_deduction = if features.lines_changed > 100 {
    25.0
  } else if features.lines_changed > 50 {
    10.0
  } else {
    0.0
  };
  deduct("lines_changed", lines_deduction);

  deduct(
    "touches_core",
    if features.touches_core != 0 { 30.0 } else { 0.0 },
  );

  deduct("prev_bugs", features.prev_bugs as f64 * 5.0);

  let coverage_deduction = if features.test_coverage < 80 {
    (80 - features.test_coverage) as f64 * 0.5
  } else {
    0.0
  };
  deduct("test_coverage", coverage_deduction);

  if config.file_count_factor {
    deduct(
      "num_files_modified",
      if features.num_files_modified > config.file_count_threshold {
        5.0
      } else {
        0.0
      },
    );
  }

  let safety = safety.clamp(0.0, 100.0);
  let risk = round2(100.0 - safety);

  RiskAssessment {
    risk_score: risk,
    factors: features.clone(),
    factor_impact: impact,
    message: format!("Heuristic risk: {:.2}%", risk),
  }
}

fn round2(v: f64) -> f64 {
  (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
  use super::*;

  fn config() -> RiskConfig {
    RiskConfig::default()
  }

  fn features(lines: i64, bugs: i64, coverage: i64, files: &[&str]) -> FeatureRecord {
    let change = CommitChange {
      lines_changed: lines,
      prev_bugs: bugs,
      test_coverage: coverage,
      ..CommitChange::new("m", files.iter().map(|s| s.to_string()).collect())
    };
    extract_features(&change, &config())
  }

  #[test]
  fn core_prefixes_set_touches_core() {
    assert_eq!(features(0, 0, 100, &["core/x.py"]).touches_core, 1);
    assert_eq!(features(0, 0, 100, &["db/migrate.sql"]).touches_core, 1);
    assert_eq!(features(0, 0, 100, &["src/core_utils.py"]).touches_core, 0);
    assert_eq!(features(0, 0, 100, &[]).touches_core, 0);
  }

  #[test]
  fn spec_scenario_scores_seventy_five() {
    // -25 lines, -30 core, -10 bugs, -10 coverage => safety 25, risk 75.
    let f = features(120, 2, 60, &["core/x.py"]);
    let r = predict_risk_score(&f, &config());
    assert_eq!(r.risk_score, 75.0);
    assert_eq!(r.factor_impact["lines_changed"], -25.0);
    assert_eq!(r.factor_impact["touches_core"], -30.0);
    assert_eq!(r.factor_impact["prev_bugs"], -10.0);
    assert_eq!(r.factor_impact["test_coverage"], -10.0);
    assert_eq!(r.factor_impact["num_files_modified"], 0.0);
    assert_eq!(r.factors, f);
  }

  #[test]
  fn zero_signal_commit_scores_zero() {
    let f = features(10, 0, 100, &[]);
    let r = predict_risk_score(&f, &config());
    assert_eq!(r.risk_score, 0.0);
    assert!(r.factor_impact.values().all(|&v| v == 0.0));
  }

  #[test]
  fn moderate_churn_band_deducts_ten() {
    let r = predict_risk_score(&features(51, 0, 100, &[]), &config());
    assert_eq!(r.risk_score, 10.0);
    let r = predict_risk_score(&features(100, 0, 100, &[]), &config());
    assert_eq!(r.risk_score, 10.0);
    let r = predict_risk_score(&features(101, 0, 100, &[]), &config());
    assert_eq!(r.risk_score, 25.0);
  }

  #[test]
  fn saturates_at_one_hundred_but_reports_true_impacts() {
    // -25 -30 -100 -40 = -195; safety clamps to 0, risk caps at 100.
    let f = features(200, 20, 0, &["core/a.py", "db/b.sql"]);
    let r = predict_risk_score(&f, &config());
    assert_eq!(r.risk_score, 100.0);
    assert_eq!(r.factor_impact["prev_bugs"], -100.0);
    assert_eq!(r.factor_impact["test_coverage"], -40.0);
    let total: f64 = r.factor_impact.values().sum();
    assert!(total < -100.0);
  }

  #[test]
  fn file_count_factor_deducts_above_threshold() {
    let many: Vec<String> = (0..11).map(|i| format!("src/f{}.rs", i)).collect();
    let change = CommitChange::new("m", many);
    let f = extract_features(&change, &config());
    assert_eq!(f.num_files_modified, 11);
    let r = predict_risk_score(&f, &config());
    assert_eq!(r.risk_score, 5.0);
    assert_eq!(r.factor_impact["num_files_modified"], -5.0);
  }

  #[test]
  fn file_count_factor_can_be_disabled() {
    let cfg = RiskConfig {
      file_count_factor: false,
      ..RiskConfig::default()
    };
    let many: Vec<String> = (0..11).map(|i| format!("src/f{}.rs", i)).collect();
    let f = extract_features(&CommitChange::new("m", many), &cfg);
    let r = predict_risk_score(&f, &cfg);
    assert_eq!(r.risk_score, 0.0);
    assert!(!r.factor_impact.contains_key("num_files_modified"));
  }

  #[test]
  fn message_embeds_rounded_score() {
    let r = predict_risk_score(&features(0, 0, 75, &[]), &config());
    assert_eq!(r.risk_score, 2.5);
    assert_eq!(r.message, "Heuristic risk: 2.50%");
  }
}
