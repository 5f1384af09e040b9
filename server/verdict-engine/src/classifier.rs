//! Optional model-backed intent classification with rule-based fallback.
//!
//! The rule-based path is the correctness baseline and never depends on a
//! model. A deployment may plug in an `IntentModel` to replace the intent
//! detection step only; label override and the warning rules always run, and
//! any model failure falls back silently to the rules.

use chrono::Utc;
use thiserror::Error;

use crate::compliance;
use crate::config::PolicyConfig;
use crate::intent;
use crate::types::{CommitChange, ComplianceVerdict, Intent};

#[derive(Debug, Error)]
pub enum ModelError {
  #[error("model unavailable: {0}")]
  Unavailable(String),
  #[error("inference failed: {0}")]
  Inference(String),
}

/// External inference capability: text in, (intent, confidence) out.
pub trait IntentModel {
  fn infer(&self, text: &str) -> Result<(Intent, f64), ModelError>;
}

/// Classify with a model for the intent step, falling back to the rule-based
/// intent on any model error. Output shape is identical to `compliance::classify`.
pub fn classify_with_model(
  change: &CommitChange,
  config: &PolicyConfig,
  model: &dyn IntentModel,
) -> ComplianceVerdict {
  let rule_verdict = compliance::classify_at(change, config, Utc::now());
  if rule_verdict.category == Intent::LabelOverride {
    return rule_verdict;
  }

  let text = format!("{} {}", change.pr_title, change.commit_message);
  match model.infer(&text) {
    Ok((category, confidence)) => {
      // Keep the rule-derived warnings/verdict; swap in the model's intent and
      // rescale confidence by the same compounded factor the rules applied.
      let (_, rule_base) = intent::detect_intent(&text);
      let penalty = if rule_base > 0.0 {
        rule_verdict.confidence / rule_base
      } else {
        1.0
      };
      ComplianceVerdict {
        is_compliant: rule_verdict.is_compliant,
        category,
        confidence: ((confidence.clamp(0.0, 1.0) * penalty) * 100.0).round() / 100.0,
        message: rule_verdict.message,
      }
    }
    Err(_) => rule_verdict,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  struct FixedModel(Result<(Intent, f64), &'static str>);

  impl IntentModel for FixedModel {
    fn infer(&self, _text: &str) -> Result<(Intent, f64), ModelError> {
      self
        .0
        .clone()
        .map_err(|e| ModelError::Inference(e.to_string()))
    }
  }

  #[test]
  fn failing_model_falls_back_to_rules() {
    let change = CommitChange::new("fix: null pointer in parser", vec![]);
    let model = FixedModel(Err("weights missing"));
    let v = classify_with_model(&change, &PolicyConfig::default(), &model);
    assert!(v.is_compliant);
    assert_eq!(v.category, Intent::BugFix);
    assert_eq!(v.confidence, 0.9);
  }

  #[test]
  fn model_intent_replaces_rule_intent() {
    let change = CommitChange::new("fix: harden session token checks", vec![]);
    let model = FixedModel(Ok((Intent::Security, 0.97)));
    let v = classify_with_model(&change, &PolicyConfig::default(), &model);
    assert_eq!(v.category, Intent::Security);
    assert_eq!(v.confidence, 0.97);
    assert!(v.is_compliant);
  }

  #[test]
  fn model_never_bypasses_warning_rules() {
    let change = CommitChange::new("quick fix", vec!["core/db.py".into()]);
    let model = FixedModel(Ok((Intent::BugFix, 1.0)));
    let v = classify_with_model(&change, &PolicyConfig::default(), &model);
    assert!(!v.is_compliant);
    // Full penalty chain still applies to the model confidence:
    // rounded rule confidence 0.13 over base 0.9 gives 0.1444 -> 0.14.
    assert_eq!(v.confidence, 0.14);
  }

  #[test]
  fn label_override_short_circuits_before_model() {
    let mut change = CommitChange::new("anything", vec![]);
    change.pr_labels = vec!["hotfix".into()];
    let model = FixedModel(Ok((Intent::Chore, 0.5)));
    let v = classify_with_model(&change, &PolicyConfig::default(), &model);
    assert_eq!(v.category, Intent::LabelOverride);
    assert_eq!(v.confidence, 1.0);
  }
}
