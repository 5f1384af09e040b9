//! Rule-based intent detection from commit message and PR title.

use crate::types::Intent;

/// Classify the combined PR title + commit message into one intent category
/// with a fixed base confidence. First matching rule wins; rules are checked
/// in a fixed priority order.
pub fn detect_intent(text: &str) -> (Intent, f64) {
  let t = text.trim().to_lowercase();

  if t.contains("fix") || t.contains("bug") {
    return (Intent::BugFix, 0.9);
  }
  if t.starts_with("feat") || t.contains("feature") {
    return (Intent::Feature, 0.9);
  }
  if t.contains("refactor") {
    return (Intent::Refactor, 0.85);
  }
  if t.contains("doc") || t.contains("readme") {
    return (Intent::Documentation, 0.9);
  }
  if t.contains("test") {
    return (Intent::Test, 0.9);
  }
  if t.contains("perf") || t.contains("performance") {
    return (Intent::Performance, 0.85);
  }
  if t.contains("security") || t.contains("vulnerability") {
    return (Intent::Security, 0.95);
  }
  if t.contains("chore") || t.contains("cleanup") {
    return (Intent::Chore, 0.8);
  }
  (Intent::Other, 0.6)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn conventional_prefixes_map_to_intents() {
    assert_eq!(detect_intent("fix: null deref").0, Intent::BugFix);
    assert_eq!(detect_intent("feat: dark mode").0, Intent::Feature);
    assert_eq!(detect_intent("refactor: split module").0, Intent::Refactor);
    assert_eq!(detect_intent("docs: update readme").0, Intent::Documentation);
    assert_eq!(detect_intent("chore: bump deps").0, Intent::Chore);
  }

  #[test]
  fn keyword_anywhere_in_message_matches() {
    // "quick fix" has no conventional prefix but still reads as a bug fix.
    assert_eq!(detect_intent("quick fix").0, Intent::BugFix);
    assert_eq!(detect_intent("found a bug in parser").0, Intent::BugFix);
  }

  #[test]
  fn bug_fix_outranks_feature() {
    // Both keywords present; bug_fix is checked first.
    let (intent, conf) = detect_intent("fix: feature flag crash");
    assert_eq!(intent, Intent::BugFix);
    assert_eq!(conf, 0.9);
  }

  #[test]
  fn security_has_highest_base_confidence() {
    let (intent, conf) = detect_intent("patch security hole in session handling");
    assert_eq!(intent, Intent::Security);
    assert_eq!(conf, 0.95);
  }

  #[test]
  fn unknown_defaults_to_other() {
    let (intent, conf) = detect_intent("misc changes");
    assert_eq!(intent, Intent::Other);
    assert_eq!(conf, 0.6);
  }
}
