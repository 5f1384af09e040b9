//! Compliance classifier: label override, intent detection, warning rules.
//!
//! A change is compliant iff zero warning rules trigger. Each triggered rule
//! appends a warning string and multiplies confidence by a factor in (0,1),
//! so confidence compounds downward and never increases.

use chrono::{DateTime, Utc};

use crate::config::PolicyConfig;
use crate::intent;
use crate::types::{CommitChange, ComplianceVerdict, Intent};

/// Classify a change against the editorial policy, using the wall clock for
/// the future-timestamp rule.
pub fn classify(change: &CommitChange, config: &PolicyConfig) -> ComplianceVerdict {
  classify_at(change, config, Utc::now())
}

/// Classify with an explicit "now" (pure; used directly by tests).
pub fn classify_at(
  change: &CommitChange,
  config: &PolicyConfig,
  now: DateTime<Utc>,
) -> ComplianceVerdict {
  // Label override short-circuits all further checks.
  if has_approved_label(&change.pr_labels, config) {
    return ComplianceVerdict {
      is_compliant: true,
      category: Intent::LabelOverride,
      confidence: 1.0,
      message: "Allowed via label override".to_string(),
    };
  }

  let text = format!("{} {}", change.pr_title, change.commit_message);
  let (category, base_confidence) = intent::detect_intent(&text);

  let mut confidence = base_confidence;
  let mut warnings: Vec<String> = Vec::new();
  let mut warn = |w: String, factor: f64| {
    warnings.push(w);
    confidence *= factor;
  };

  let msg = change.commit_message.trim();
  let msg_lower = msg.to_lowercase();

  if !config
    .required_prefixes
    .iter()
    .any(|p| msg_lower.starts_with(p.as_str()))
  {
    warn(
      format!(
        "Missing conventional prefix ({})",
        config.required_prefixes.join(", ")
      ),
      0.7,
    );
  }

  if change.changed_files.iter().any(|f| {
    config
      .protected_prefixes
      .iter()
      .any(|p| f.starts_with(p.as_str()))
  }) {
    warn(
      "Protected paths modified without approval label".to_string(),
      0.6,
    );
  }

  if msg.chars().count() < config.min_message_chars {
    warn("Commit message too short".to_string(), 0.5);
  }

  if let Some(phrase) = config
    .risky_phrases
    .iter()
    .find(|p| msg_lower.contains(p.as_str()))
  {
    warn(format!("Risky phrase in message: '{}'", phrase), 0.7);
  }

  let prefix_tokens = config
    .required_prefixes
    .iter()
    .filter(|p| msg_lower.contains(p.as_str()))
    .count();
  if prefix_tokens > 1 {
    warn("Multiple commit prefixes in one message".to_string(), 0.85);
  }

  if change.changed_files.iter().any(|f| {
    config
      .temp_suffixes
      .iter()
      .any(|s| f.ends_with(s.as_str()))
  }) {
    warn("Temp or backup files in change".to_string(), 0.6);
  }

  if let Some(email) = &change.author_email {
    if !config.authorized_authors.is_empty()
      && !config
        .authorized_authors
        .iter()
        .any(|a| a.eq_ignore_ascii_case(email))
    {
      warn("Author not in authorized list".to_string(), 0.8);
    }
  }

  if has_malformed_header(msg) {
    warn(
      "Header does not match 'type(scope): description'".to_string(),
      0.9,
    );
  }

  if change.commit_message.lines().count() > config.max_message_lines {
    warn(
      format!("Commit message exceeds {} lines", config.max_message_lines),
      0.85,
    );
  }

  if let Some(ts) = &change.timestamp {
    match DateTime::parse_from_rfc3339(ts) {
      Ok(parsed) => {
        if parsed.with_timezone(&Utc) > now {
          warn("Timestamp in the future".to_string(), 0.9);
        }
      }
      Err(_) => warn("Invalid timestamp".to_string(), 0.9),
    }
  }

  let is_compliant = warnings.is_empty();
  let message = if is_compliant {
    format!("{} allowed", category.as_str())
  } else {
    warnings.join(" | ")
  };

  ComplianceVerdict {
    is_compliant,
    category,
    confidence: round2(confidence),
    message,
  }
}

fn has_approved_label(labels: &[String], config: &PolicyConfig) -> bool {
  labels.iter().any(|l| {
    config
      .approved_labels
      .iter()
      .any(|a| a.eq_ignore_ascii_case(l.trim()))
  })
}

/// A header is malformed when the first line carries a `:` but the part
/// before it is not `word` or `word(scope)`. Messages with no `:` at all are
/// handled by the missing-prefix rule instead.
fn has_malformed_header(msg: &str) -> bool {
  let first_line = msg.lines().next().unwrap_or("");
  let (head, rest) = match first_line.split_once(':') {
    Some(parts) => parts,
    None => return false,
  };
  if rest.trim().is_empty() {
    return true;
  }
  let head = head.trim();
  let (word, scope) = match head.split_once('(') {
    Some((w, s)) => (w, Some(s)),
    None => (head, None),
  };
  let word_ok = !word.is_empty()
    && word
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
  let scope_ok = match scope {
    None => true,
    Some(s) => {
      s.ends_with(')')
        && s.len() > 1
        && s[..s.len() - 1]
          .chars()
          .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }
  };
  !(word_ok && scope_ok)
}

fn round2(v: f64) -> f64 {
  (v * 100.0).round() / 100.0
}
