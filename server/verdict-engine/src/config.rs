//! Policy and scoring configuration with sane defaults.

/// Tunable editorial-policy knobs for the compliance classifier.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
  /// Labels that bypass every rule check (matched case-insensitively).
  pub approved_labels: Vec<String>,
  /// Path prefixes that require approval to touch.
  pub protected_prefixes: Vec<String>,
  /// Conventional-commit prefixes a message is expected to start with.
  pub required_prefixes: Vec<String>,
  /// Phrases that flag a change as rushed or throwaway.
  pub risky_phrases: Vec<String>,
  /// File suffixes that mark temp/backup artifacts.
  pub temp_suffixes: Vec<String>,
  /// Author emails allowed to push without a warning. Empty = rule off.
  pub authorized_authors: Vec<String>,
  /// Max message lines before the long-message warning fires.
  pub max_message_lines: usize,
  /// Min trimmed message length before the short-message warning fires.
  pub min_message_chars: usize,
}

impl Default for PolicyConfig {
  fn default() -> Self {
    Self {
      approved_labels: vec![
        "@approved".to_string(),
        "allow-during-freeze".to_string(),
        "hotfix".to_string(),
      ],
      protected_prefixes: vec!["core/".to_string(), "db/".to_string(), "auth/".to_string()],
      required_prefixes: vec![
        "fix:".to_string(),
        "feat:".to_string(),
        "test:".to_string(),
        "docs:".to_string(),
      ],
      risky_phrases: vec![
        "temporary".to_string(),
        "quick fix".to_string(),
        "test only".to_string(),
      ],
      temp_suffixes: vec![".tmp".to_string(), ".bak".to_string(), "~".to_string()],
      authorized_authors: Vec::new(),
      max_message_lines: 100,
      min_message_chars: 10,
    }
  }
}

/// Tunable knobs for the risk scorer.
#[derive(Debug, Clone)]
pub struct RiskConfig {
  /// Path prefixes that count as "core" for the touches_core feature.
  pub core_prefixes: Vec<String>,
  /// Include the num_files_modified deduction (-5 above the threshold).
  /// When off, the factor is absent from the impact breakdown entirely.
  pub file_count_factor: bool,
  /// File count above which the file-count deduction applies.
  pub file_count_threshold: usize,
}

impl Default for RiskConfig {
  fn default() -> Self {
    Self {
      core_prefixes: vec!["core/".to_string(), "db/".to_string()],
      file_count_factor: true,
      file_count_threshold: 10,
    }
  }
}
