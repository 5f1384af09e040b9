//! Stable commit key synthesis for callers that send no commit hash.
//!
//! The store dedups on commit hash, so every analyzed change needs one. When
//! the webhook payload omits it we derive a deterministic key from the commit
//! message and the changed file list. Uses blake3 for a fast, stable hash.

/// Derive a 32-hex-char commit key from message + files.
pub fn commit_key(commit_message: &str, changed_files: &[String]) -> String {
  let mut hasher = blake3::Hasher::new();
  hasher.update(commit_message.as_bytes());
  for file in changed_files {
    hasher.update(b"|");
    hasher.update(file.as_bytes());
  }
  let hex = hasher.finalize().to_hex();
  hex[..32].to_string()
}
