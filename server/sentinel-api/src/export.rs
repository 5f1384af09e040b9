//! CSV export of persisted evaluations.

use crate::types::HistoryRow;

const HEADER: &str = "commit_hash,repo_name,project,author,category,is_compliant,confidence,risk_score,compliance_message,risk_message,created_at";

/// Render history rows as CSV (header + one line per row, RFC 4180 quoting).
pub fn render_csv(rows: &[HistoryRow]) -> String {
  let mut out = String::with_capacity(rows.len() * 128 + HEADER.len() + 1);
  out.push_str(HEADER);
  out.push('\n');
  for row in rows {
    let fields = [
      row.commit_hash.clone(),
      row.repo_name.clone().unwrap_or_default(),
      row.project.clone().unwrap_or_default(),
      row.author.clone().unwrap_or_default(),
      row.category.clone(),
      row.is_compliant.to_string(),
      format!("{:.2}", row.confidence),
      row
        .risk_score
        .map(|s| format!("{:.2}", s))
        .unwrap_or_default(),
      row.compliance_message.clone(),
      row.risk_message.clone().unwrap_or_default(),
      row.created_at.to_rfc3339(),
    ];
    let line: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
    out.push_str(&line.join(","));
    out.push('\n');
  }
  out
}

/// Quote a field when it contains a comma, quote, or newline; double quotes.
fn escape_field(field: &str) -> String {
  if field.contains(',') || field.contains('"') || field.contains('\n') {
    format!("\"{}\"", field.replace('"', "\"\""))
  } else {
    field.to_string()
  }
}
