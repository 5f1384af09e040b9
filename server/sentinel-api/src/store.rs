//! Postgres persistence: combined results keyed by commit hash.
//!
//! One compliance row + one FK-linked risk row per analyzed commit, written
//! in a single transaction. Records are created once and never updated in
//! place; re-analyzing a commit hash is a skipped duplicate.

use sqlx::{PgPool, Row};
use verdict_engine::{ComplianceVerdict, RiskAssessment};

use crate::types::HistoryRow;

/// Everything needed to persist one combined result.
pub struct NewResult<'a> {
  pub commit_hash: &'a str,
  pub repo_name: Option<&'a str>,
  pub project: Option<&'a str>,
  pub author: Option<&'a str>,
  pub commit_message: &'a str,
  pub files_changed: &'a [String],
  pub labels: &'a [String],
  pub compliance: &'a ComplianceVerdict,
  pub risk: &'a RiskAssessment,
}

/// Outcome of a save attempt.
pub enum SaveOutcome {
  Inserted { compliance_id: i64 },
  Duplicate,
}

/// Insert a combined result, or skip it when the commit hash already exists.
pub async fn save_result(pool: &PgPool, new: &NewResult<'_>) -> Result<SaveOutcome, sqlx::Error> {
  let mut tx = pool.begin().await?;

  let inserted = sqlx::query(
    r#"
    INSERT INTO compliance_results
      (commit_hash, repo_name, project, author, commit_message, files_changed, labels,
       is_compliant, category, confidence, compliance_message)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
    ON CONFLICT (commit_hash) DO NOTHING
    RETURNING id
    "#,
  )
  .bind(new.commit_hash)
  .bind(new.repo_name)
  .bind(new.project)
  .bind(new.author)
  .bind(new.commit_message)
  .bind(new.files_changed)
  .bind(new.labels)
  .bind(new.compliance.is_compliant)
  .bind(new.compliance.category.as_str())
  .bind(new.compliance.confidence)
  .bind(&new.compliance.message)
  .fetch_optional(&mut *tx)
  .await?;

  let compliance_id: i64 = match inserted {
    Some(row) => row.try_get("id")?,
    None => return Ok(SaveOutcome::Duplicate),
  };

  sqlx::query(
    r#"
    INSERT INTO risk_scores
      (compliance_id, commit_hash, risk_score, factors, factor_impact, risk_message)
    VALUES ($1, $2, $3, $4, $5, $6)
    "#,
  )
  .bind(compliance_id)
  .bind(new.commit_hash)
  .bind(new.risk.risk_score)
  .bind(serde_json::to_value(&new.risk.factors).unwrap_or_default())
  .bind(serde_json::to_value(&new.risk.factor_impact).unwrap_or_default())
  .bind(&new.risk.message)
  .execute(&mut *tx)
  .await?;

  tx.commit().await?;
  Ok(SaveOutcome::Inserted { compliance_id })
}

/// Recent evaluations, newest first (compliance LEFT JOIN risk).
pub async fn fetch_history(pool: &PgPool, limit: i64) -> Result<Vec<HistoryRow>, sqlx::Error> {
  let rows = sqlx::query(
    r#"
    SELECT c.id, c.commit_hash, c.repo_name, c.project, c.author, c.commit_message,
           c.files_changed, c.labels, c.is_compliant, c.category, c.confidence,
           c.compliance_message, c.created_at,
           r.risk_score, r.factors, r.factor_impact, r.risk_message
    FROM compliance_results c
    LEFT JOIN risk_scores r ON c.id = r.compliance_id
    ORDER BY c.created_at DESC
    LIMIT $1
    "#,
  )
  .bind(limit.clamp(1, 1000))
  .fetch_all(pool)
  .await?;

  rows
    .into_iter()
    .map(|row| {
      Ok(HistoryRow {
        id: row.try_get("id")?,
        commit_hash: row.try_get("commit_hash")?,
        repo_name: row.try_get("repo_name")?,
        project: row.try_get("project")?,
        author: row.try_get("author")?,
        commit_message: row.try_get("commit_message")?,
        files_changed: row.try_get("files_changed")?,
        labels: row.try_get("labels")?,
        is_compliant: row.try_get("is_compliant")?,
        category: row.try_get("category")?,
        confidence: row.try_get("confidence")?,
        compliance_message: row.try_get("compliance_message")?,
        risk_score: row.try_get("risk_score")?,
        factors: row.try_get("factors")?,
        factor_impact: row.try_get("factor_impact")?,
        risk_message: row.try_get("risk_message")?,
        created_at: row.try_get("created_at")?,
      })
    })
    .collect()
}

/// Lightweight connectivity probe for /health.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
  sqlx::query("SELECT 1").execute(pool).await?;
  Ok(())
}
