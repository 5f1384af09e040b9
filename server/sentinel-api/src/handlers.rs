//! HTTP handlers for the Sentinel API.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use std::sync::Arc;

use verdict_engine::{analyze, check_compliance, extract_features, predict_risk_score};

use crate::export;
use crate::hash;
use crate::state::AppState;
use crate::store::{self, NewResult, SaveOutcome};
use crate::types::*;

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
  let database = match store::ping(&state.pool).await {
    Ok(()) => "connected".to_string(),
    Err(e) => format!("error: {}", e),
  };
  Json(HealthResponse {
    status: "ok",
    database,
    timestamp: Utc::now().to_rfc3339(),
  })
}

pub async fn compliance_check(
  Json(payload): Json<ComplianceRequest>,
) -> Json<verdict_engine::ComplianceVerdict> {
  let change = payload.into_change();
  Json(check_compliance(&change))
}

pub async fn risk_score(
  Json(payload): Json<RiskRequest>,
) -> Json<verdict_engine::RiskAssessment> {
  let change = payload.into_change();
  let features = extract_features(&change);
  Json(predict_risk_score(&features))
}

/// Run both classifiers, persist the combined result keyed by commit hash.
/// Re-analyzing a known hash returns the fresh computation with status
/// "duplicate" and skips the write.
pub async fn analyze_commit(
  State(state): State<Arc<AppState>>,
  Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, StatusCode> {
  let change = &payload.change;
  let commit_hash = payload
    .commit_hash
    .clone()
    .unwrap_or_else(|| hash::commit_key(&change.commit_message, &change.changed_files));

  let out = analyze(change);

  let new = NewResult {
    commit_hash: &commit_hash,
    repo_name: payload.repo_name.as_deref().or(payload.repo_url.as_deref()),
    project: payload.project.as_deref(),
    author: payload
      .user
      .as_deref()
      .or(change.author_email.as_deref()),
    commit_message: &change.commit_message,
    files_changed: &change.changed_files,
    labels: &change.pr_labels,
    compliance: &out.compliance,
    risk: &out.risk,
  };

  match store::save_result(&state.pool, &new).await {
    Ok(SaveOutcome::Inserted { compliance_id }) => Ok(Json(AnalyzeResponse {
      status: "ok",
      commit_hash,
      compliance_id: Some(compliance_id),
      compliance: out.compliance,
      risk: out.risk,
    })),
    Ok(SaveOutcome::Duplicate) => Ok(Json(AnalyzeResponse {
      status: "duplicate",
      commit_hash,
      compliance_id: None,
      compliance: out.compliance,
      risk: out.risk,
    })),
    Err(e) => {
      eprintln!("analyze: db error: {}", e);
      Err(StatusCode::INTERNAL_SERVER_ERROR)
    }
  }
}

pub async fn history(
  State(state): State<Arc<AppState>>,
  Query(params): Query<HistoryParams>,
) -> Result<Json<Vec<HistoryRow>>, StatusCode> {
  match store::fetch_history(&state.pool, params.limit).await {
    Ok(rows) => Ok(Json(rows)),
    Err(e) => {
      eprintln!("history: db error: {}", e);
      Err(StatusCode::INTERNAL_SERVER_ERROR)
    }
  }
}

pub async fn export_csv(
  State(state): State<Arc<AppState>>,
  Query(params): Query<HistoryParams>,
) -> Response {
  match store::fetch_history(&state.pool, params.limit).await {
    Ok(rows) => {
      let body = export::render_csv(&rows);
      (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        body,
      )
        .into_response()
    }
    Err(e) => {
      eprintln!("export: db error: {}", e);
      StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
  }
}
