//! Sentinel Core API
//!
//! HTTP service over the verdict engine: deserializes webhook-style payloads
//! into typed change records, runs the compliance classifier and risk scorer,
//! and persists combined results to PostgreSQL keyed by commit hash.
//! Binds to 127.0.0.1 by default (internal only).

pub mod export;
pub mod handlers;
pub mod hash;
pub mod state;
pub mod store;
pub mod types;

pub use handlers::{analyze_commit, compliance_check, export_csv, health, history, risk_score};
pub use state::AppState;
