//! HTTP handlers for the roast API.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use std::sync::Arc;

use roast_engine::FALLBACK_ROAST;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{RoastParams, RoastResponse};

pub async fn health() -> &'static str {
  "ok"
}

/// Trim the raw query value; blank and missing are equivalent.
fn normalize_username(raw: Option<&str>) -> Option<&str> {
  raw.map(str::trim).filter(|u| !u.is_empty())
}

pub async fn roast(
  State(state): State<Arc<AppState>>,
  Query(params): Query<RoastParams>,
) -> Result<Json<RoastResponse>, ApiError> {
  let username = normalize_username(params.username.as_deref()).ok_or(ApiError::MissingUsername)?;

  let profile = state.github.fetch_user(username).await?;
  let repos = state.github.fetch_repos(username).await;

  let now = Utc::now();
  let mut rng = rand::rng();
  let outcome = roast_engine::generate_roasts(&profile, &repos, now, &mut rng);

  // The engine may come back empty; the response never does.
  let mut roasts = outcome.roasts;
  if roasts.is_empty() {
    roasts.push(FALLBACK_ROAST.to_string());
  }

  Ok(Json(RoastResponse {
    username: profile.login,
    avatar: profile.avatar_url,
    roasts,
    stats: outcome.stats,
  }))
}
