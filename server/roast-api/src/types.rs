//! Request/response types for the roast endpoint.

use roast_engine::ProfileStats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RoastParams {
  #[serde(default)]
  pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RoastResponse {
  pub username: String,
  pub avatar: String,
  pub roasts: Vec<String>,
  pub stats: ProfileStats,
}
