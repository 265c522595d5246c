//! Core types for the roast engine (GitHub API shapes, derived stats, output).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User profile as returned by `GET /users/{login}`. Unknown fields are
/// silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
  pub login: String,
  pub avatar_url: String,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub bio: Option<String>,
  pub public_repos: u32,
  pub followers: u32,
  pub following: u32,
  pub created_at: DateTime<Utc>,
  #[serde(default)]
  pub hireable: Option<bool>,
}

/// One repository as returned by `GET /users/{login}/repos`.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
  pub name: String,
  #[serde(default)]
  pub language: Option<String>,
  pub stargazers_count: u32,
  pub fork: bool,
  #[serde(default)]
  pub description: Option<String>,
  pub created_at: DateTime<Utc>,
  /// Null for repos that have never been pushed to; treated as not recently
  /// active.
  #[serde(default)]
  pub pushed_at: Option<DateTime<Utc>>,
}

/// Aggregate facts computed once per request and shared across rules.
/// Never cached across requests — every input is request-scoped.
#[derive(Debug, Clone)]
pub struct DerivedStats {
  /// Whole calendar years between account creation and "now".
  pub account_age_years: i32,
  /// Language → repo count, non-fork repos with a known language only.
  /// Sorted count-descending; ties keep first-occurrence order.
  pub language_counts: Vec<(String, u32)>,
  /// First three entries of the histogram.
  pub top_languages: Vec<String>,
  /// Sum of stars across all repos, forks included.
  pub total_stars: u64,
  pub fork_count: usize,
  /// Repos pushed within the trailing 90-day window.
  pub recent_repo_count: usize,
}

/// Summary block for the HTTP response (camelCase wire contract).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
  pub repos: u32,
  pub followers: u32,
  pub following: u32,
  pub top_languages: Vec<String>,
  pub account_age: String,
  pub bio: Option<String>,
}

/// Engine output: sampled roasts plus the summary stats block.
/// `roasts` may be empty; the caller substitutes the fallback line.
#[derive(Debug, Clone)]
pub struct RoastOutcome {
  pub roasts: Vec<String>,
  pub stats: ProfileStats,
}
