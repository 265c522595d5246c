//! Derived aggregate stats over a fetched repository list.

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::types::{DerivedStats, ProfileStats, RepoSummary, UserProfile};

/// Trailing window for the "recently active" classification.
pub const RECENT_WINDOW_DAYS: i64 = 90;

/// Compute every aggregate fact the rules (and the response summary) need.
/// Deterministic given `now`; a repo near the 90-day edge may flip between
/// calls made at different times, which is accepted.
pub fn compute(profile: &UserProfile, repos: &[RepoSummary], now: DateTime<Utc>) -> DerivedStats {
  let account_age_years = now.year() - profile.created_at.year();

  // Histogram over non-fork repos with a known language. Vec instead of a map
  // so equal counts keep first-occurrence order through the stable sort.
  let mut language_counts: Vec<(String, u32)> = Vec::new();
  for repo in repos {
    if repo.fork {
      continue;
    }
    let Some(lang) = &repo.language else { continue };
    match language_counts.iter_mut().find(|(l, _)| l == lang) {
      Some((_, count)) => *count += 1,
      None => language_counts.push((lang.clone(), 1)),
    }
  }
  language_counts.sort_by(|a, b| b.1.cmp(&a.1));

  let top_languages = language_counts
    .iter()
    .take(3)
    .map(|(lang, _)| lang.clone())
    .collect();

  let total_stars = repos.iter().map(|r| u64::from(r.stargazers_count)).sum();
  let fork_count = repos.iter().filter(|r| r.fork).count();

  let window = Duration::days(RECENT_WINDOW_DAYS);
  let recent_repo_count = repos
    .iter()
    .filter(|r| matches!(r.pushed_at, Some(pushed) if now - pushed < window))
    .count();

  DerivedStats {
    account_age_years,
    language_counts,
    top_languages,
    total_stars,
    fork_count,
    recent_repo_count,
  }
}

/// "New this year" for age 0, otherwise "N year(s) old".
pub fn account_age_label(age_years: i32) -> String {
  if age_years == 0 {
    "New this year".to_string()
  } else {
    format!(
      "{} year{} old",
      age_years,
      if age_years == 1 { "" } else { "s" }
    )
  }
}

/// Assemble the response summary block from the profile and derived stats.
pub fn profile_stats(profile: &UserProfile, stats: &DerivedStats) -> ProfileStats {
  ProfileStats {
    repos: profile.public_repos,
    followers: profile.followers,
    following: profile.following,
    top_languages: stats.top_languages.clone(),
    account_age: account_age_label(stats.account_age_years),
    bio: profile.bio.clone(),
  }
}
