//! GitRoast Roast Engine — rule-based roast generation; no DB, no network.
//!
//! Pure computation over an already-fetched GitHub profile + repository list:
//! derive aggregate stats, evaluate the fixed rule battery, shuffle, cap at
//! five. Both "now" and the random source are caller-supplied so the whole
//! pipeline is reproducible under test.

mod rules;
mod sampler;
mod stats;
mod types;

pub use sampler::MAX_ROASTS;
pub use stats::RECENT_WINDOW_DAYS;
pub use types::{DerivedStats, ProfileStats, RepoSummary, RoastOutcome, UserProfile};

use chrono::{DateTime, Utc};
use rand::Rng;

/// Fixed line the caller substitutes when no rule fires. The engine itself
/// returns an empty list in that case.
pub const FALLBACK_ROAST: &str = "You know what? I looked through your profile and I got nothing. Either you're perfect or so average that even the roast generator couldn't find anything interesting. That's almost impressive.";

/// Compute the aggregate facts shared by the rules and the response summary.
pub fn derive_stats(
  profile: &UserProfile,
  repos: &[RepoSummary],
  now: DateTime<Utc>,
) -> DerivedStats {
  stats::compute(profile, repos, now)
}

/// Evaluate every rule and return the full, unsampled candidate list.
pub fn candidate_roasts<R: Rng>(
  profile: &UserProfile,
  repos: &[RepoSummary],
  stats: &DerivedStats,
  now: DateTime<Utc>,
  rng: &mut R,
) -> Vec<String> {
  rules::evaluate(profile, repos, stats, now, rng)
}

/// Run the full pipeline: derive stats, evaluate the rules, sample.
pub fn generate_roasts<R: Rng>(
  profile: &UserProfile,
  repos: &[RepoSummary],
  now: DateTime<Utc>,
  rng: &mut R,
) -> RoastOutcome {
  let derived = stats::compute(profile, repos, now);
  let candidates = rules::evaluate(profile, repos, &derived, now, rng);
  let roasts = sampler::sample(candidates, sampler::MAX_ROASTS, rng);

  RoastOutcome {
    roasts,
    stats: stats::profile_stats(profile, &derived),
  }
}
