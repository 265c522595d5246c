//! The roast rule catalog.
//!
//! Each rule is a pure check over (profile, repos, derived stats) yielding at
//! most one line; the engine runs every category and collects the hits. The
//! only randomness is the portfolio rule's staleness figure, drawn from the
//! injected rng.

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;

use crate::types::{DerivedStats, RepoSummary, UserProfile};

/// Evaluate the full battery and return the unsampled candidate list.
pub fn evaluate<R: Rng>(
  profile: &UserProfile,
  repos: &[RepoSummary],
  stats: &DerivedStats,
  now: DateTime<Utc>,
  rng: &mut R,
) -> Vec<String> {
  let mut roasts = Vec::new();

  if let Some(r) = account_age_roast(profile, stats) {
    roasts.push(r);
  }
  if let Some(r) = repo_count_roast(profile, stats) {
    roasts.push(r);
  }
  if let Some(r) = follow_ratio_roast(profile) {
    roasts.push(r);
  }
  roasts.extend(bio_roasts(profile));
  roasts.extend(language_roasts(stats, now));
  roasts.extend(repo_name_roasts(repos, rng));
  if let Some(r) = star_roast(repos, stats) {
    roasts.push(r);
  }
  if let Some(r) = fork_ratio_roast(repos, stats) {
    roasts.push(r);
  }
  if let Some(r) = activity_roast(repos, stats) {
    roasts.push(r);
  }
  if let Some(r) = hireable_roast(profile) {
    roasts.push(r);
  }

  roasts
}

fn account_age_roast(profile: &UserProfile, stats: &DerivedStats) -> Option<String> {
  let age = stats.account_age_years;
  if age > 10 {
    Some(format!(
      "Been on GitHub for {} years and still haven't figured out how to get more than {} followers? That's commitment to mediocrity.",
      age, profile.followers
    ))
  } else if age < 1 {
    Some(
      "Fresh account, huh? Give it a few months before your \"I'll commit every day\" resolution dies like all the others.".to_string(),
    )
  } else {
    None
  }
}

fn repo_count_roast(profile: &UserProfile, stats: &DerivedStats) -> Option<String> {
  if profile.public_repos == 0 {
    Some(
      "Zero public repos? Are you using GitHub as a social network or what? Even my grandma has pushed more code.".to_string(),
    )
  } else if profile.public_repos > 100 {
    Some(format!(
      "{} repos?! Quality over quantity is just a myth to you, isn't it?",
      profile.public_repos
    ))
  } else if profile.public_repos < 5 && stats.account_age_years > 2 {
    Some(format!(
      "Only {} repos after {} years? I've seen more productivity from a broken CI pipeline.",
      profile.public_repos, stats.account_age_years
    ))
  } else {
    None
  }
}

fn follow_ratio_roast(profile: &UserProfile) -> Option<String> {
  let followers = u64::from(profile.followers);
  let following = u64::from(profile.following);
  if following > followers * 3 && following > 50 {
    Some(format!(
      "Following {} people but only {} follow back? That's giving \"please notice me senpai\" energy.",
      profile.following, profile.followers
    ))
  } else if followers > 1000 && following < 10 {
    Some(format!(
      "{} followers but you only follow {} people? Very \"I'm too important to follow back\" of you.",
      profile.followers, profile.following
    ))
  } else {
    None
  }
}

/// Bio rules are independent of each other; several can fire for one bio.
/// The no-bio line is the else branch and excludes all of them. An
/// empty-string bio counts as absent.
fn bio_roasts(profile: &UserProfile) -> Vec<String> {
  let mut roasts = Vec::new();

  let Some(bio) = profile.bio.as_deref().filter(|b| !b.is_empty()) else {
    roasts.push(
      "No bio? Too mysterious to tell us anything about yourself, or just couldn't think of a single interesting thing to say?".to_string(),
    );
    return roasts;
  };

  let bio = bio.to_lowercase();
  if bio.contains("full stack") {
    roasts.push(
      "\"Full stack developer\" in your bio? So you're mediocre at twice as many things. Impressive.".to_string(),
    );
  }
  // First match wins: 10x, then ninja, then rockstar.
  let buzzword = ["10x", "ninja", "rockstar"]
    .iter()
    .find(|term| bio.contains(*term));
  if let Some(term) = buzzword {
    roasts.push(format!(
      "Did you really put \"{}\" in your bio? It's giving 2015 LinkedIn recruiter bait.",
      term
    ));
  }
  if bio.contains("entrepreneur") {
    roasts.push(
      "\"Entrepreneur\" - so you have 47 unfinished side projects and a podcast idea you'll never start?".to_string(),
    );
  }
  if bio.contains("open source") {
    roasts.push(
      "Claims to love open source but we both know you've never actually read the LICENSE file.".to_string(),
    );
  }
  let len = bio.chars().count();
  if len > 150 {
    roasts.push(format!(
      "Your bio is {} characters? This isn't a resume, it's a profile. Some of us have scrolling fatigue.",
      len
    ));
  }

  roasts
}

fn language_roasts(stats: &DerivedStats, now: DateTime<Utc>) -> Vec<String> {
  let mut roasts = Vec::new();
  let top = |lang: &str| stats.top_languages.iter().any(|l| l == lang);

  if top("JavaScript") && top("TypeScript") {
    roasts.push(
      "Using both JavaScript and TypeScript? Pick a side. The type safety fence isn't comfortable to sit on.".to_string(),
    );
  }
  if top("JavaScript") && !top("TypeScript") {
    roasts.push(format!(
      "Still writing plain JavaScript in {}? Living dangerously with those \"undefined is not a function\" errors, I see.",
      now.year()
    ));
  }
  if top("PHP") {
    roasts.push(
      "PHP developer? Bold of you to admit that publicly. Respect for the confidence, I guess.".to_string(),
    );
  }
  if top("Java") {
    roasts.push(
      "Java? How's the AbstractFactoryBeanProviderStrategyImpl working out for ya?".to_string(),
    );
  }
  if top("Rust") {
    roasts.push(
      "Rust developer? Tell me you spend more time fighting the borrow checker than writing actual features without telling me.".to_string(),
    );
  }
  if top("Go") {
    roasts.push(
      "Go developer? How's it feel writing \"if err != nil\" 47 times per function?".to_string(),
    );
  }
  if top("Python") {
    roasts.push(
      "Python main? So you basically write fancy bash scripts and call yourself a developer. Relatable, honestly.".to_string(),
    );
  }

  roasts
}

fn repo_name_roasts<R: Rng>(repos: &[RepoSummary], rng: &mut R) -> Vec<String> {
  let mut roasts = Vec::new();
  let names: Vec<String> = repos
    .iter()
    .filter(|r| !r.fork)
    .map(|r| r.name.to_lowercase())
    .collect();
  let any = |needles: &[&str]| {
    names
      .iter()
      .any(|n| needles.iter().any(|needle| n.contains(needle)))
  };

  if any(&["todo", "task"]) {
    roasts.push(
      "You made a todo app? Groundbreaking. Revolutionary. Never been done before.".to_string(),
    );
  }
  if any(&["portfolio", "personal-site"]) {
    // The staleness figure is random on purpose, not read from pushed_at.
    let years_stale: u32 = rng.random_range(1..=3);
    roasts.push(format!(
      "Got a portfolio repo that was last updated {} years ago? We all have abandoned dreams.",
      years_stale
    ));
  }
  if any(&["dotfiles"]) {
    roasts.push(
      "Dotfiles repo? Spending 4 hours customizing your terminal to save 4 seconds is peak developer behavior.".to_string(),
    );
  }
  if any(&["awesome"]) {
    roasts.push(
      "An \"awesome-\" list? A curated collection of links you saved and forgot about. Classic.".to_string(),
    );
  }

  roasts
}

fn star_roast(repos: &[RepoSummary], stats: &DerivedStats) -> Option<String> {
  if stats.total_stars == 0 && !repos.is_empty() {
    Some(
      "Not a single star across all your repos? Your code is so exclusive even you don't star it.".to_string(),
    )
  } else if stats.total_stars < 10 && repos.len() > 20 {
    Some(format!(
      "{} repos and only {} total stars? The GitHub algorithm said \"nah\" and moved on.",
      repos.len(),
      stats.total_stars
    ))
  } else {
    None
  }
}

fn fork_ratio_roast(repos: &[RepoSummary], stats: &DerivedStats) -> Option<String> {
  if repos.len() > 5 && stats.fork_count as f64 > repos.len() as f64 * 0.7 {
    let pct = (stats.fork_count as f64 / repos.len() as f64 * 100.0).round() as u32;
    Some(format!(
      "{}% of your repos are forks? You're basically a human git clone.",
      pct
    ))
  } else {
    None
  }
}

fn activity_roast(repos: &[RepoSummary], stats: &DerivedStats) -> Option<String> {
  if stats.recent_repo_count == 0 && !repos.is_empty() {
    Some(
      "No commits in the last 3 months? Your green squares are looking pretty barren. GitHub thinks you might be a bot that gave up.".to_string(),
    )
  } else {
    None
  }
}

fn hireable_roast(profile: &UserProfile) -> Option<String> {
  if profile.hireable == Some(true) {
    Some(
      "Marked as \"hireable\" - nothing says desperation like a boolean flag. Just kidding, we've all been there. Good luck out there! 💪".to_string(),
    )
  } else {
    None
  }
}
