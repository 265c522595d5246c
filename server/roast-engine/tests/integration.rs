//! Integration tests for the roast engine, driven by GitHub-shaped JSON fixtures.

use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use roast_engine::{
  candidate_roasts, derive_stats, generate_roasts, RepoSummary, UserProfile, FALLBACK_ROAST,
  MAX_ROASTS,
};

fn now() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

fn profile_from_json(json: &str) -> UserProfile {
  serde_json::from_str(json).unwrap()
}

fn repos_from_json(json: &str) -> Vec<RepoSummary> {
  serde_json::from_str(json).unwrap()
}

fn candidates(profile: &UserProfile, repos: &[RepoSummary], seed: u64) -> Vec<String> {
  let derived = derive_stats(profile, repos, now());
  let mut rng = StdRng::seed_from_u64(seed);
  candidate_roasts(profile, repos, &derived, now(), &mut rng)
}

#[test]
fn github_payload_shapes_deserialize() {
  // Trimmed-down real response shapes; unknown fields must be ignored.
  let profile = profile_from_json(
    r#"{
      "login": "octocat",
      "id": 583231,
      "avatar_url": "https://avatars.githubusercontent.com/u/583231",
      "html_url": "https://github.com/octocat",
      "name": "The Octocat",
      "bio": null,
      "public_repos": 8,
      "followers": 9999,
      "following": 9,
      "created_at": "2011-01-25T18:44:36Z",
      "hireable": null
    }"#,
  );
  assert_eq!(profile.login, "octocat");
  assert_eq!(profile.bio, None);

  let repos = repos_from_json(
    r#"[{
      "id": 1296269,
      "name": "Hello-World",
      "language": null,
      "stargazers_count": 3,
      "fork": false,
      "description": "My first repository on GitHub!",
      "created_at": "2011-01-26T19:01:12Z",
      "pushed_at": "2025-05-01T10:00:00Z"
    }]"#,
  );
  assert_eq!(repos.len(), 1);
  assert_eq!(repos[0].pushed_at.unwrap().to_rfc3339(), "2025-05-01T10:00:00+00:00");
}

#[test]
fn empty_profile_gets_exactly_no_bio_and_zero_repo_jabs() {
  let profile = profile_from_json(
    r#"{
      "login": "lurker",
      "avatar_url": "https://avatars.example/lurker",
      "name": null,
      "bio": null,
      "public_repos": 0,
      "followers": 0,
      "following": 0,
      "created_at": "2022-04-01T00:00:00Z",
      "hireable": null
    }"#,
  );
  let repos: Vec<RepoSummary> = Vec::new();

  let set = candidates(&profile, &repos, 1);
  assert_eq!(set.len(), 2, "got: {:?}", set);
  assert!(set.iter().any(|r| r.starts_with("No bio?")));
  assert!(set.iter().any(|r| r.starts_with("Zero public repos?")));

  // Sampled output keeps both (min(5, 2) = 2) and never needs the fallback.
  let mut rng = StdRng::seed_from_u64(1);
  let outcome = generate_roasts(&profile, &repos, now(), &mut rng);
  assert_eq!(outcome.roasts.len(), 2);
}

#[test]
fn fresh_buzzword_profile_scenario() {
  let profile = profile_from_json(
    r#"{
      "login": "newbie",
      "avatar_url": "https://avatars.example/newbie",
      "name": "New B",
      "bio": "10x ninja rockstar",
      "public_repos": 3,
      "followers": 0,
      "following": 0,
      "created_at": "2025-02-01T00:00:00Z",
      "hireable": null
    }"#,
  );
  let repos = repos_from_json(
    r#"[
      {"name": "app-one", "language": "JavaScript", "stargazers_count": 0, "fork": false,
       "description": null, "created_at": "2025-02-02T00:00:00Z", "pushed_at": "2025-06-01T00:00:00Z"},
      {"name": "app-two", "language": "JavaScript", "stargazers_count": 0, "fork": false,
       "description": null, "created_at": "2025-02-03T00:00:00Z", "pushed_at": "2025-06-01T00:00:00Z"},
      {"name": "app-three", "language": "TypeScript", "stargazers_count": 0, "fork": false,
       "description": null, "created_at": "2025-02-04T00:00:00Z", "pushed_at": "2025-06-01T00:00:00Z"}
    ]"#,
  );

  let set = candidates(&profile, &repos, 1);
  assert!(set.iter().any(|r| r.starts_with("Fresh account")));
  assert!(set.iter().any(|r| r.contains("\"10x\"")), "buzzword priority: {:?}", set);
  assert!(set.iter().any(|r| r.contains("Pick a side")));
  assert!(set.iter().any(|r| r.starts_with("Not a single star")));
  assert_eq!(set.len(), 4, "got: {:?}", set);
}

#[test]
fn prolific_veteran_scenario() {
  let profile = profile_from_json(
    r#"{
      "login": "graybeard",
      "avatar_url": "https://avatars.example/graybeard",
      "name": null,
      "bio": "I build compilers.",
      "public_repos": 150,
      "followers": 5000,
      "following": 3,
      "created_at": "2013-01-01T00:00:00Z",
      "hireable": null
    }"#,
  );
  // Six starred, recently-pushed, non-fork repos so no list-derived rule fires.
  let repos: Vec<RepoSummary> = (0..6)
    .map(|i| {
      repos_from_json(&format!(
        r#"[{{"name": "compiler-{}", "language": "Elixir", "stargazers_count": 5, "fork": false,
             "description": null, "created_at": "2014-01-01T00:00:00Z", "pushed_at": "2025-06-01T00:00:00Z"}}]"#,
        i
      ))
      .remove(0)
    })
    .collect();

  let set = candidates(&profile, &repos, 1);
  assert!(set.iter().any(|r| r.contains("commitment to mediocrity")));
  assert!(set.iter().any(|r| r.contains("150 repos?!")));
  assert!(set.iter().any(|r| r.contains("too important to follow back")));
  assert_eq!(set.len(), 3, "got: {:?}", set);
}

#[test]
fn neutral_profile_yields_empty_set_and_caller_falls_back() {
  let profile = profile_from_json(
    r#"{
      "login": "beige",
      "avatar_url": "https://avatars.example/beige",
      "name": null,
      "bio": "I build compilers.",
      "public_repos": 10,
      "followers": 100,
      "following": 50,
      "created_at": "2020-01-01T00:00:00Z",
      "hireable": false
    }"#,
  );
  let repos: Vec<RepoSummary> = (0..10)
    .map(|i| {
      repos_from_json(&format!(
        r#"[{{"name": "compiler-{}", "language": "Kotlin", "stargazers_count": 2, "fork": false,
             "description": null, "created_at": "2021-01-01T00:00:00Z", "pushed_at": "2025-06-01T00:00:00Z"}}]"#,
        i
      ))
      .remove(0)
    })
    .collect();

  let mut rng = StdRng::seed_from_u64(1);
  let outcome = generate_roasts(&profile, &repos, now(), &mut rng);
  assert!(outcome.roasts.is_empty());

  // What roast-api does with an empty list.
  let mut roasts = outcome.roasts;
  if roasts.is_empty() {
    roasts.push(FALLBACK_ROAST.to_string());
  }
  assert_eq!(roasts, vec![FALLBACK_ROAST.to_string()]);
}

#[test]
fn output_never_exceeds_five_even_when_everything_fires() {
  let profile = profile_from_json(
    r#"{
      "login": "disaster",
      "avatar_url": "https://avatars.example/disaster",
      "name": null,
      "bio": "10x full stack entrepreneur, open source rockstar ninja, building the future of everything, one abandoned side project at a time, ask me about my newsletter and my podcast and my course",
      "public_repos": 150,
      "followers": 2,
      "following": 800,
      "created_at": "2012-01-01T00:00:00Z",
      "hireable": true
    }"#,
  );
  let repos = repos_from_json(
    r#"[
      {"name": "todo-app", "language": "PHP", "stargazers_count": 0, "fork": false,
       "description": null, "created_at": "2013-01-01T00:00:00Z", "pushed_at": "2020-01-01T00:00:00Z"},
      {"name": "my-portfolio", "language": "JavaScript", "stargazers_count": 0, "fork": false,
       "description": null, "created_at": "2013-01-01T00:00:00Z", "pushed_at": "2020-01-01T00:00:00Z"},
      {"name": "dotfiles", "language": "Python", "stargazers_count": 0, "fork": false,
       "description": null, "created_at": "2013-01-01T00:00:00Z", "pushed_at": "2020-01-01T00:00:00Z"},
      {"name": "awesome-stuff", "language": "Java", "stargazers_count": 0, "fork": false,
       "description": null, "created_at": "2013-01-01T00:00:00Z", "pushed_at": "2020-01-01T00:00:00Z"}
    ]"#,
  );

  let set = candidates(&profile, &repos, 1);
  assert!(set.len() > MAX_ROASTS, "scenario should overflow the cap: {:?}", set);

  let mut rng = StdRng::seed_from_u64(1);
  let outcome = generate_roasts(&profile, &repos, now(), &mut rng);
  assert_eq!(outcome.roasts.len(), MAX_ROASTS);
  // Sampled roasts come verbatim from the candidate set.
  assert!(outcome.roasts.iter().all(|r| set.contains(r)));
}

#[test]
fn identical_inputs_and_seed_give_identical_output() {
  let profile = profile_from_json(
    r#"{
      "login": "repeat",
      "avatar_url": "https://avatars.example/repeat",
      "name": null,
      "bio": null,
      "public_repos": 0,
      "followers": 0,
      "following": 0,
      "created_at": "2022-01-01T00:00:00Z",
      "hireable": null
    }"#,
  );
  let repos: Vec<RepoSummary> = Vec::new();

  let mut rng1 = StdRng::seed_from_u64(77);
  let mut rng2 = StdRng::seed_from_u64(77);
  let a = generate_roasts(&profile, &repos, now(), &mut rng1);
  let b = generate_roasts(&profile, &repos, now(), &mut rng2);
  assert_eq!(a.roasts, b.roasts);
}

#[test]
fn stats_block_matches_wire_contract() {
  let profile = profile_from_json(
    r#"{
      "login": "octocat",
      "avatar_url": "https://avatars.example/octocat",
      "name": null,
      "bio": "hello",
      "public_repos": 2,
      "followers": 3,
      "following": 4,
      "created_at": "2024-01-01T00:00:00Z",
      "hireable": null
    }"#,
  );
  let repos = repos_from_json(
    r#"[
      {"name": "a", "language": "Rust", "stargazers_count": 1, "fork": false,
       "description": null, "created_at": "2024-02-01T00:00:00Z", "pushed_at": "2025-06-01T00:00:00Z"},
      {"name": "b", "language": "Rust", "stargazers_count": 1, "fork": false,
       "description": null, "created_at": "2024-02-01T00:00:00Z", "pushed_at": "2025-06-01T00:00:00Z"}
    ]"#,
  );

  let mut rng = StdRng::seed_from_u64(1);
  let outcome = generate_roasts(&profile, &repos, now(), &mut rng);
  let json = serde_json::to_value(&outcome.stats).unwrap();
  assert_eq!(json["repos"], 2);
  assert_eq!(json["followers"], 3);
  assert_eq!(json["following"], 4);
  assert_eq!(json["topLanguages"], serde_json::json!(["Rust"]));
  assert_eq!(json["accountAge"], "1 year old");
  assert_eq!(json["bio"], "hello");
}
