//! Minimal GitHub REST client: user profile + repository list.

use axum::http::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use roast_engine::{RepoSummary, UserProfile};

use crate::error::ApiError;

const API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = "git-roast";

/// Preconfigured client carrying the headers GitHub requires.
#[derive(Clone)]
pub struct GithubClient {
  http: Client,
}

impl GithubClient {
  pub fn new() -> Result<Self, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
      "Accept",
      HeaderValue::from_static("application/vnd.github.v3+json"),
    );
    headers.insert("User-Agent", HeaderValue::from_static(USER_AGENT));
    let http = Client::builder().default_headers(headers).build()?;
    Ok(Self { http })
  }

  /// Fetch the user profile. A 404 means the username doesn't resolve.
  pub async fn fetch_user(&self, username: &str) -> Result<UserProfile, ApiError> {
    let url = format!("{API_BASE}/users/{username}");
    let response = self.http.get(&url).send().await?;

    if response.status() == StatusCode::NOT_FOUND {
      return Err(ApiError::UserNotFound);
    }
    if !response.status().is_success() {
      return Err(ApiError::UpstreamStatus(response.status()));
    }

    Ok(response.json::<UserProfile>().await?)
  }

  /// Fetch up to 100 repositories, most recently updated first. Any failure
  /// degrades to an empty list so a profile-only roast still goes out.
  pub async fn fetch_repos(&self, username: &str) -> Vec<RepoSummary> {
    let url = format!("{API_BASE}/users/{username}/repos?per_page=100&sort=updated");
    let response = match self.http.get(&url).send().await {
      Ok(r) => r,
      Err(e) => {
        eprintln!("roast-api: repo fetch failed for {}: {}", username, e);
        return Vec::new();
      }
    };

    if !response.status().is_success() {
      eprintln!(
        "roast-api: repo fetch for {} returned {}",
        username,
        response.status()
      );
      return Vec::new();
    }

    match response.json::<Vec<RepoSummary>>().await {
      Ok(repos) => repos,
      Err(e) => {
        eprintln!("roast-api: repo list parse failed for {}: {}", username, e);
        Vec::new()
      }
    }
  }
}
