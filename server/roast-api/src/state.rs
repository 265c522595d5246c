//! Shared per-process state.

use crate::github::GithubClient;

pub struct AppState {
  pub github: GithubClient,
}
