//! GitRoast API
//!
//! HTTP service that turns a GitHub username into a handful of roast lines
//! plus summary stats. All the heuristics live in `roast-engine`; this crate
//! is the GitHub fetcher and the transport layer around it.

mod error;
mod github;
mod handlers;
mod state;
mod types;

pub use github::GithubClient;
pub use handlers::{health, roast};
pub use state::AppState;
