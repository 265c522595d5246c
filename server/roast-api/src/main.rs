//! Binary entrypoint for the roast API.

use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use roast_api::{AppState, GithubClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let port: u16 = std::env::var("PORT")
    .unwrap_or_else(|_| "5005".into())
    .parse()
    .expect("PORT must be a valid u16");

  let github = GithubClient::new()?;
  let state = Arc::new(AppState { github });

  let app = Router::new()
    .route("/health", get(roast_api::health))
    .route("/api/roast", get(roast_api::roast))
    .layer(CorsLayer::permissive())
    .with_state(state);

  let addr = SocketAddr::from(([127, 0, 0, 1], port));
  println!("roast-api listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
