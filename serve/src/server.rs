use std::path::Path;
use std::path::PathBuf;

use anyhow::Result;
use axum::Router;
use axum::extract::Request;
use axum::middleware;
use axum::middleware::Next;
use axum::response::Response;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::services::ServeFile;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST: &'static str = "./dist";

#[derive(Clone, Debug, PartialEq)]
pub struct ServeConfig {
    pub port: u16,
    pub dist: PathBuf,
}

impl ServeConfig {
    /// Resolve the port and bundle directory, refusing to start without an
    /// `index.html` to fall back to.
    pub fn from_parts(port: Option<String>, dist: Option<String>) -> Result<Self> {
        let port = match port {
            Some(port) => match port.parse() {
                Ok(port) => port,
                Err(_) => anyhow::bail!("invalid port \"{port}\""),
            },
            None => DEFAULT_PORT,
        };
        let dist = PathBuf::from(dist.unwrap_or(DEFAULT_DIST.to_string()));
        if !dist.join("index.html").is_file() {
            anyhow::bail!(
                "no index.html in bundle directory \"{}\"",
                dist.display()
            );
        }
        Ok(Self { port, dist })
    }
}

/// Files from `dist` by path; anything else gets `index.html` so the
/// client-side router can resolve it.
pub fn build_server(dist: &Path) -> Router {
    let spa = ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html")));
    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(spa)
        .layer(middleware::from_fn(log_request))
}

async fn healthz() -> &'static str {
    "ok"
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    log::info!("{method} {path} {}", response.status().as_u16());
    response
}
