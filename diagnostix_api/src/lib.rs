pub mod auth;
pub mod catalog;
pub mod config;
pub mod http;
pub mod model;
pub mod notify;
pub mod prelude;
pub mod routes;
pub mod session;
pub mod subscription;

#[cfg(test)]
mod tests;

pub use config::IdentityConfig;
pub use http::HostedIdentity;
pub use session::SessionMirror;

#[cfg(debug_assertions)]
pub const AUTH_URL: &'static str = "http://127.0.0.1:54321";
#[cfg(not(debug_assertions))]
pub const AUTH_URL: &'static str = "https://auth.diagnostix.app";

/// Unix time in seconds. Session expiry is compared against this.
pub fn timestamp() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() / 1000.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_secs()
    }
}
