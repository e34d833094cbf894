mod api;
mod types;

pub use api::HostedIdentity;
pub use types::*;
