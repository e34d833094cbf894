pub use crate::HostedIdentity;
pub use crate::IdentityConfig;
pub use crate::SessionMirror;
pub use crate::auth::*;
pub use crate::catalog::*;
pub use crate::http::SignUpOutcome;
pub use crate::model::*;
pub use crate::notify::*;
pub use crate::routes::*;
pub use crate::session::*;
pub use crate::subscription::Subscription;
pub use crate::timestamp;
