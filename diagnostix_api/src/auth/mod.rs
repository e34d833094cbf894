mod persistence;

pub use persistence::*;

use anyhow::Result;

use crate::model::Session;
use crate::subscription::Subscription;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthChangeEvent {
    InitialSession,
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
}

/// A session change notification. `session` is the provider's complete
/// view after the change, never a delta.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthEvent {
    pub kind: AuthChangeEvent,
    pub session: Option<Session>,
}

impl AuthEvent {
    pub fn new(kind: AuthChangeEvent, session: Option<Session>) -> Self {
        Self { kind, session }
    }

    pub fn signed_out() -> Self {
        Self::new(AuthChangeEvent::SignedOut, None)
    }
}

/// What the front-end needs from an external identity service.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider: Clone + 'static {
    /// One-shot read of the current session.
    async fn get_session(&self) -> Result<Option<Session>>;

    /// Register for session change notifications. The callback stays
    /// registered until the returned `Subscription` is dropped.
    fn on_session_change(&self, callback: impl Fn(&AuthEvent) + 'static) -> Subscription;

    async fn sign_out(&self) -> Result<()>;
}
