use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;

use crate::auth::AuthEvent;
use crate::auth::IdentityProvider;
use crate::model::Session;
use crate::model::User;
use crate::notify::Toast;
use crate::routes::HOME_PATH;
use crate::subscription::Listeners;
use crate::subscription::Subscription;

/// Local, non-authoritative copy of the provider's session.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SessionState {
    /// Initial snapshot outstanding and no notification received yet.
    #[default]
    Pending,
    Ready(Option<Session>),
    /// The initial snapshot failed. Treated as signed out everywhere.
    Unavailable(String),
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Ready(session) => session.as_ref(),
            _ => None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.session().map(|session| &session.user)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SessionState::Pending)
    }
}

/// Result of the one-shot snapshot request, keeping "no session" apart from
/// "could not ask".
#[derive(Clone, Debug, PartialEq)]
pub enum SnapshotOutcome {
    Session(Session),
    NoSession,
    Failed(String),
}

impl From<Result<Option<Session>>> for SnapshotOutcome {
    fn from(value: Result<Option<Session>>) -> Self {
        match value {
            Ok(Some(session)) => SnapshotOutcome::Session(session),
            Ok(None) => SnapshotOutcome::NoSession,
            Err(e) => SnapshotOutcome::Failed(e.to_string()),
        }
    }
}

/// What the UI should do after a sign-out attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct SignOutReport {
    pub toast: Toast,
    pub redirect: Option<&'static str>,
}

struct MirrorInner {
    state: SessionState,
    // set by the first notification, after which snapshots are stale
    superseded: bool,
}

/// Mirrors the provider's session into local state. One mirror is shared by
/// every view so there is a single provider subscription per app.
pub struct SessionMirror<P: IdentityProvider> {
    provider: P,
    inner: Rc<RefCell<MirrorInner>>,
    watchers: Listeners<SessionState>,
    subscription: RefCell<Option<Subscription>>,
}

impl<P: IdentityProvider> SessionMirror<P> {
    /// Register with the provider's change stream. The snapshot is requested
    /// separately with `load_snapshot`, always after this registration.
    pub fn activate(provider: P) -> Self {
        let inner = Rc::new(RefCell::new(MirrorInner {
            state: SessionState::Pending,
            superseded: false,
        }));
        let watchers = Listeners::new();

        let subscription = {
            let inner = Rc::downgrade(&inner);
            let watchers = watchers.clone();
            provider.on_session_change(move |event: &AuthEvent| {
                if let Some(inner) = inner.upgrade() {
                    let state = record_notification(&inner, event);
                    watchers.emit(&state);
                }
            })
        };

        Self {
            provider,
            inner,
            watchers,
            subscription: RefCell::new(Some(subscription)),
        }
    }

    /// Ask the provider for the current session once and apply the answer
    /// unless a notification got here first.
    pub async fn load_snapshot(&self) -> bool {
        let outcome = SnapshotOutcome::from(self.provider.get_session().await);
        self.apply_snapshot(outcome)
    }

    /// Returns false when the snapshot was discarded as stale.
    pub fn apply_snapshot(&self, outcome: SnapshotOutcome) -> bool {
        let state = {
            let mut inner = self.inner.borrow_mut();
            if inner.superseded {
                log::debug!("session: snapshot arrived after a notification, ignoring it");
                return false;
            }
            inner.state = match outcome {
                SnapshotOutcome::Session(session) => SessionState::Ready(Some(session)),
                SnapshotOutcome::NoSession => SessionState::Ready(None),
                SnapshotOutcome::Failed(reason) => {
                    log::warn!("session: initial snapshot failed: {reason}");
                    SessionState::Unavailable(reason)
                }
            };
            inner.state.clone()
        };
        self.watchers.emit(&state);
        true
    }

    pub fn apply_notification(&self, event: &AuthEvent) {
        let state = record_notification(&self.inner, event);
        self.watchers.emit(&state);
    }

    pub fn state(&self) -> SessionState {
        self.inner.borrow().state.clone()
    }

    /// Observe every state change. Used to bridge into the UI's reactivity.
    pub fn watch(&self, callback: impl Fn(&SessionState) + 'static) -> Subscription {
        self.watchers.subscribe(callback)
    }

    /// Sign out through the provider. Local state is only changed by the
    /// notification the provider sends on success.
    pub async fn sign_out(&self) -> SignOutReport {
        match self.provider.sign_out().await {
            Ok(()) => SignOutReport {
                toast: Toast::success("Success", "Signed out successfully"),
                redirect: Some(HOME_PATH),
            },
            Err(e) => {
                log::error!("session: sign out failed: {e}");
                SignOutReport {
                    toast: Toast::error("Error", "Failed to sign out"),
                    redirect: None,
                }
            }
        }
    }

    /// Drop the provider subscription. Also happens when the mirror drops.
    pub fn deactivate(&self) {
        if let Some(subscription) = self.subscription.borrow_mut().take() {
            subscription.unsubscribe();
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

fn record_notification(inner: &RefCell<MirrorInner>, event: &AuthEvent) -> SessionState {
    log::debug!("session: {:?}", event.kind);
    let mut inner = inner.borrow_mut();
    inner.superseded = true;
    inner.state = SessionState::Ready(event.session.clone());
    inner.state.clone()
}
