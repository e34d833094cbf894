use std::rc::Rc;

use anyhow::Result;
use dioxus::prelude::*;
use gloo_storage::LocalStorage;
use gloo_storage::Storage;

use diagnostix_api::prelude::*;

const SESSION_LOCALSTORAGE: &'static str = "diagnostix.auth.session";

/// Keeps the provider session in browser local storage across reloads.
pub struct BrowserStorage;

impl SessionPersistence for BrowserStorage {
    fn load(&self) -> Option<Session> {
        LocalStorage::get(SESSION_LOCALSTORAGE).ok()
    }

    fn save(&self, session: &Session) -> Result<()> {
        LocalStorage::set(SESSION_LOCALSTORAGE, session)?;
        Ok(())
    }

    fn clear(&self) {
        LocalStorage::delete(SESSION_LOCALSTORAGE);
    }
}

/// The app-wide session mirror and the signal it writes into. Every view
/// reads this one store instead of subscribing to the provider itself.
#[derive(Clone)]
pub struct AppSession {
    pub state: Signal<SessionState>,
    pub mirror: Rc<SessionMirror<HostedIdentity>>,
    _watch: Rc<Subscription>,
}

impl AppSession {
    pub fn identity(&self) -> HostedIdentity {
        self.mirror.provider().clone()
    }
}

/// Create the shared session store at the root of the app. The provider
/// listener is registered here, before the snapshot task is spawned.
pub fn use_session_provider() -> AppSession {
    let state = use_signal(SessionState::default);
    let session = use_context_provider(move || {
        let identity = HostedIdentity::new(IdentityConfig::default(), Rc::new(BrowserStorage));
        let mirror = Rc::new(SessionMirror::activate(identity));
        let watch = mirror.watch(move |next| {
            let mut state = state;
            state.set(next.clone());
        });
        AppSession {
            state,
            mirror,
            _watch: Rc::new(watch),
        }
    });

    let mirror = session.mirror.clone();
    use_hook(move || {
        spawn(async move {
            mirror.load_snapshot().await;
        });
    });

    session
}

pub fn use_session() -> AppSession {
    use_context::<AppSession>()
}
