use std::rc::Rc;

use anyhow::Result;
use reqwest::RequestBuilder;
use reqwest::Response;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::types::*;
use crate::IdentityConfig;
use crate::auth::*;
use crate::model::*;
use crate::subscription::Listeners;
use crate::subscription::Subscription;
use crate::timestamp;

/// Client for the hosted identity service. Clones share the same
/// persisted session and the same listener list.
#[derive(Clone)]
pub struct HostedIdentity {
    pub config: IdentityConfig,
    client: reqwest::Client,
    persistence: Rc<dyn SessionPersistence>,
    listeners: Listeners<AuthEvent>,
}

impl std::fmt::Debug for HostedIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostedIdentity")
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl HostedIdentity {
    pub fn new(config: IdentityConfig, persistence: Rc<dyn SessionPersistence>) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            persistence,
            listeners: Listeners::new(),
        }
    }

    /// The persisted session, without touching the network.
    pub fn current_session(&self) -> Option<Session> {
        self.persistence.load()
    }

    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session> {
        let response = self
            .post("token?grant_type=password")
            .json(&PasswordCredentials {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        let session: Session = read_json(response).await?;
        self.store(session, AuthChangeEvent::SignedIn)
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: Option<String>,
    ) -> Result<SignUpOutcome> {
        let response = self
            .post("signup")
            .json(&SignUpRequest {
                email: email.to_string(),
                password: password.to_string(),
                data: UserMetadata { full_name },
            })
            .send()
            .await?;
        match read_json(response).await? {
            SignUpResponse::Session(session) => Ok(SignUpOutcome::SignedIn(
                self.store(session, AuthChangeEvent::SignedIn)?,
            )),
            SignUpResponse::User(user) => Ok(SignUpOutcome::ConfirmationSent(user)),
        }
    }

    async fn refresh(&self, session: &Session) -> Result<Session> {
        let response = self
            .post("token?grant_type=refresh_token")
            .json(&RefreshRequest {
                refresh_token: session.refresh_token.clone(),
            })
            .send()
            .await?;
        let session: Session = read_json(response).await?;
        self.store(session, AuthChangeEvent::TokenRefreshed)
    }

    fn store(&self, session: Session, kind: AuthChangeEvent) -> Result<Session> {
        let session = session.stamped(timestamp());
        self.persistence.save(&session)?;
        log::debug!("identity: {kind:?} for user {}", session.user.id);
        self.listeners.emit(&AuthEvent::new(kind, Some(session.clone())));
        Ok(session)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client
            .post(self.config.endpoint(path))
            .header("apikey", &self.config.anon_key)
    }
}

impl IdentityProvider for HostedIdentity {
    async fn get_session(&self) -> Result<Option<Session>> {
        let Some(session) = self.persistence.load() else {
            return Ok(None);
        };
        if !session.needs_refresh(timestamp()) {
            return Ok(Some(session));
        }
        match self.refresh(&session).await {
            Ok(session) => Ok(Some(session)),
            // transport failure, the stored refresh token may still be good
            Err(e) if e.downcast_ref::<reqwest::Error>().is_some() => {
                log::warn!("identity: refresh request failed, keeping session: {e}");
                Err(e)
            }
            Err(e) => {
                log::warn!("identity: dropping session that failed to refresh: {e}");
                self.persistence.clear();
                Err(e)
            }
        }
    }

    fn on_session_change(&self, callback: impl Fn(&AuthEvent) + 'static) -> Subscription {
        self.listeners.subscribe(callback)
    }

    async fn sign_out(&self) -> Result<()> {
        if let Some(session) = self.persistence.load() {
            let response = self
                .post("logout")
                .header("Authorization", session.bearer())
                .send()
                .await?;
            let status = response.status();
            // the token is already unknown to the service
            let already_gone = status == StatusCode::UNAUTHORIZED || status == StatusCode::NOT_FOUND;
            if !status.is_success() && !already_gone {
                anyhow::bail!("{}", ProviderError::message_from(&response.text().await?));
            }
        }
        self.persistence.clear();
        self.listeners.emit(&AuthEvent::signed_out());
        Ok(())
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if response.status().is_success() {
        Ok(response.json().await?)
    } else {
        anyhow::bail!("{}", ProviderError::message_from(&response.text().await?));
    }
}
