use serde::Deserialize;
use serde::Serialize;

use crate::model::Session;
use crate::model::User;
use crate::model::UserMetadata;

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PasswordCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub data: UserMetadata,
}

/// Sign-up returns a session when the account is confirmed immediately,
/// or just the user when an e-mail confirmation is pending.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum SignUpResponse {
    Session(Session),
    User(User),
}

#[derive(Clone, Debug, PartialEq)]
pub enum SignUpOutcome {
    SignedIn(Session),
    ConfirmationSent(User),
}

/// Error body shapes used by the identity service across its endpoints.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct ProviderError {
    pub error: Option<String>,
    pub error_description: Option<String>,
    pub msg: Option<String>,
    pub message: Option<String>,
}

impl ProviderError {
    /// Best human readable message in `body`, or the raw body when it isn't
    /// a recognised error document.
    pub fn message_from(body: &str) -> String {
        match serde_json::from_str::<ProviderError>(body) {
            Ok(e) => e
                .error_description
                .or(e.msg)
                .or(e.message)
                .or(e.error)
                .unwrap_or_else(|| body.to_string()),
            Err(_) => body.to_string(),
        }
    }
}
