use serde::Deserialize;
use serde::Serialize;

use super::User;

/// Refresh this many seconds before the provider's expiry.
pub const EXPIRY_MARGIN: u64 = 60;

/// Token bundle issued by the identity provider. Opaque apart from expiry
/// and the attached user.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Session {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub expires_in: u64,
    #[serde(default)]
    pub expires_at: Option<u64>,
    pub refresh_token: String,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl Session {
    /// The provider may omit `expires_at`; derive it from `expires_in` at
    /// the time the session was received.
    pub fn stamped(mut self, now: u64) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = Some(now.saturating_add(self.expires_in));
        }
        self
    }

    pub fn needs_refresh(&self, now: u64) -> bool {
        match self.expires_at {
            Some(expires_at) => now + EXPIRY_MARGIN >= expires_at,
            None => false,
        }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}
