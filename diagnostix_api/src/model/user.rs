use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct UserMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// The subset of the identity provider's user record this front-end reads.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl User {
    /// Full name when the user set one, otherwise the email, otherwise the id.
    pub fn display_name(&self) -> &str {
        self.user_metadata
            .full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(full_name: Option<&str>, email: Option<&str>) -> User {
        User {
            id: "8d1c".to_string(),
            email: email.map(str::to_string),
            user_metadata: UserMetadata {
                full_name: full_name.map(str::to_string),
            },
            created_at: None,
        }
    }

    #[test]
    fn display_name_fallbacks() {
        assert_eq!(user(Some("Ada"), Some("a@b.com")).display_name(), "Ada");
        assert_eq!(user(Some("  "), Some("a@b.com")).display_name(), "a@b.com");
        assert_eq!(user(None, Some("a@b.com")).display_name(), "a@b.com");
        assert_eq!(user(None, None).display_name(), "8d1c");
    }

    #[test]
    fn parses_provider_user() {
        let user: User = serde_json::from_str(
            r#"{"id":"u1","aud":"authenticated","email":"a@b.com","user_metadata":{"full_name":"Ada L"},"app_metadata":{}}"#,
        )
        .unwrap();
        assert_eq!(user.display_name(), "Ada L");

        let bare: User = serde_json::from_str(r#"{"id":"u2"}"#).unwrap();
        assert_eq!(bare.email, None);
        assert_eq!(bare.user_metadata, UserMetadata::default());
    }
}
