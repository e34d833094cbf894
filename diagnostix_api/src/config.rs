use anyhow::Result;

use crate::AUTH_URL;

/// Location and public key of the hosted identity service.
///
/// Browser builds have no process environment, so overrides are read at
/// compile time from `DIAGNOSTIX_AUTH_URL` and `DIAGNOSTIX_AUTH_KEY`.
#[derive(Clone, Debug, PartialEq)]
pub struct IdentityConfig {
    pub url: String,
    pub anon_key: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            url: option_env!("DIAGNOSTIX_AUTH_URL")
                .unwrap_or(AUTH_URL)
                .trim_end_matches('/')
                .to_string(),
            anon_key: option_env!("DIAGNOSTIX_AUTH_KEY")
                .unwrap_or_default()
                .to_string(),
        }
    }
}

impl IdentityConfig {
    pub fn new(url: &str, anon_key: &str) -> Result<Self> {
        let url = url.trim().trim_end_matches('/');
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            anyhow::bail!("identity url must be http(s), got \"{url}\"");
        }
        Ok(Self {
            url: url.to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::IdentityConfig;

    #[test]
    fn normalizes_url() {
        let config = IdentityConfig::new(" https://id.example.com/ ", "anon").unwrap();
        assert_eq!(config.url, "https://id.example.com");
        assert_eq!(
            config.endpoint("/token?grant_type=password"),
            "https://id.example.com/auth/v1/token?grant_type=password"
        );
    }

    #[test]
    fn rejects_non_http_url() {
        let e = IdentityConfig::new("ftp://id.example.com", "anon").unwrap_err();
        assert_eq!(
            e.to_string(),
            "identity url must be http(s), got \"ftp://id.example.com\""
        );
    }
}
