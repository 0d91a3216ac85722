//! Upstream credential lookup.
//!
//! The API key is resolved at the point of use on every call, never cached,
//! so rotating `OPENAI_API_KEY` takes effect on the next request.

/// Environment variable holding the upstream bearer token.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Supplies the upstream API key. `None` means "not configured".
pub trait CredentialSource: Send + Sync {
    fn api_key(&self) -> Option<String>;
}

/// Reads the key from the process environment each time it is asked.
#[derive(Debug, Clone)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredential {
    fn default() -> Self {
        Self::new(OPENAI_API_KEY_VAR)
    }
}

impl CredentialSource for EnvCredential {
    fn api_key(&self) -> Option<String> {
        let key = std::env::var(&self.var).ok()?;
        let key = key.trim();
        (!key.is_empty()).then(|| key.to_string())
    }
}

/// Fixed credential for tests.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct StaticCredential(pub Option<String>);

#[cfg(test)]
impl CredentialSource for StaticCredential {
    fn api_key(&self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_credential_missing_var_is_none() {
        let source = EnvCredential::new("WINS_API_TEST_KEY_NEVER_SET");
        assert!(source.api_key().is_none());
    }

    #[test]
    fn test_env_credential_blank_value_counts_as_missing() {
        std::env::set_var("WINS_API_TEST_KEY_BLANK", "   ");
        let source = EnvCredential::new("WINS_API_TEST_KEY_BLANK");
        assert!(source.api_key().is_none());
        std::env::remove_var("WINS_API_TEST_KEY_BLANK");
    }

    #[test]
    fn test_env_credential_strips_surrounding_whitespace() {
        std::env::set_var("WINS_API_TEST_KEY_PADDED", " sk-padded\n");
        let source = EnvCredential::new("WINS_API_TEST_KEY_PADDED");
        assert_eq!(source.api_key().as_deref(), Some("sk-padded"));
        std::env::remove_var("WINS_API_TEST_KEY_PADDED");
    }

    #[test]
    fn test_env_credential_observes_rotation_without_rebuild() {
        let source = EnvCredential::new("WINS_API_TEST_KEY_ROTATION");

        std::env::set_var("WINS_API_TEST_KEY_ROTATION", "sk-first");
        assert_eq!(source.api_key().as_deref(), Some("sk-first"));

        std::env::set_var("WINS_API_TEST_KEY_ROTATION", "sk-second");
        assert_eq!(
            source.api_key().as_deref(),
            Some("sk-second"),
            "a rotated key must be visible on the next read"
        );

        std::env::remove_var("WINS_API_TEST_KEY_ROTATION");
        assert!(source.api_key().is_none());
    }
}
