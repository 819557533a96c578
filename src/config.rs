use std::env;

/// Path of the chat endpoint, appended to the configured base URL.
pub const API_PATH: &str = "/api/dify-compat/v1/chat-messages";

// Placeholders; real deployments set DIFY_BASE_URL / DIFY_API_KEY.
const DEFAULT_BASE_URL: &str = "https://dify.local.example";
const DEFAULT_API_KEY: &str = "app-replace-me";

#[derive(Clone, Debug)]
pub struct Config {
    base_url: String,
    api_key: String,
}

impl Config {
    /// Creates a config from explicit values. A single trailing slash on the
    /// base URL is stripped so path concatenation never doubles a `/`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Reads `DIFY_BASE_URL` and `DIFY_API_KEY`, falling back to the
    /// built-in placeholders when unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            env::var("DIFY_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            env::var("DIFY_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string()),
        )
    }

    /// Full URL of the chat-messages endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, API_PATH)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = Config::new("https://host/", "key");
        assert_eq!(
            config.endpoint(),
            "https://host/api/dify-compat/v1/chat-messages"
        );
    }

    #[test]
    fn bare_base_url_is_unchanged() {
        let config = Config::new("https://host", "key");
        assert_eq!(
            config.endpoint(),
            "https://host/api/dify-compat/v1/chat-messages"
        );
    }

    #[test]
    fn only_one_trailing_slash_is_removed() {
        let config = Config::new("https://host//", "key");
        assert_eq!(config.base_url(), "https://host/");
    }
}
