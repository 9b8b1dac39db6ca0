//! Runtime configuration, read from the environment at boot.

use crate::error::MaildeckError;

/// Default backend origin for local development, matching the backend's
/// default FastAPI port.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Backend API origin, e.g. `https://backend.example.com`. `None` when
    /// neither `API_URL` nor `BACKEND_URL` is set.
    pub backend_url: Option<String>,
    /// Port the web server binds to (`PORT`, default 3000).
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment. `.env` files are honored
    /// when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let backend_url = std::env::var("API_URL")
            .or_else(|_| std::env::var("BACKEND_URL"))
            .ok()
            .map(|u| u.trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty());

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { backend_url, port }
    }

    /// Backend origin for the proxy relay. Errors when unconfigured — the
    /// relay never falls back to a default origin.
    pub fn backend_origin(&self) -> Result<&str, MaildeckError> {
        self.backend_url.as_deref().ok_or_else(|| {
            MaildeckError::Config("API_URL is not set".to_string())
        })
    }

    /// Backend base URL for the typed client, falling back to the local
    /// development default.
    pub fn client_base_url(&self) -> &str {
        self.backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL)
    }

    /// Validate that the configured backend URL, if any, parses as a URL.
    pub fn validate(&self) -> Result<(), MaildeckError> {
        if let Some(u) = &self.backend_url {
            url::Url::parse(u)
                .map_err(|e| MaildeckError::Config(format!("invalid API_URL {u:?}: {e}")))?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { backend_url: None, port: DEFAULT_PORT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_origin_requires_configuration() {
        let config = Config::default();
        assert!(config.backend_origin().is_err());
        assert_eq!(config.client_base_url(), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn configured_origin_is_used_verbatim() {
        let config = Config {
            backend_url: Some("https://backend.example.com".into()),
            port: 3000,
        };
        assert_eq!(config.backend_origin().unwrap(), "https://backend.example.com");
        assert_eq!(config.client_base_url(), "https://backend.example.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_url_fails_validation() {
        let config = Config { backend_url: Some("not a url".into()), port: 3000 };
        assert!(config.validate().is_err());
    }
}
