//! Client configuration and timing constants.

use std::time::Duration;

/// Base URL of the calculation service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Path of the calculation endpoint.
pub const CALCULATE_PATH: &str = "/api/riego/calcular";

/// How long the sign-out notice stays up before returning to the login view.
pub const LOGOUT_NOTICE_DELAY: Duration = Duration::from_millis(2000);

/// Where to send calculation requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub endpoint: String,
    /// Request timeout. Native only; the browser fetch has none.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: CALCULATE_PATH.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Configuration baked in at build time (`RIEGO_API_URL`), for the web app.
    pub fn from_build_env() -> Self {
        match option_env!("RIEGO_API_URL") {
            Some(url) if !url.is_empty() => Self::with_base_url(url),
            _ => Self::default(),
        }
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the calculation endpoint.
    pub fn calculate_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.endpoint.starts_with('/') {
            format!("{}{}", base, self.endpoint)
        } else {
            format!("{}/{}", base, self.endpoint)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        assert_eq!(
            ClientConfig::default().calculate_url(),
            "http://127.0.0.1:8000/api/riego/calcular"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ClientConfig::with_base_url("https://riego.example.org/");
        assert_eq!(
            config.calculate_url(),
            "https://riego.example.org/api/riego/calcular"
        );
    }

    #[test]
    fn test_relative_endpoint() {
        let config = ClientConfig {
            endpoint: "calcular".to_string(),
            ..ClientConfig::with_base_url("http://localhost:9000/api/riego")
        };
        assert_eq!(config.calculate_url(), "http://localhost:9000/api/riego/calcular");
    }
}
