//! Session gate credentials.
//!
//! A single fixed identifier/secret pair compared in plaintext, exact and
//! case-sensitive. No hashing, lockout or rate limiting.

use crate::error::{Result, RiegoError};
use crate::route::AppRoute;
use log::{info, warn};

pub const DEFAULT_IDENTIFIER: &str = "admin@example.com";
pub const DEFAULT_SECRET: &str = "123456";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    identifier: String,
    secret: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_IDENTIFIER, DEFAULT_SECRET)
    }
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn matches(&self, identifier: &str, secret: &str) -> bool {
        self.identifier == identifier && self.secret == secret
    }

    /// Check a login attempt and return the route to show next.
    ///
    /// Does not touch the session flag.
    pub fn authenticate(&self, identifier: &str, secret: &str) -> Result<AppRoute> {
        if self.matches(identifier, secret) {
            info!("Login accepted for {}", identifier);
            Ok(AppRoute::Home)
        } else {
            warn!("Login rejected for {:?}", identifier);
            Err(RiegoError::InvalidCredentials)
        }
    }
}
