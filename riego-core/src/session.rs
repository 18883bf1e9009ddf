//! Session context.
//!
//! The session flag is a single token marker under [`AUTH_TOKEN_KEY`].
//! Components receive a [`Session`] instead of touching storage directly;
//! the store is read once on load and written only through `begin`/`end`.

use crate::config::LOGOUT_NOTICE_DELAY;
use crate::error::Result;
use crate::notice::Notice;
use crate::route::AppRoute;
use log::info;
use std::collections::HashMap;
use std::time::Duration;

/// Storage key of the session flag.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Key/value storage backing a session (browser local storage, a file, memory).
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-process store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// What happens after a confirmed logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignOut {
    /// Transient notice, dismissed after `delay`.
    pub notice: Notice,
    /// Route to show once `delay` has elapsed.
    pub redirect: AppRoute,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session<S: SessionStore> {
    store: S,
    token: Option<String>,
}

impl<S: SessionStore> Session<S> {
    /// Read the session flag from `store`.
    pub fn load(store: S) -> Self {
        let token = store.get(AUTH_TOKEN_KEY);
        Self { store, token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.token.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist a session flag.
    pub fn begin(&mut self, token: &str) -> Result<()> {
        self.store.set(AUTH_TOKEN_KEY, token)?;
        self.token = Some(token.to_string());
        Ok(())
    }

    /// Clear the session flag.
    pub fn end(&mut self) -> Result<()> {
        self.store.remove(AUTH_TOKEN_KEY)?;
        self.token = None;
        Ok(())
    }

    /// Resolve the logout confirmation prompt.
    ///
    /// Declined: nothing changes and `None` is returned. Confirmed: the flag
    /// is cleared and the caller shows the notice, then redirects after the delay.
    pub fn logout(&mut self, confirmed: bool) -> Result<Option<SignOut>> {
        if !confirmed {
            return Ok(None);
        }
        self.end()?;
        info!("Session flag cleared");
        Ok(Some(SignOut {
            notice: Notice::signed_out(),
            redirect: AppRoute::Login,
            delay: LOGOUT_NOTICE_DELAY,
        }))
    }
}
