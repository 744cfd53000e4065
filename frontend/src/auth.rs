//! Viewer authentication.

use crate::config::AuthConfig;
use axum::http::{HeaderMap, header::COOKIE};
use std::collections::HashSet;

/// Decides whether the viewer of a request is logged in.
pub trait Authenticator: Send + Sync {
    fn is_logged_in(&self, headers: &HeaderMap) -> bool;
}

/// Accepts requests carrying a known session token in a cookie.
#[derive(Debug, Clone)]
pub struct CookieSessions {
    cookie_name: String,
    sessions: HashSet<String>,
}

impl CookieSessions {
    pub fn new(cookie_name: impl Into<String>, sessions: impl IntoIterator<Item = String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            sessions: sessions.into_iter().collect(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.cookie_name.clone(), config.sessions.iter().cloned())
    }

    fn session_token<'a>(&self, headers: &'a HeaderMap) -> Option<&'a str> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.cookie_name)
            .map(|(_, value)| value)
    }
}

impl Authenticator for CookieSessions {
    fn is_logged_in(&self, headers: &HeaderMap) -> bool {
        self.session_token(headers)
            .is_some_and(|token| self.sessions.contains(token))
    }
}
