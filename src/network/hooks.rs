//! Accessors for the current request, for code rendered inside a
//! [`NetworkContext`] provider.
//!
//! Every hook degrades gracefully without a provider: reads return nothing
//! (or the fallback) and writes are dropped.

use std::sync::Arc;

use super::context::NetworkContext;
use super::cookies::Cookie;
use super::header::Header;
use super::locale::{Locale, parse_accept_language};
use super::manager::NetworkManager;

pub fn use_network_manager() -> Option<Arc<NetworkManager>> {
    NetworkContext::current()
}

pub fn use_request_header(header: impl AsRef<str>) -> Option<String> {
    use_network_manager().and_then(|manager| manager.request_header(header))
}

/// Locales from the `Accept-Language` header, best first.
///
/// Returns `[fallback]` (or `[en]`) when there is no provider, no header,
/// or no valid entry in it.
pub fn use_accept_language(fallback: Option<Locale>) -> Vec<Locale> {
    let locales = use_request_header(Header::AcceptLanguage)
        .map(|header| parse_accept_language(&header))
        .unwrap_or_default();

    if locales.is_empty() {
        vec![fallback.unwrap_or_default()]
    } else {
        locales
    }
}

/// Writes one cookie through the manager that was current when it was made.
#[derive(Debug, Clone)]
pub struct CookieSetter {
    manager: Option<Arc<NetworkManager>>,
    name: String,
}

impl CookieSetter {
    pub fn set(&self, value: impl Into<String>) {
        self.set_with(Cookie::new(self.name.clone(), value));
    }

    /// Set the cookie with explicit attributes. The name is always this
    /// setter's.
    pub fn set_with(&self, mut cookie: Cookie) {
        if let Some(manager) = &self.manager {
            cookie.name = self.name.clone();
            manager.set_cookie(cookie);
        }
    }

    pub fn remove(&self) {
        if let Some(manager) = &self.manager {
            manager.remove_cookie(&self.name);
        }
    }
}

/// Current value of cookie `name` plus a setter for it.
pub fn use_cookie(name: &str) -> (Option<String>, CookieSetter) {
    let manager = use_network_manager();
    let value = manager.as_ref().and_then(|m| m.cookie(name));
    (
        value,
        CookieSetter {
            manager,
            name: name.to_string(),
        },
    )
}

pub fn use_status(code: u16) {
    if let Some(manager) = use_network_manager() {
        manager.add_status_code(code);
    }
}

pub fn use_redirect(url: impl Into<String>, status: Option<u16>) {
    if let Some(manager) = use_network_manager() {
        manager.redirect_to(url, status);
    }
}

pub fn use_response_header(name: impl AsRef<str>, value: impl Into<String>) {
    if let Some(manager) = use_network_manager() {
        manager.set_response_header(name, value);
    }
}
