use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use super::cookies::{Cookie, parse_cookie_header};
use super::header::{Header, status};

/// Request data a [`NetworkManager`] is created from.
#[derive(Debug, Clone, Default)]
pub struct NetworkOptions {
    /// Request headers. Names are matched case-insensitively.
    pub headers: HashMap<String, String>,
    /// Request cookies. When `None`, they are parsed from the `Cookie` header.
    pub cookies: Option<HashMap<String, String>>,
}

impl NetworkOptions {
    #[must_use]
    pub fn header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.as_ref().to_string(), value.into());
        self
    }

    #[must_use]
    pub fn cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }
}

/// What the server needs to finish the response after a render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDetails {
    /// Highest status code requested during the render.
    pub status: Option<u16>,
    pub headers: BTreeMap<String, String>,
    /// `Set-Cookie` header values, sorted by cookie name.
    pub set_cookies: Vec<String>,
    pub redirect_url: Option<String>,
}

#[derive(Debug, Default)]
struct ResponseState {
    /// Current cookie values: request cookies overlaid with those set since.
    cookies: HashMap<String, String>,
    set_cookies: BTreeMap<String, Cookie>,
    status_codes: Vec<u16>,
    redirect_url: Option<String>,
    headers: BTreeMap<String, String>,
}

/// Per-request network state shared by everything rendered for one request.
///
/// Request headers and cookies are read-only; cookies, status codes,
/// redirects and response headers written during the render accumulate until
/// [`NetworkManager::extract`] is called.
#[derive(Debug)]
pub struct NetworkManager {
    /// Keyed by lowercased header name.
    request_headers: HashMap<String, String>,
    request_cookies: HashMap<String, String>,
    state: Mutex<ResponseState>,
}

impl Default for NetworkManager {
    fn default() -> Self {
        Self::new(NetworkOptions::default())
    }
}

impl NetworkManager {
    pub fn new(options: NetworkOptions) -> Self {
        let request_headers: HashMap<String, String> = options
            .headers
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value))
            .collect();

        let request_cookies = options.cookies.unwrap_or_else(|| {
            request_headers
                .get(&Header::Cookie.as_str().to_ascii_lowercase())
                .map(|header| parse_cookie_header(header))
                .unwrap_or_default()
        });

        Self {
            request_headers,
            state: Mutex::new(ResponseState {
                cookies: request_cookies.clone(),
                ..ResponseState::default()
            }),
            request_cookies,
        }
    }

    fn state(&self) -> MutexGuard<'_, ResponseState> {
        // State stays consistent even if a render panicked mid-update
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn request_header(&self, name: impl AsRef<str>) -> Option<String> {
        self.request_headers
            .get(&name.as_ref().to_ascii_lowercase())
            .cloned()
    }

    pub fn cookie(&self, name: &str) -> Option<String> {
        self.state().cookies.get(name).cloned()
    }

    pub fn cookies(&self) -> HashMap<String, String> {
        self.state().cookies.clone()
    }

    pub fn set_cookie(&self, cookie: Cookie) {
        let mut state = self.state();
        state
            .cookies
            .insert(cookie.name.clone(), cookie.value.clone());
        state.set_cookies.insert(cookie.name.clone(), cookie);
    }

    pub fn remove_cookie(&self, name: &str) {
        let mut state = self.state();
        state.cookies.remove(name);
        state
            .set_cookies
            .insert(name.to_string(), Cookie::expired(name));
    }

    pub fn add_status_code(&self, code: u16) {
        self.state().status_codes.push(code);
    }

    /// Redirect to `url` with `status` (302 when `None`).
    pub fn redirect_to(&self, url: impl Into<String>, status: Option<u16>) {
        let mut state = self.state();
        state.redirect_url = Some(url.into());
        state.status_codes.push(status.unwrap_or(status::FOUND));
    }

    pub fn set_response_header(&self, name: impl AsRef<str>, value: impl Into<String>) {
        self.state()
            .headers
            .insert(name.as_ref().to_string(), value.into());
    }

    /// Snapshot of everything written during the render.
    pub fn extract(&self) -> NetworkDetails {
        let state = self.state();
        let mut headers = state.headers.clone();
        if let Some(url) = &state.redirect_url {
            headers.insert(Header::Location.as_str().to_string(), url.clone());
        }

        NetworkDetails {
            status: state.status_codes.iter().copied().max(),
            headers,
            set_cookies: state
                .set_cookies
                .values()
                .map(Cookie::to_set_cookie_header)
                .collect(),
            redirect_url: state.redirect_url.clone(),
        }
    }

    /// Forget everything written during the render, keeping the request.
    pub fn reset(&self) {
        *self.state() = ResponseState {
            cookies: self.request_cookies.clone(),
            ..ResponseState::default()
        };
    }
}
