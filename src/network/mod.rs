//! Request context runtime for server rendering.
//!
//! A [`NetworkManager`] wraps one incoming request (headers, cookies) and
//! collects what the render asks of the response (status, redirect, cookies,
//! headers). [`NetworkContext::provide`] makes it current for a render, and
//! the `use_*` hooks read and write it from anywhere inside.
//!
//! ```
//! use std::sync::Arc;
//!
//! use i18n_inject::network::{
//!     Header, NetworkContext, NetworkManager, NetworkOptions, use_accept_language, use_cookie,
//! };
//!
//! let manager = Arc::new(NetworkManager::new(
//!     NetworkOptions::default()
//!         .header(Header::AcceptLanguage, "de-CH, en;q=0.5")
//!         .header(Header::Cookie, "theme=dark"),
//! ));
//!
//! let (language, theme) = NetworkContext::provide(manager.clone(), || {
//!     let (theme, set_theme) = use_cookie("theme");
//!     set_theme.set("light");
//!     (use_accept_language(None)[0].code.clone(), theme)
//! });
//!
//! assert_eq!(language, "de");
//! assert_eq!(theme.as_deref(), Some("dark"));
//! assert_eq!(manager.extract().set_cookies, ["theme=light"]);
//! ```

mod context;
mod cookies;
mod header;
mod hooks;
mod locale;
mod manager;

pub use context::NetworkContext;
pub use cookies::{Cookie, EXPIRED_DATE, SameSite, parse_cookie_header};
pub use header::{Header, status};
pub use hooks::{
    CookieSetter, use_accept_language, use_cookie, use_network_manager, use_redirect,
    use_request_header, use_response_header, use_status,
};
pub use locale::{Locale, parse_accept_language};
pub use manager::{NetworkDetails, NetworkManager, NetworkOptions};
