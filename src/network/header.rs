use std::fmt;

/// Well-known HTTP header names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Header {
    Accept,
    AcceptEncoding,
    AcceptLanguage,
    Authorization,
    CacheControl,
    ContentLength,
    ContentSecurityPolicy,
    ContentType,
    Cookie,
    Host,
    Location,
    Referer,
    SetCookie,
    UserAgent,
    XForwardedFor,
    XForwardedHost,
    XForwardedProto,
}

impl Header {
    pub fn as_str(self) -> &'static str {
        match self {
            Header::Accept => "Accept",
            Header::AcceptEncoding => "Accept-Encoding",
            Header::AcceptLanguage => "Accept-Language",
            Header::Authorization => "Authorization",
            Header::CacheControl => "Cache-Control",
            Header::ContentLength => "Content-Length",
            Header::ContentSecurityPolicy => "Content-Security-Policy",
            Header::ContentType => "Content-Type",
            Header::Cookie => "Cookie",
            Header::Host => "Host",
            Header::Location => "Location",
            Header::Referer => "Referer",
            Header::SetCookie => "Set-Cookie",
            Header::UserAgent => "User-Agent",
            Header::XForwardedFor => "X-Forwarded-For",
            Header::XForwardedHost => "X-Forwarded-Host",
            Header::XForwardedProto => "X-Forwarded-Proto",
        }
    }
}

impl AsRef<str> for Header {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common status codes used by the runtime.
pub mod status {
    pub const OK: u16 = 200;
    pub const MOVED_PERMANENTLY: u16 = 301;
    pub const FOUND: u16 = 302;
    pub const NOT_FOUND: u16 = 404;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}
