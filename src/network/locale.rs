use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// A language range from an `Accept-Language` header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Locale {
    /// Primary language subtag, e.g. `fr`, or `*`.
    pub code: String,
    pub script: Option<String>,
    pub region: Option<String>,
    pub quality: f64,
}

impl Locale {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            script: None,
            region: None,
            quality: 1.0,
        }
    }

    #[must_use]
    pub fn with_quality(mut self, quality: f64) -> Self {
        self.quality = quality;
        self
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en")
    }
}

// tag (`code`, `code-region` or `code-script-region`, or `*`) plus optional q
static LANGUAGE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([A-Za-z]{1,8})(?:-([A-Za-z0-9]{1,8}))?(?:-([A-Za-z0-9]{1,8}))?|(\*))\s*(?:;\s*q\s*=\s*([01](?:\.[0-9]{0,3})?))?$")
        .expect("language range pattern is valid")
});

/// Parse an `Accept-Language` header into locales ordered by quality.
///
/// Entries with equal quality keep their header order. Malformed entries are
/// skipped.
///
/// ```
/// use i18n_inject::network::parse_accept_language;
///
/// let codes: Vec<String> = parse_accept_language("fr-CH, fr;q=0.9, en;q=0.8, de;q=0.7, *;q=0.5")
///     .into_iter()
///     .map(|locale| locale.code)
///     .collect();
/// assert_eq!(codes, ["fr", "fr", "en", "de", "*"]);
/// ```
pub fn parse_accept_language(header: &str) -> Vec<Locale> {
    let mut locales: Vec<Locale> = header
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(parse_language_range)
        .collect();

    // sort_by is stable
    locales.sort_by(|a, b| {
        b.quality
            .partial_cmp(&a.quality)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    locales
}

fn parse_language_range(part: &str) -> Option<Locale> {
    let captures = LANGUAGE_RANGE.captures(part)?;
    let quality = match captures.get(5) {
        Some(q) => q.as_str().parse::<f64>().ok()?,
        None => 1.0,
    };
    if quality > 1.0 {
        return None;
    }

    if captures.get(4).is_some() {
        return Some(Locale::new("*").with_quality(quality));
    }

    let code = captures.get(1)?.as_str().to_string();
    let second = captures.get(2).map(|m| m.as_str().to_string());
    let third = captures.get(3).map(|m| m.as_str().to_string());
    // Two subtags are language-region; three are language-script-region
    let (script, region) = match (second, third) {
        (Some(script), Some(region)) => (Some(script), Some(region)),
        (region, None) => (None, region),
        (None, Some(_)) => return None,
    };

    Some(Locale {
        code,
        script,
        region,
        quality,
    })
}
