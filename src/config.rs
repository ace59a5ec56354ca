//! Application configuration

use crate::{EmpDirError, Result};
use chrono::Locale;
use reqwest::Url;
use std::time::Duration;

/// Delay between the last keystroke and the search request
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(400);

/// Environment variable holding the directory API base URL
pub const BASE_URL_ENV: &str = "EMPDIR_API_BASE_URL";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory API base URL, without trailing slash
    pub base_url: String,
    /// Debounce window for search-as-you-type
    pub debounce: Duration,
    /// Locale used to format dates on cards
    pub locale: Locale,
    /// UI redraw / message drain interval
    pub tick_rate: Duration,
}

impl AppConfig {
    /// Build a config for `base_url` with default settings
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            debounce: DEFAULT_DEBOUNCE,
            locale: Locale::en_US,
            tick_rate: Duration::from_millis(50),
        })
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

/// Validate a base URL and strip trailing slashes.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed)
        .map_err(|e| EmpDirError::InvalidBaseUrl(trimmed.to_string(), e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(EmpDirError::InvalidBaseUrl(
                trimmed.to_string(),
                format!("unsupported scheme '{}'", other),
            ))
        }
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(EmpDirError::InvalidBaseUrl(
            trimmed.to_string(),
            "base URL must not carry a query or fragment".to_string(),
        ));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Resolve a locale name such as `de_DE.UTF-8` or `fr_FR@euro`.
///
/// Encoding and modifier suffixes are ignored, `C`/`POSIX` map to `POSIX`.
pub fn parse_locale(name: &str) -> Option<Locale> {
    let base = name
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .replace('-', "_");
    match base.as_str() {
        "" => None,
        "C" | "POSIX" => Some(Locale::POSIX),
        other => Locale::try_from(other).ok(),
    }
}

/// Locale from an explicit name, then `LC_ALL`, `LC_TIME`, `LANG`, then `en_US`.
pub fn resolve_locale(explicit: Option<&str>) -> Locale {
    if let Some(name) = explicit {
        match parse_locale(name) {
            Some(locale) => return locale,
            None => tracing::warn!(locale = name, "unknown locale, falling back"),
        }
    }

    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .filter(|value| !value.is_empty())
        .find_map(|value| parse_locale(&value))
        .unwrap_or(Locale::en_US)
}
