//! Domain types for language resource loading.
//!
//! A language resource is an opaque key -> string mapping fetched from the
//! network. Two keys are reserved: `direction` selects the text flow for the
//! whole page and `lang_name` supplies the display label shown in the
//! language picker.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Reserved key: text flow direction (`ltr` or `rtl`).
pub const DIRECTION_KEY: &str = "direction";

/// Reserved key: display label for the language picker.
pub const LANG_NAME_KEY: &str = "lang_name";

/// Text flow direction declared by a language resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Left-to-right (the default when a resource is silent).
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl Direction {
    /// Parse the reserved `direction` value. Anything that is not exactly
    /// `rtl` falls back to [`Direction::Ltr`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "rtl" => Self::Rtl,
            _ => Self::Ltr,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// A fetched translation mapping, opaque except for the reserved keys.
///
/// The loader produces it; the applier only reads it. There is no mutation
/// API past construction.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct LanguageResource {
    entries: HashMap<String, String>,
}

impl LanguageResource {
    /// Build a resource from raw entries (used by tests and fixtures).
    #[must_use]
    pub fn from_entries(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Look up a translation by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Text flow direction, defaulting to left-to-right.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.get(DIRECTION_KEY)
            .map(Direction::parse)
            .unwrap_or_default()
    }

    /// Display label for the language: the resource's `lang_name` if
    /// present, else the language code upper-cased.
    #[must_use]
    pub fn label(&self, code: &str) -> String {
        self.get(LANG_NAME_KEY)
            .map(str::to_owned)
            .unwrap_or_else(|| code.to_uppercase())
    }

    /// Number of entries, reserved keys included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for LanguageResource {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Connection settings for the locale client.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Base URL the per-language resources hang off of; `<code>.json` is
    /// appended per request.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl LocaleConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8327/assets/lang/".to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
            user_agent: format!("vitrine/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Why a single load attempt failed.
///
/// The loader makes exactly one attempt per call; fallback policy belongs
/// to the caller. Variants map one-to-one onto the failure classes the
/// applier distinguishes when logging.
#[derive(Debug, Error)]
pub enum LoadFailure {
    /// The HTTP client itself could not be constructed.
    #[error("failed to construct HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The language code would not form a valid resource path.
    #[error("invalid language code {code:?}")]
    InvalidCode { code: String },

    /// The base URL or the joined resource URL failed to parse.
    #[error("invalid locale resource URL {url:?}: {source}")]
    BadUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Connect, timeout, or body-read failure.
    #[error("transport failure fetching locale {code:?}: {source}")]
    Transport {
        code: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("locale {code:?} fetch returned {status}")]
    Status {
        code: String,
        status: reqwest::StatusCode,
    },

    /// The body was not a JSON object of strings.
    #[error("malformed locale resource for {code:?}: {source}")]
    Parse {
        code: String,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(pairs: &[(&str, &str)]) -> LanguageResource {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn direction_defaults_to_ltr() {
        assert_eq!(resource(&[("hero_title", "Hi")]).direction(), Direction::Ltr);
        assert_eq!(resource(&[("direction", "ltr")]).direction(), Direction::Ltr);
        assert_eq!(
            resource(&[("direction", "sideways")]).direction(),
            Direction::Ltr
        );
    }

    #[test]
    fn direction_rtl_is_honored() {
        assert_eq!(resource(&[("direction", "rtl")]).direction(), Direction::Rtl);
    }

    #[test]
    fn label_prefers_lang_name() {
        assert_eq!(resource(&[("lang_name", "Español")]).label("es"), "Español");
    }

    #[test]
    fn label_falls_back_to_uppercased_code() {
        assert_eq!(resource(&[]).label("es"), "ES");
    }

    #[test]
    fn resource_deserializes_from_flat_json_object() {
        let json = r#"{"direction":"rtl","lang_name":"עברית","hero_title":"שלום"}"#;
        let resource: LanguageResource = serde_json::from_str(json).expect("valid resource");
        assert_eq!(resource.direction(), Direction::Rtl);
        assert_eq!(resource.get("hero_title"), Some("שלום"));
        assert_eq!(resource.len(), 3);
    }

    #[test]
    fn resource_rejects_non_string_values() {
        let json = r#"{"hero_title": 3}"#;
        assert!(serde_json::from_str::<LanguageResource>(json).is_err());
    }
}
