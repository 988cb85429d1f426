//! Language resource fetching for Vitrine.
//!
//! The page's translations live on the network as one JSON document per
//! language (`<base_url>/<code>.json`), each a flat string-to-string map
//! with two reserved keys (`direction`, `lang_name`). This crate performs
//! a single fetch-and-parse attempt per call and reports failures as typed
//! [`LoadFailure`] values; it never retries and carries no fallback policy.
//! Which language to try next on failure is the caller's decision.
//!
//! # Usage
//!
//! ```ignore
//! use vitrine_locales::{LocaleClient, LocaleConfig};
//!
//! let client = LocaleClient::new(&LocaleConfig::default())?;
//! let resource = client.load("es").await?;
//! assert_eq!(resource.label("es"), "Español");
//! ```

mod types;

use url::Url;

pub use types::{
    DIRECTION_KEY, Direction, LANG_NAME_KEY, LanguageResource, LoadFailure, LocaleConfig,
};

/// HTTP client for language resources.
///
/// Holds a connection pool and the resolved base URL. Cheap to clone.
#[derive(Debug, Clone)]
pub struct LocaleClient {
    http: reqwest::Client,
    base_url: Url,
    timeout: std::time::Duration,
}

impl LocaleClient {
    /// Build a client from connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`LoadFailure::BadUrl`] when the base URL does not parse and
    /// [`LoadFailure::Client`] when the HTTP client cannot be constructed.
    pub fn new(config: &LocaleConfig) -> Result<Self, LoadFailure> {
        // A base URL without a trailing slash would drop its last path
        // segment on join.
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).map_err(|source| LoadFailure::BadUrl {
            url: config.base_url.clone(),
            source,
        })?;

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(LoadFailure::Client)?;

        Ok(Self {
            http,
            base_url,
            timeout: config.timeout,
        })
    }

    /// Fetch and parse the resource for one language code.
    ///
    /// Exactly one network attempt; suspension only on the I/O wait.
    ///
    /// # Errors
    ///
    /// - [`LoadFailure::InvalidCode`] for codes that would escape the
    ///   resource path
    /// - [`LoadFailure::Transport`] for connect/timeout/body failures
    /// - [`LoadFailure::Status`] for non-2xx responses
    /// - [`LoadFailure::Parse`] when the body is not a flat string map
    pub async fn load(&self, code: &str) -> Result<LanguageResource, LoadFailure> {
        let url = self.resource_url(code)?;

        let response = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|source| LoadFailure::Transport {
                code: code.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadFailure::Status {
                code: code.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| LoadFailure::Transport {
                code: code.to_string(),
                source,
            })?;

        let resource: LanguageResource =
            serde_json::from_slice(&body).map_err(|source| LoadFailure::Parse {
                code: code.to_string(),
                source,
            })?;

        tracing::debug!(code, entries = resource.len(), "locale resource loaded");
        Ok(resource)
    }

    fn resource_url(&self, code: &str) -> Result<Url, LoadFailure> {
        if !is_valid_code(code) {
            return Err(LoadFailure::InvalidCode {
                code: code.to_string(),
            });
        }
        let file = format!("{code}.json");
        self.base_url
            .join(&file)
            .map_err(|source| LoadFailure::BadUrl { url: file, source })
    }
}

/// Language codes are short ASCII tags (`en`, `pt-br`); anything else is
/// rejected before it can alter the resource path.
fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= 16
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes_accepted() {
        for code in ["en", "he", "pt-br", "zh_Hant"] {
            assert!(is_valid_code(code), "{code} should be valid");
        }
    }

    #[test]
    fn invalid_codes_rejected() {
        for code in ["", "../secrets", "a/b", "en json", "x".repeat(17).as_str()] {
            assert!(!is_valid_code(code), "{code:?} should be invalid");
        }
    }

    #[test]
    fn resource_url_appends_json_suffix() {
        let client = LocaleClient::new(&LocaleConfig {
            base_url: "http://localhost:9999/assets/lang".to_string(),
            ..LocaleConfig::default()
        })
        .expect("client builds");
        let url = client.resource_url("es").expect("valid code");
        assert_eq!(url.as_str(), "http://localhost:9999/assets/lang/es.json");
    }

    #[test]
    fn traversal_code_is_rejected() {
        let client = LocaleClient::new(&LocaleConfig::default()).expect("client builds");
        assert!(matches!(
            client.resource_url("../../etc/passwd"),
            Err(LoadFailure::InvalidCode { .. })
        ));
    }
}
