//! Localization state and resolution policy.
//!
//! The loader (`vitrine-locales`) makes single attempts; this module owns
//! what happens around them: which code to try at startup, the one-shot
//! fallback to the default language, and the no-half-translated-UI rule
//! for user-initiated switches. Application of a loaded resource lives on
//! the `App` (it touches the page, the typer, and the preference store).

use vitrine_locales::{LanguageResource, LocaleClient};

/// Current language and the resource the page was last rendered from.
///
/// `active` is `None` until a load has succeeded; it never holds a
/// partially-applied resource. Owned by the `App` for the page lifetime.
#[derive(Debug)]
pub struct LocalizationState {
    current: String,
    active: Option<LanguageResource>,
}

impl LocalizationState {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            current: code.into(),
            active: None,
        }
    }

    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub fn active(&self) -> Option<&LanguageResource> {
        self.active.as_ref()
    }

    /// Whether any resource has been applied this page load.
    #[must_use]
    pub fn is_translated(&self) -> bool {
        self.active.is_some()
    }

    /// Atomically adopt a successfully loaded resource.
    pub(crate) fn replace(&mut self, code: impl Into<String>, resource: LanguageResource) {
        self.current = code.into();
        self.active = Some(resource);
    }
}

/// Result of the startup resolution: the effective code, the resource if
/// any attempt succeeded, and whether the default was adopted as a
/// runtime recovery (never persisted as a preference).
#[derive(Debug)]
pub struct StartupOutcome {
    pub code: String,
    pub resource: Option<LanguageResource>,
    pub fell_back: bool,
}

/// Events funneled back to the frame loop from spawned locale work.
#[derive(Debug)]
pub enum LocaleEvent {
    StartupResolved(StartupOutcome),
    SwitchLoaded {
        code: String,
        resource: LanguageResource,
    },
    SwitchFailed {
        code: String,
    },
}

/// Startup policy: try the preferred code, then fall back to the default
/// exactly once. Both failing leaves the page untranslated.
pub async fn resolve_startup(
    client: &LocaleClient,
    preferred: &str,
    default_code: &str,
) -> StartupOutcome {
    match client.load(preferred).await {
        Ok(resource) => StartupOutcome {
            code: preferred.to_string(),
            resource: Some(resource),
            fell_back: false,
        },
        Err(err) => {
            tracing::warn!(code = preferred, "locale load failed: {err}");
            if preferred == default_code {
                return StartupOutcome {
                    code: preferred.to_string(),
                    resource: None,
                    fell_back: false,
                };
            }
            match client.load(default_code).await {
                Ok(resource) => StartupOutcome {
                    code: default_code.to_string(),
                    resource: Some(resource),
                    fell_back: true,
                },
                Err(err) => {
                    tracing::warn!(code = default_code, "fallback locale load failed: {err}");
                    StartupOutcome {
                        code: preferred.to_string(),
                        resource: None,
                        fell_back: false,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use vitrine_locales::LocaleConfig;

    async fn server_with(locales: &[(&str, &str)]) -> MockServer {
        let server = MockServer::start().await;
        for (code, body) in locales {
            Mock::given(method("GET"))
                .and(path(format!("/lang/{code}.json")))
                .respond_with(
                    ResponseTemplate::new(200).set_body_string((*body).to_string()),
                )
                .mount(&server)
                .await;
        }
        server
    }

    fn client_for(server: &MockServer) -> LocaleClient {
        LocaleClient::new(&LocaleConfig {
            base_url: format!("{}/lang", server.uri()),
            timeout: Duration::from_secs(2),
            user_agent: "vitrine-test".to_string(),
        })
        .expect("client builds")
    }

    #[tokio::test]
    async fn preferred_language_wins_when_it_loads() {
        let server = server_with(&[
            ("es", r#"{"hero_title":"Hola"}"#),
            ("en", r#"{"hero_title":"Hello"}"#),
        ])
        .await;
        let client = client_for(&server);

        let outcome = resolve_startup(&client, "es", "en").await;
        assert_eq!(outcome.code, "es");
        assert!(!outcome.fell_back);
        let resource = outcome.resource.expect("loaded");
        assert_eq!(resource.get("hero_title"), Some("Hola"));
    }

    #[tokio::test]
    async fn failing_preferred_falls_back_to_default_once() {
        let server = server_with(&[("en", r#"{"hero_title":"Hello"}"#)]).await;
        let client = client_for(&server);

        let outcome = resolve_startup(&client, "xx", "en").await;
        assert_eq!(outcome.code, "en");
        assert!(outcome.fell_back, "default adoption is a runtime recovery");
        assert!(outcome.resource.is_some());
    }

    #[tokio::test]
    async fn both_failing_leaves_resource_absent() {
        let server = server_with(&[]).await;
        let client = client_for(&server);

        let outcome = resolve_startup(&client, "xx", "en").await;
        assert!(outcome.resource.is_none());
        assert!(!outcome.fell_back);
    }

    #[tokio::test]
    async fn preferred_equal_to_default_is_a_single_attempt() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lang/en.json"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let outcome = resolve_startup(&client, "en", "en").await;
        assert!(outcome.resource.is_none());
    }

    #[test]
    fn replace_is_atomic_over_code_and_resource() {
        let mut state = LocalizationState::new("en");
        assert!(!state.is_translated());

        let resource: LanguageResource = [("hero_title".to_string(), "Hola".to_string())]
            .into_iter()
            .collect();
        state.replace("es", resource);

        assert_eq!(state.current(), "es");
        assert_eq!(
            state.active().and_then(|r| r.get("hero_title")),
            Some("Hola")
        );
    }
}
