//! Site configuration: `~/.vitrine/config.toml`.
//!
//! Raw TOML structs keep every field optional; [`Settings::resolve`]
//! collapses them into concrete values at the parse boundary so the rest
//! of the engine never handles `Option` config.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use vitrine_locales::LocaleConfig;

use crate::phrases;
use crate::prefs::Theme;

/// Passphrase used when the config file does not set one.
pub const DEFAULT_PASSPHRASE: &str = "letmein";

#[derive(Debug, Default, Deserialize)]
pub struct VitrineConfig {
    pub app: Option<AppConfig>,
    pub locales: Option<LocalesConfig>,
    pub gate: Option<GateConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Default theme when no preference is stored: "dark" or "light".
    pub theme: Option<String>,
    /// Default language when no preference is stored.
    pub language: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocalesConfig {
    /// Base URL the per-language resources hang off of.
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GateConfig {
    pub passphrase: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl VitrineConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read { path, source: err });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse { path, source: err })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".vitrine").join("config.toml"))
}

/// Fully-resolved settings the engine runs with.
#[derive(Debug, Clone)]
pub struct Settings {
    pub default_theme: Theme,
    pub default_language: String,
    pub passphrase: String,
    pub locales: LocaleConfig,
}

impl Settings {
    /// Collapse an optional raw config into concrete settings. Unknown
    /// theme names are logged and replaced with the default.
    #[must_use]
    pub fn resolve(config: Option<&VitrineConfig>) -> Self {
        let app = config.and_then(|c| c.app.as_ref());
        let locales = config.and_then(|c| c.locales.as_ref());
        let gate = config.and_then(|c| c.gate.as_ref());

        let default_theme = match app.and_then(|a| a.theme.as_deref()) {
            None => Theme::default(),
            Some("dark") => Theme::Dark,
            Some("light") => Theme::Light,
            Some(other) => {
                tracing::warn!("unknown theme in config: {other}");
                Theme::default()
            }
        };

        let default_language = app
            .and_then(|a| a.language.as_deref())
            .unwrap_or(phrases::DEFAULT_LANGUAGE)
            .to_string();

        let passphrase = gate
            .and_then(|g| g.passphrase.as_deref())
            .unwrap_or(DEFAULT_PASSPHRASE)
            .to_string();

        let base = LocaleConfig::default();
        let locale_config = LocaleConfig {
            base_url: locales
                .and_then(|l| l.base_url.clone())
                .unwrap_or(base.base_url),
            timeout: locales
                .and_then(|l| l.timeout_seconds)
                .map(Duration::from_secs)
                .unwrap_or(base.timeout),
            user_agent: locales
                .and_then(|l| l.user_agent.clone())
                .unwrap_or(base.user_agent),
        };

        Self {
            default_theme,
            default_language,
            passphrase,
            locales: locale_config,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(None)
    }
}
