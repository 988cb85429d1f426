//! The preference store: three independent flags persisted across runs.
//!
//! Flags are last-writer-wins with no relationships between them. Writes
//! are flushed to disk immediately; a failed write is logged and the page
//! keeps running with the in-memory value.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Color theme flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// The persisted record. Every field is optional; absence means the user
/// never chose.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Option<Theme>,
    pub language: Option<String>,
    #[serde(default)]
    pub cookies_accepted: bool,
}

/// File-backed store for [`Preferences`].
#[derive(Debug)]
pub struct PrefStore {
    path: Option<PathBuf>,
    current: Preferences,
}

impl PrefStore {
    /// `~/.vitrine/prefs.toml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".vitrine").join("prefs.toml"))
    }

    /// Open the store at a path, reading any existing record. A missing or
    /// unreadable file yields defaults; a malformed file is logged and
    /// replaced on the next write.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = Self::read(&path);
        Self {
            path: Some(path),
            current,
        }
    }

    /// Open at the default location, or in-memory only when no home
    /// directory can be determined.
    #[must_use]
    pub fn open_default() -> Self {
        match Self::default_path() {
            Some(path) => Self::open(path),
            None => {
                tracing::warn!("no home directory; preferences will not persist");
                Self {
                    path: None,
                    current: Preferences::default(),
                }
            }
        }
    }

    fn read(path: &Path) -> Preferences {
        if !path.exists() {
            return Preferences::default();
        }
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(prefs) => prefs,
                Err(err) => {
                    tracing::warn!(path = %path.display(), "malformed prefs file: {err}");
                    Preferences::default()
                }
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), "failed to read prefs: {err}");
                Preferences::default()
            }
        }
    }

    #[must_use]
    pub fn get(&self) -> &Preferences {
        &self.current
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.current.theme = Some(theme);
        self.save();
    }

    pub fn set_language(&mut self, code: impl Into<String>) {
        self.current.language = Some(code.into());
        self.save();
    }

    pub fn set_cookies_accepted(&mut self) {
        self.current.cookies_accepted = true;
        self.save();
    }

    /// Flush the current record. Failures are logged, never propagated:
    /// losing a preference write must not take the page down.
    fn save(&self) {
        let Some(path) = &self.path else {
            return;
        };
        let serialized = match toml::to_string_pretty(&self.current) {
            Ok(s) => s,
            Err(err) => {
                tracing::warn!("failed to serialize prefs: {err}");
                return;
            }
        };
        if let Some(parent) = path.parent()
            && let Err(err) = fs::create_dir_all(parent)
        {
            tracing::warn!(path = %parent.display(), "failed to create prefs dir: {err}");
            return;
        }
        if let Err(err) = fs::write(path, serialized) {
            tracing::warn!(path = %path.display(), "failed to write prefs: {err}");
        }
    }
}
