//! Light/dark theme preference.
//!
//! The preference is read once at startup (stored value first, then the
//! terminal's own background hint) and written back on every toggle.

use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key under which the theme is persisted
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Parse a stored value. Anything but "dark" or "light" is `None`.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette::light(),
            Theme::Dark => Palette::dark(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colors every view draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub primary: Color,
    pub accent: Color,
    pub warning: Color,
    pub destructive: Color,
    pub selection: Color,
}

impl Palette {
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            muted: Color::DarkGray,
            border: Color::Gray,
            primary: Color::Blue,
            accent: Color::Green,
            warning: Color::Rgb(200, 120, 0),
            destructive: Color::Red,
            selection: Color::Magenta,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            foreground: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
            primary: Color::Cyan,
            accent: Color::LightGreen,
            warning: Color::Rgb(255, 165, 0),
            destructive: Color::LightRed,
            selection: Color::Yellow,
        }
    }
}

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to access preferences file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("preferences file {path} is not valid JSON: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value persistence surface for user preferences
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Preferences kept only for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences stored as a flat JSON object on disk
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/taskboard/preferences.json`
    pub fn default_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("taskboard").join("preferences.json"))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|source| PreferenceError::Io {
            path: self.path.clone(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|source| PreferenceError::Format {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        // A corrupt file is replaced rather than blocking every future write
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(e) => {
                log::warn!("Preferences: discarding unreadable file: {}", e);
                BTreeMap::new()
            }
        };
        values.insert(key.to_string(), value.to_string());

        let io_err = |source: std::io::Error| PreferenceError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = serde_json::to_string_pretty(&values).map_err(|source| PreferenceError::Format {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, content).map_err(io_err)
    }
}

/// Whether the terminal advertises a dark background via `COLORFGBG`
#[must_use]
pub fn system_prefers_dark() -> Option<bool> {
    std::env::var("COLORFGBG").ok().and_then(|value| prefers_dark_from_colorfgbg(&value))
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`). Background indices 0-6
/// and 8 are the dark half of the 16-color table.
#[must_use]
pub fn prefers_dark_from_colorfgbg(value: &str) -> Option<bool> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(background, 0..=6 | 8))
}

/// The process-wide theme flag and where it is persisted
pub struct ThemePreference {
    theme: Theme,
    store: Box<dyn PreferenceStore + Send>,
}

impl fmt::Debug for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemePreference").field("theme", &self.theme).finish()
    }
}

impl ThemePreference {
    /// Resolve the starting theme: a stored value wins (unrecognized values read
    /// as light), otherwise dark only if the system prefers dark.
    pub fn initialize(store: Box<dyn PreferenceStore + Send>, system_prefers_dark: Option<bool>) -> Self {
        // Anything persisted counts; only "dark" selects dark
        let stored = match store.get(THEME_KEY) {
            Ok(Some(value)) => Some(Theme::from_stored(&value).unwrap_or(Theme::Light)),
            Ok(None) => None,
            Err(e) => {
                log::warn!("Theme: could not read stored preference: {}", e);
                None
            }
        };
        let theme = match stored {
            Some(theme) => theme,
            None if system_prefers_dark == Some(true) => Theme::Dark,
            None => Theme::Light,
        };
        log::info!(
            "Theme: starting with {} (stored: {:?}, system prefers dark: {:?})",
            theme,
            stored,
            system_prefers_dark
        );
        Self { theme, store }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Flip the theme and persist it. The in-memory flip happens even if
    /// persisting fails.
    pub fn toggle(&mut self) -> Result<Theme> {
        self.theme = self.theme.toggled();
        log::info!("Theme: switched to {}", self.theme);
        self.store
            .set(THEME_KEY, self.theme.as_str())
            .with_context(|| format!("Failed to persist theme '{}'", self.theme))?;
        Ok(self.theme)
    }

    /// Currently persisted raw value, if any
    pub fn stored_value(&self) -> Result<Option<String>> {
        Ok(self.store.get(THEME_KEY)?)
    }
}
