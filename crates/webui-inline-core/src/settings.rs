//! `.env`-style settings used to fill `{{KEY}}` placeholders.
//!
//! Format: one `KEY=VALUE` per line, split at the first `=`. Blank lines and
//! lines starting with `#` are skipped, as are lines without `=`. A value
//! that starts and ends with the same single or double quote has them removed,
//! so a lone `"` becomes the empty string; there is no escape processing and no
//! variable interpolation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{EmbedError, Result};

/// Default settings file name, relative to the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = ".env";

/// Placeholder values keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    values: HashMap<String, String>,
}

impl Settings {
    /// Read and parse a settings file.
    ///
    /// A missing file is reported as [`EmbedError::SettingsNotFound`], pointing
    /// the user at the `.example` template next to it.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(EmbedError::SettingsNotFound {
                path: path.to_path_buf(),
                template: example_path(path),
            });
        }
        let contents = std::fs::read_to_string(path).map_err(EmbedError::read(path))?;
        let settings = Self::parse(&contents);
        tracing::debug!(path = %path.display(), keys = settings.len(), "loaded settings");
        Ok(settings)
    }

    /// Parse settings from text. Later duplicates win.
    pub fn parse(contents: &str) -> Self {
        let values = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_string(), unquote(value.trim()).to_string()))
            .collect();
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Settings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Strip one pair of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            return value.get(1..value.len() - 1).unwrap_or_default();
        }
    }
    value
}

/// `.env` -> `.env.example`
fn example_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".example");
    PathBuf::from(name)
}
