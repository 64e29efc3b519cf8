//! Firmware-specific metadata for the generated constant.
//!
//! None of these values are computed; they describe the target toolchain
//! (Arduino/ESP `pgmspace.h` by default) and are read from an optional
//! `webui-inline.config.json`. Fields missing from the file keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::delimiter::DEFAULT_MAX_ATTEMPTS;
use crate::error::{EmbedError, Result};

/// Longest delimiter a C++ raw string literal accepts.
pub const MAX_RAW_DELIMITER_LEN: usize = 16;

/// Default location of the embed configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "webui-inline.config.json";

/// How the web UI constant is declared and where it is spliced in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    /// Name of the `const char[]` holding the page.
    pub constant_name: String,
    /// Storage qualifier placing the array in flash, e.g. `PROGMEM`.
    pub storage_qualifier: String,
    /// Include line that makes the qualifier available.
    pub storage_include: String,
    /// Header named by the `#include "..."` line that gets replaced.
    pub anchor_header: String,
    /// First raw string delimiter tried.
    pub delimiter_base: String,
    /// Number of delimiter candidates tried before giving up.
    pub max_delimiter_attempts: usize,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            constant_name: "WEB_UI_HTML".into(),
            storage_qualifier: "PROGMEM".into(),
            storage_include: "#include <pgmspace.h>".into(),
            anchor_header: "web_ui.generated.h".into(),
            delimiter_base: "HS_WEB_UI".into(),
            max_delimiter_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl EmbedConfig {
    /// Load the config from a JSON file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| EmbedError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|e| EmbedError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every delimiter candidate is a legal raw string d-char-sequence.
    ///
    /// Allowed characters are printable ASCII except `(`, `)` and `\`; the
    /// longest candidate (`base_N` for the last attempt) must fit in
    /// [`MAX_RAW_DELIMITER_LEN`] characters.
    pub fn validate(&self) -> Result<()> {
        let base = &self.delimiter_base;
        let invalid = |reason: String| EmbedError::InvalidDelimiter {
            base: base.clone(),
            reason,
        };

        if base.is_empty() {
            return Err(invalid("must not be empty".into()));
        }
        if let Some(c) = base
            .chars()
            .find(|&c| !c.is_ascii_graphic() || matches!(c, '(' | ')' | '\\'))
        {
            return Err(invalid(format!("character {c:?} is not allowed in a raw string delimiter")));
        }

        let longest = base.len() + suffix_len(self.max_delimiter_attempts);
        if longest > MAX_RAW_DELIMITER_LEN {
            return Err(invalid(format!(
                "candidates grow to {longest} characters with {} attempts (max {MAX_RAW_DELIMITER_LEN})",
                self.max_delimiter_attempts
            )));
        }
        Ok(())
    }

    /// Load the config if the file exists, otherwise use the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no embed config, using defaults");
            Ok(Self::default())
        }
    }
}

/// Length of the `_N` suffix on the last of `attempts` candidates.
fn suffix_len(attempts: usize) -> usize {
    match attempts.saturating_sub(1) {
        0 => 0,
        last => 1 + last.to_string().len(),
    }
}
