//! Unified error types for the webui-inline pipeline.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// All errors that can occur while embedding a web UI into firmware source.
#[derive(Error, Debug)]
pub enum EmbedError {
    // --- Inputs ---

    /// The HTML document to embed was not found.
    #[error("HTML input does not exist: {}", .0.display())]
    HtmlNotFound(PathBuf),

    /// The firmware source (`.ino`) to patch was not found.
    #[error("INO input does not exist: {}", .0.display())]
    FirmwareNotFound(PathBuf),

    /// The `KEY=VALUE` settings file was not found.
    #[error("settings file does not exist: {}\nCreate one from {}", path.display(), template.display())]
    SettingsNotFound { path: PathBuf, template: PathBuf },

    /// The firmware source does not contain the generated-header include line.
    #[error("could not find #include \"{anchor}\" in {}", path.display())]
    AnchorNotFound { path: PathBuf, anchor: String },

    /// An anchor or placeholder search pattern could not be compiled.
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    // --- Configuration ---

    /// The embed configuration file exists but could not be read.
    #[error("failed to read config at {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The embed configuration file contains invalid JSON.
    #[error("failed to parse config at {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configured delimiter base cannot open a C++ raw string.
    #[error("invalid delimiter_base {base:?}: {reason}")]
    InvalidDelimiter { base: String, reason: String },

    // --- Generation ---

    /// Every candidate raw-string delimiter already occurs in the payload.
    #[error("could not find a safe raw string delimiter (base {base}, {attempts} candidates tried)")]
    DelimiterExhausted { base: String, attempts: usize },

    // --- General ---

    /// An input file exists but could not be read as UTF-8 text.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file or its directory could not be written.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EmbedError {
    /// Wrap an I/O failure while reading `path`.
    pub(crate) fn read(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Wrap an I/O failure while writing `path`.
    pub(crate) fn write(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Alias for `Result<T, EmbedError>`.
pub type Result<T> = std::result::Result<T, EmbedError>;
