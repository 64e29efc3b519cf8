//! `{{KEY}}` placeholder substitution.
//!
//! Substitution is a single left-to-right pass over the source text: a value
//! that itself contains `{{...}}` is copied as-is and never expanded again.
//! Placeholders without a matching setting are left in place.

use std::collections::BTreeSet;

use regex::{Captures, Regex};

use crate::error::Result;
use crate::settings::Settings;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Result of a substitution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substituted {
    pub text: String,
    /// Number of placeholders replaced.
    pub replaced: usize,
}

/// Replace every literal `{{KEY}}` with its value from `settings`.
///
/// Keys are matched verbatim, so a key may contain any character including
/// `}`. When two placeholders overlap at the same position the longer one
/// wins.
pub fn substitute(source: &str, settings: &Settings) -> Result<Substituted> {
    let Some(pattern) = placeholder_pattern(settings)? else {
        return Ok(Substituted {
            text: source.to_string(),
            replaced: 0,
        });
    };

    let mut replaced = 0;
    let text = pattern
        .replace_all(source, |caps: &Captures<'_>| {
            let token = &caps[0];
            let key = &token[OPEN.len()..token.len() - CLOSE.len()];
            replaced += 1;
            settings.get(key).unwrap_or(token).to_string()
        })
        .into_owned();

    Ok(Substituted { text, replaced })
}

/// One alternation over every `{{KEY}}`, longest first.
fn placeholder_pattern(settings: &Settings) -> Result<Option<Regex>> {
    if settings.is_empty() {
        return Ok(None);
    }
    let mut tokens: Vec<String> = settings
        .iter()
        .map(|(key, _)| format!("{OPEN}{key}{CLOSE}"))
        .collect();
    tokens.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let alternation = tokens
        .iter()
        .map(|token| regex::escape(token))
        .collect::<Vec<_>>()
        .join("|");
    Ok(Some(Regex::new(&alternation)?))
}

/// Distinct `{{KEY}}` tokens present in `text`, in sorted order.
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    let mut found = BTreeSet::new();
    let mut rest = text;
    while let Some(start) = rest.find(OPEN) {
        let after_open = &rest[start + OPEN.len()..];
        let Some(end) = after_open.find(CLOSE) else {
            break;
        };
        let key = &after_open[..end];
        if is_placeholder_key(key) {
            found.insert(format!("{OPEN}{key}{CLOSE}"));
            rest = &after_open[end + CLOSE.len()..];
        } else {
            rest = &rest[start + 1..];
        }
    }
    found.into_iter().collect()
}

/// Settings-style key: non-empty, identifier characters only.
fn is_placeholder_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
