use std::path::{Path, PathBuf};

use regex::{NoExpand, Regex};

use crate::clock::Clock;
use crate::config::EmbedConfig;
use crate::delimiter::choose_delimiter;
use crate::embed::render_constant;
use crate::error::{EmbedError, Result};
use crate::normalize::light_minify;
use crate::settings::Settings;
use crate::substitute::{substitute, unresolved_placeholders};

/// Input and output locations for one embed run.
#[derive(Debug, Clone)]
pub struct EmbedRequest {
    /// Web UI document, e.g. `web/ui.html`.
    pub html: PathBuf,
    /// Firmware source containing the anchor include line.
    pub firmware: PathBuf,
    /// Where the patched firmware source is written.
    pub output: PathBuf,
    /// `.env`-style settings file.
    pub settings: PathBuf,
}

/// The patched firmware source, not yet written.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub text: String,
    /// Raw string delimiter chosen for the payload.
    pub delimiter: String,
    /// Size of the minified payload in bytes.
    pub payload_bytes: usize,
    /// Number of placeholders filled from settings.
    pub substitutions: usize,
    /// Placeholders left without a value.
    pub unresolved: Vec<String>,
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct EmbedReport {
    pub output: PathBuf,
    pub delimiter: String,
    pub payload_bytes: usize,
    pub substitutions: usize,
    pub unresolved: Vec<String>,
}

/// Validate the inputs and produce the patched firmware source in memory.
///
/// Nothing is written. The clock is read exactly once.
pub fn render(request: &EmbedRequest, config: &EmbedConfig, clock: &dyn Clock) -> Result<Rendered> {
    // Stage 1: input validation
    if !request.html.exists() {
        return Err(EmbedError::HtmlNotFound(request.html.clone()));
    }
    if !request.firmware.exists() {
        return Err(EmbedError::FirmwareNotFound(request.firmware.clone()));
    }
    let settings = Settings::load(&request.settings)?;
    config.validate()?;

    // Stage 2: payload and constant block
    let html = std::fs::read_to_string(&request.html).map_err(EmbedError::read(&request.html))?;
    let payload = light_minify(&html);
    let delimiter = choose_delimiter(&payload, &config.delimiter_base, config.max_delimiter_attempts)?;
    tracing::debug!(
        raw_bytes = html.len(),
        payload_bytes = payload.len(),
        %delimiter,
        "minified web UI"
    );
    let source_label = request.html.display().to_string();
    let block = render_constant(&payload, &delimiter, clock.now(), &source_label, config);

    // Stage 3: splice into the firmware source
    let firmware =
        std::fs::read_to_string(&request.firmware).map_err(EmbedError::read(&request.firmware))?;
    let spliced = replace_anchor(&firmware, &block, &request.firmware, config)?;

    // Stage 4: placeholders
    let substituted = substitute(&spliced, &settings)?;
    let unresolved = unresolved_placeholders(&substituted.text);
    for placeholder in &unresolved {
        tracing::warn!(%placeholder, "placeholder has no value in settings");
    }

    Ok(Rendered {
        text: substituted.text,
        delimiter,
        payload_bytes: payload.len(),
        substitutions: substituted.replaced,
        unresolved,
    })
}

/// Run the full pipeline and write the patched source to `request.output`.
///
/// The output file is only touched once every stage has succeeded.
pub fn run(request: &EmbedRequest, config: &EmbedConfig, clock: &dyn Clock) -> Result<EmbedReport> {
    let rendered = render(request, config, clock)?;

    if let Some(parent) = request.output.parent() {
        std::fs::create_dir_all(parent).map_err(EmbedError::write(parent))?;
    }
    std::fs::write(&request.output, &rendered.text).map_err(EmbedError::write(&request.output))?;
    tracing::info!(output = %request.output.display(), "wrote firmware source");

    Ok(EmbedReport {
        output: request.output.clone(),
        delimiter: rendered.delimiter,
        payload_bytes: rendered.payload_bytes,
        substitutions: rendered.substitutions,
        unresolved: rendered.unresolved,
    })
}

/// Replace the first `#include "<anchor_header>"` line with `block`.
///
/// The anchor is expected once; extra matches are left alone and logged.
fn replace_anchor(source: &str, block: &str, path: &Path, config: &EmbedConfig) -> Result<String> {
    let pattern = anchor_pattern(&config.anchor_header)?;

    let matches = pattern.find_iter(source).count();
    if matches == 0 {
        return Err(EmbedError::AnchorNotFound {
            path: path.to_path_buf(),
            anchor: config.anchor_header.clone(),
        });
    }
    if matches > 1 {
        tracing::warn!(
            path = %path.display(),
            matches,
            "anchor include appears more than once, only the first is replaced"
        );
    }

    Ok(pattern.replace(source, NoExpand(block)).into_owned())
}

fn anchor_pattern(header: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(r#"#include\s+"{}""#, regex::escape(header)))?)
}
