use std::path::{Path, PathBuf};

use anyhow::Result;

use webui_inline_core::clock::SystemClock;
use webui_inline_core::config::EmbedConfig;
use webui_inline_core::pipeline::{self, EmbedRequest};

use crate::output;

/// Inline the web UI into the firmware source and write the result.
///
/// Any missing input, missing anchor, or unusable payload aborts before the
/// output file is created.
pub fn run(html: PathBuf, ino: PathBuf, out: PathBuf, env: PathBuf, config_path: &Path) -> Result<()> {
    output::print_step(1, 2, "Loading embed config");
    let config = EmbedConfig::load_or_default(config_path)?;
    tracing::debug!(
        config = %config_path.display(),
        constant = %config.constant_name,
        anchor = %config.anchor_header,
        "resolved embed config"
    );

    output::print_step(2, 2, "Inlining web UI");
    let request = EmbedRequest {
        html,
        firmware: ino,
        output: out,
        settings: env,
    };
    let report = pipeline::run(&request, &config, &SystemClock)?;

    output::print_report(&report, &request.settings);
    Ok(())
}
