//! webui-inline CLI — inlines the web UI into the firmware source before upload.
//!
//! Reads `web/ui.html`, minifies it, and replaces the
//! `#include "web_ui.generated.h"` line of the sketch with a `PROGMEM` raw
//! string constant. `{{KEY}}` placeholders are filled from a `.env` file.
//!
//! All the work happens in [`webui_inline_core::pipeline`].

mod build;
mod output;

use clap::Parser;
use std::path::PathBuf;

use webui_inline_core::config::DEFAULT_CONFIG_FILE;
use webui_inline_core::settings::DEFAULT_SETTINGS_FILE;

#[derive(Parser)]
#[command(
    name = "webui-inline",
    about = "Inline a web UI page into firmware source as a PROGMEM constant",
    version
)]
struct Cli {
    /// Path to the web UI document (e.g. web/ui.html)
    #[arg(long)]
    html: PathBuf,

    /// Path to the source sketch containing #include "web_ui.generated.h"
    #[arg(long, visible_alias = "firmware")]
    ino: PathBuf,

    /// Path of the generated sketch (e.g. build/hockey_stick.ino)
    #[arg(long)]
    out: PathBuf,

    /// Path to the KEY=VALUE settings file
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    env: PathBuf,

    /// Path to the embed config (defaults are used if the file is absent)
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    build::run(cli.html, cli.ino, cli.out, cli.env, &cli.config)
}
