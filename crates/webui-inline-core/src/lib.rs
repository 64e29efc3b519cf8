//! Core library for the webui-inline build step.
//!
//! Turns a single-file web UI into a `PROGMEM` raw string constant and splices
//! it into an Arduino-style firmware source, replacing the
//! `#include "web_ui.generated.h"` line. Placeholders of the form `{{KEY}}`
//! are then filled in from a `.env`-style settings file.
//!
//! The stages run in order:
//! - [`normalize`] — newline normalization, comment stripping, blank line removal
//! - [`delimiter`] — picks a raw-string delimiter that cannot close early
//! - [`embed`] — renders the constant declaration block
//! - [`substitute`] — fills `{{KEY}}` placeholders
//! - [`pipeline`] — validates inputs, runs the stages, writes the output
//!
//! [`settings`], [`config`] and [`clock`] supply the inputs the stages need.

pub mod clock;
pub mod config;
pub mod delimiter;
pub mod embed;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod settings;
pub mod substitute;
