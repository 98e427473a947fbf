mod cli;
mod constants;
mod logging;
mod settings;
mod text_utils;

pub mod config;
pub mod error;
pub mod outline;
pub mod render;
pub mod syntax;

use clap::Parser;

pub use constants::{ELLIPSIS, MAX_TEXT_LENGTH, TRUNCATION_LOOKBACK};
pub use error::{OutlineError, Result};
pub use outline::{
    build_outline, capabilities, filter_outline, filter_outline_nodes, type_and_default_suffix,
    Capabilities, OutlineBuilder, OutlineNode, OutlineOptions,
};
pub use settings::OutlineConfig;
pub use syntax::{AtKind, NodeKind, ParseNode, Position, SourceRef};
pub use text_utils::shorten_text_if_long;

/// Shortens free text with the default outline limits.
pub fn shorten_text(value: &str) -> String {
    shorten_text_if_long(value, MAX_TEXT_LENGTH, TRUNCATION_LOOKBACK, ELLIPSIS)
}

pub fn run() {
    logging::init();

    let args = cli::CliArgs::parse();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    if let Err(err) = cli::execute(args, &mut stdin.lock(), &mut stdout.lock()) {
        eprintln!("error while building outline: {err:#}");
        std::process::exit(1);
    }
}
