//! Command-line front end: reads a JSON parse tree and prints its outline.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::{config_file_path, load_config, merge_partial_config};
use crate::outline::{filter_outline, OutlineBuilder};
use crate::render::{parse_output_format, render, OutputFormat};
use crate::settings::PartialOutlineConfig;
use crate::syntax::ParseNode;

/// Print the structure outline of a Soy parse tree
#[derive(Parser, Debug)]
#[command(
    name = "soy-outline",
    version,
    about = "Print the structure outline of a Soy parse tree"
)]
pub struct CliArgs {
    /// JSON parse tree to read (stdin when omitted)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Outline config file (defaults to $SOY_OUTLINE_CONFIG)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Only keep rows whose label contains KEYWORD
    #[arg(long, value_name = "KEYWORD")]
    pub filter: Option<String>,

    /// Maximum length of shortened descriptions
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,
}

impl CliArgs {
    fn overrides(&self) -> PartialOutlineConfig {
        PartialOutlineConfig {
            max_text_length: self.max_length,
            format: self.format.clone(),
            ..PartialOutlineConfig::default()
        }
    }
}

fn read_tree_source(path: Option<&Path>, stdin: &mut impl Read) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read parse tree {}", path.display())),
        None => {
            let mut raw = String::new();
            stdin
                .read_to_string(&mut raw)
                .context("Failed to read parse tree from stdin")?;
            Ok(raw)
        }
    }
}

pub fn execute(args: CliArgs, stdin: &mut impl Read, stdout: &mut impl Write) -> Result<()> {
    if let Some(format) = args.format.as_deref() {
        if parse_output_format(format).is_none() {
            anyhow::bail!("Unsupported output format: {}", format);
        }
    }

    let config_path = config_file_path(args.config.as_deref());
    let file_config = load_config(config_path.as_deref())?;
    let config = merge_partial_config(file_config, args.overrides());

    let raw = read_tree_source(args.path.as_deref(), stdin)?;
    let root = ParseNode::from_json(&raw)?;

    let builder = OutlineBuilder::new(config.outline_options());
    let mut outline = builder.build(&root)?;

    if let Some(keyword) = args.filter.as_deref() {
        outline = filter_outline(outline, keyword);
    }

    let format = parse_output_format(&config.format).unwrap_or(OutputFormat::Text);
    let rendered = render(&outline, format)?;

    stdout
        .write_all(rendered.as_bytes())
        .context("Failed to write outline")?;
    if format == OutputFormat::Json {
        writeln!(stdout).context("Failed to write outline")?;
    }

    Ok(())
}
