use crate::error::{OutlineError, Result};
use crate::outline::{capabilities, Capabilities, OutlineNode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn parse_output_format(format: &str) -> Option<OutputFormat> {
    match format.trim().to_lowercase().as_str() {
        "text" | "txt" | "tree" => Some(OutputFormat::Text),
        "json" => Some(OutputFormat::Json),
        _ => None,
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct OutlineDocument<'a> {
    capabilities: Capabilities,
    root: &'a OutlineNode,
}

fn push_text_rows(node: &OutlineNode, depth: usize, output: &mut String) {
    output.push_str(&"  ".repeat(depth));
    output.push_str(&node.label);

    if let Some(detail) = node.detail.as_deref().filter(|detail| !detail.is_empty()) {
        // `: type` details attach to the label; free text gets a separator.
        if !detail.starts_with(':') {
            output.push_str(" - ");
        }
        output.push_str(detail);
    }
    output.push('\n');

    for child in &node.children {
        push_text_rows(child, depth + 1, output);
    }
}

/// One row per node, indented two spaces per level.
pub fn render_text(root: &OutlineNode) -> String {
    let mut output = String::new();
    push_text_rows(root, 0, &mut output);
    output
}

pub fn render_json(root: &OutlineNode) -> Result<String> {
    let document = OutlineDocument {
        capabilities: capabilities(),
        root,
    };

    serde_json::to_string_pretty(&document).map_err(OutlineError::Serialize)
}

pub fn render(root: &OutlineNode, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(root)),
        OutputFormat::Json => render_json(root),
    }
}
