use crate::constants::{
    DEFAULT_MAX_DEPTH, DEFAULT_ROOT_LABEL, ELLIPSIS, MAX_TEXT_LENGTH, TRUNCATION_LOOKBACK,
};
use crate::error::{OutlineError, Result};
use crate::syntax::{ParseNode, SourceRef};

mod presentation;

pub use presentation::type_and_default_suffix;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutlineNode {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub node_type: String,
    pub source: SourceRef,
    #[serde(default)]
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    /// Number of rows in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(OutlineNode::node_count).sum::<usize>()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlineOptions {
    pub max_text_length: usize,
    pub lookback_window: usize,
    pub ellipsis: String,
    pub max_depth: usize,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            max_text_length: MAX_TEXT_LENGTH,
            lookback_window: TRUNCATION_LOOKBACK,
            ellipsis: ELLIPSIS.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Presentation hints a tree widget may query. The outline is always computed
/// eagerly, so neither is ever set.
#[derive(serde::Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub always_show_expander: bool,
    pub always_treat_as_leaf: bool,
}

pub fn capabilities() -> Capabilities {
    Capabilities {
        always_show_expander: OutlineBuilder::ALWAYS_SHOW_EXPANDER,
        always_treat_as_leaf: OutlineBuilder::ALWAYS_TREAT_AS_LEAF,
    }
}

#[derive(Clone, Debug, Default)]
pub struct OutlineBuilder {
    options: OutlineOptions,
}

impl OutlineBuilder {
    pub const ALWAYS_SHOW_EXPANDER: bool = false;
    pub const ALWAYS_TREAT_AS_LEAF: bool = false;

    pub fn new(options: OutlineOptions) -> Self {
        Self { options }
    }

    /// Builds the outline for a whole file. The root always becomes a row,
    /// whatever its kind.
    pub fn build(&self, root: &ParseNode) -> Result<OutlineNode> {
        let mut path = Vec::new();
        let mut children = Vec::new();
        self.collect_symbol_outline_nodes(root, &mut path, 0, &mut children)?;

        let (label, detail, node_type) = match presentation::present(&root.kind, &self.options) {
            Some(presentation) => (
                presentation.label,
                presentation.detail,
                presentation.node_type,
            ),
            None => (DEFAULT_ROOT_LABEL.to_string(), None, "file"),
        };

        let outline = OutlineNode {
            label,
            detail,
            node_type: node_type.to_string(),
            source: SourceRef {
                path,
                position: root.position,
            },
            children,
        };

        tracing::debug!(
            root = %outline.label,
            rows = outline.node_count(),
            "built outline"
        );

        Ok(outline)
    }

    /// Outline rows for the descendants of `node`, with transparent levels
    /// flattened away. Source paths are relative to `node`.
    pub fn children(&self, node: &ParseNode) -> Result<Vec<OutlineNode>> {
        let mut path = Vec::new();
        let mut output = Vec::new();
        self.collect_symbol_outline_nodes(node, &mut path, 0, &mut output)?;
        Ok(output)
    }

    fn collect_symbol_outline_nodes(
        &self,
        node: &ParseNode,
        path: &mut Vec<usize>,
        depth: usize,
        output: &mut Vec<OutlineNode>,
    ) -> Result<()> {
        if depth >= self.options.max_depth {
            tracing::warn!(
                limit = self.options.max_depth,
                "parse tree exceeds outline depth limit"
            );
            return Err(OutlineError::DepthLimitExceeded {
                limit: self.options.max_depth,
            });
        }

        for (index, child) in node.children.iter().enumerate() {
            path.push(index);

            let result = match presentation::present(&child.kind, &self.options) {
                Some(presentation) => self
                    .build_outline_node(child, presentation, path, depth + 1)
                    .map(|outline_node| output.push(outline_node)),
                None => self.collect_symbol_outline_nodes(child, path, depth + 1, output),
            };

            path.pop();
            result?;
        }

        Ok(())
    }

    fn build_outline_node(
        &self,
        node: &ParseNode,
        presentation: presentation::Presentation,
        path: &mut Vec<usize>,
        depth: usize,
    ) -> Result<OutlineNode> {
        let mut children = Vec::new();
        self.collect_symbol_outline_nodes(node, path, depth, &mut children)?;

        Ok(OutlineNode {
            label: presentation.label,
            detail: presentation.detail,
            node_type: presentation.node_type.to_string(),
            source: SourceRef {
                path: path.clone(),
                position: node.position,
            },
            children,
        })
    }
}

/// Builds an outline with the default options.
pub fn build_outline(root: &ParseNode) -> Result<OutlineNode> {
    OutlineBuilder::default().build(root)
}

fn filter_outline_node_by_keyword(node: &OutlineNode, keyword: &str) -> Option<OutlineNode> {
    let normalized_label = node.label.to_lowercase();
    let is_matched = normalized_label.contains(keyword);

    let filtered_children = node
        .children
        .iter()
        .filter_map(|child| filter_outline_node_by_keyword(child, keyword))
        .collect::<Vec<OutlineNode>>();

    if !is_matched && filtered_children.is_empty() {
        return None;
    }

    Some(OutlineNode {
        label: node.label.clone(),
        detail: node.detail.clone(),
        node_type: node.node_type.clone(),
        source: node.source.clone(),
        children: filtered_children,
    })
}

/// Keeps rows whose label contains `keyword` (case-insensitive) along with
/// their ancestors. A blank keyword keeps everything.
pub fn filter_outline_nodes(nodes: Vec<OutlineNode>, keyword: &str) -> Vec<OutlineNode> {
    let normalized_keyword = keyword.trim().to_lowercase();
    if normalized_keyword.is_empty() {
        return nodes;
    }

    nodes
        .iter()
        .filter_map(|node| filter_outline_node_by_keyword(node, normalized_keyword.as_str()))
        .collect()
}

/// Same as [`filter_outline_nodes`] but keeps `root` itself even when nothing matches.
pub fn filter_outline(root: OutlineNode, keyword: &str) -> OutlineNode {
    let OutlineNode {
        label,
        detail,
        node_type,
        source,
        children,
    } = root;

    OutlineNode {
        label,
        detail,
        node_type,
        source,
        children: filter_outline_nodes(children, keyword),
    }
}
