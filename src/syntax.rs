use serde::Deserialize;

use crate::error::{OutlineError, Result};

/// 1-based location of a node's first character in the source document.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AtKind {
    Inject,
    Param,
    State,
}

impl AtKind {
    pub fn keyword(self) -> &'static str {
        match self {
            AtKind::Inject => "@inject",
            AtKind::Param => "@param",
            AtKind::State => "@state",
        }
    }
}

/// The node kinds the outline cares about. Everything else the parser
/// produces arrives as `Other` and is treated as a transparent container.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum NodeKind {
    File {
        #[serde(default)]
        name: String,
    },
    Namespace {
        name: Option<String>,
    },
    TemplateBlock {
        tag_name: Option<String>,
        name: Option<String>,
    },
    CallStatement {
        tag_name: Option<String>,
        template_name: Option<String>,
    },
    LetCompound {
        identifier: Option<String>,
    },
    LetSingle {
        identifier: Option<String>,
        expr: Option<String>,
    },
    Param {
        name: Option<String>,
        inlined_value: Option<String>,
    },
    MsgBlock {
        tag_name: Option<String>,
        description: Option<String>,
    },
    AtDeclaration {
        at_kind: AtKind,
        identifier: Option<String>,
        type_name: Option<String>,
        default_value: Option<String>,
    },
    TagBlock {
        tag_name: Option<String>,
    },
    Other {
        syntax: Option<String>,
    },
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ParseNode {
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            position: None,
            children: Vec::new(),
        }
    }

    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.position = Some(Position { line, column });
        self
    }

    pub fn with_child(mut self, child: ParseNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = ParseNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Parses a tree exported as JSON. Nesting depth is bounded by the outline
    /// builder's depth guard rather than by the JSON reader.
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut json = serde_json::Deserializer::from_str(raw);
        json.disable_recursion_limit();

        let root = ParseNode::deserialize(serde_stacker::Deserializer::new(&mut json))
            .map_err(OutlineError::InvalidTree)?;
        json.end().map_err(OutlineError::InvalidTree)?;

        Ok(root)
    }

    /// Follows a [`SourceRef`] path back to the node it was built from.
    /// Returns `None` when the reference was produced from a different tree.
    pub fn resolve(&self, source: &SourceRef) -> Option<&ParseNode> {
        source
            .path
            .iter()
            .try_fold(self, |node, index| node.children.get(*index))
    }
}

/// Non-owning link from an outline row back to its parse node: the child-index
/// path from the root the outline was built from.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceRef {
    pub path: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}
