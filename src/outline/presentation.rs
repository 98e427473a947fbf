use super::*;

use crate::syntax::NodeKind;
use crate::text_utils::{non_blank, shorten_text_if_long};

pub(super) struct Presentation {
    pub(super) label: String,
    pub(super) detail: Option<String>,
    pub(super) node_type: &'static str,
}

impl Presentation {
    fn new(label: String, node_type: &'static str) -> Self {
        Self {
            label,
            detail: None,
            node_type,
        }
    }

    fn with_detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }
}

/// Renders the `: type`, ` := default` or `: type = default` tail of an
/// @-declaration label. Blank parts count as absent.
pub fn type_and_default_suffix(type_name: Option<&str>, default_value: Option<&str>) -> String {
    match (non_blank(type_name), non_blank(default_value)) {
        (None, None) => String::new(),
        (Some(type_name), None) => format!(": {}", type_name),
        (None, Some(default_value)) => format!(" := {}", default_value),
        (Some(type_name), Some(default_value)) => format!(": {} = {}", type_name, default_value),
    }
}

fn tag_name_or(tag_name: &Option<String>, fallback: &str) -> String {
    non_blank(tag_name.as_deref())
        .map(str::to_lowercase)
        .unwrap_or_else(|| fallback.to_string())
}

fn join_label(parts: &[Option<&str>]) -> Option<String> {
    let label = parts
        .iter()
        .filter_map(|part| non_blank(*part))
        .collect::<Vec<_>>()
        .join(" ");

    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}

fn shorten(value: &str, options: &OutlineOptions) -> String {
    shorten_text_if_long(
        value,
        options.max_text_length,
        options.lookback_window,
        &options.ellipsis,
    )
}

/// Decides whether a parse node becomes an outline row and, if so, how it reads.
/// `None` marks the node as transparent.
pub(super) fn present(kind: &NodeKind, options: &OutlineOptions) -> Option<Presentation> {
    match kind {
        NodeKind::File { name } => Some(Presentation::new(
            join_label(&[Some(name.as_str())])
                .unwrap_or_else(|| DEFAULT_ROOT_LABEL.to_string()),
            "file",
        )),
        NodeKind::Namespace { .. } => Some(Presentation::new("namespace".to_string(), "namespace")),
        NodeKind::TemplateBlock { tag_name, name } => {
            let tag = tag_name_or(tag_name, "template");
            join_label(&[Some(tag.as_str()), name.as_deref()])
                .map(|label| Presentation::new(label, "template"))
        }
        NodeKind::CallStatement {
            tag_name,
            template_name,
        } => {
            let tag = tag_name_or(tag_name, "call");
            join_label(&[Some(tag.as_str()), template_name.as_deref()])
                .map(|label| Presentation::new(label, "call"))
        }
        NodeKind::LetCompound { identifier } => {
            join_label(&[Some("let"), identifier.as_deref()])
                .map(|label| Presentation::new(label, "let"))
        }
        NodeKind::LetSingle { identifier, expr } => {
            let detail = non_blank(expr.as_deref()).map(|expr| format!(": {}", expr));
            join_label(&[Some("let"), identifier.as_deref()])
                .map(|label| Presentation::new(label, "let").with_detail(detail))
        }
        NodeKind::Param {
            name,
            inlined_value,
        } => {
            let detail = non_blank(inlined_value.as_deref())
                .map(|value| format!(": {}", value))
                .unwrap_or_default();
            join_label(&[Some("param"), name.as_deref()])
                .map(|label| Presentation::new(label, "param").with_detail(Some(detail)))
        }
        NodeKind::MsgBlock {
            tag_name,
            description,
        } => {
            let description = description.as_deref().unwrap_or("");
            Some(
                Presentation::new(tag_name_or(tag_name, "msg"), "msg")
                    .with_detail(Some(shorten(description, options))),
            )
        }
        NodeKind::AtDeclaration {
            at_kind,
            identifier,
            type_name,
            default_value,
        } => {
            let Some(identifier) = non_blank(identifier.as_deref()) else {
                tracing::trace!(
                    keyword = at_kind.keyword(),
                    "@-declaration without identifier is transparent"
                );
                return None;
            };

            let label = format!(
                "{} {}{}",
                at_kind.keyword(),
                identifier,
                type_and_default_suffix(type_name.as_deref(), default_value.as_deref())
            );
            Some(Presentation::new(shorten(&label, options), at_kind.keyword()))
        }
        NodeKind::TagBlock { tag_name } => non_blank(tag_name.as_deref())
            .map(|tag| Presentation::new(tag.to_lowercase(), "tag")),
        NodeKind::Other { .. } => None,
    }
}
