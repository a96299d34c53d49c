//! Diagnostic rendering for schema matching
//!
//! Stateless helpers that render candidate nodes and schema labels into
//! the short strings embedded in failure messages.

use crate::dom::Node;
use indexmap::IndexMap;

/// Longest quoted text rendering before truncation applies
const MAX_TEXT_RENDERING: usize = 15;

/// Number of leading characters kept when a text rendering is truncated
const TRUNCATED_TEXT_PREFIX: usize = 13;

/// Render a candidate node sequence as `[p,div,#text]`
///
/// Each entry is the node's tag name, or its reserved node name when it
/// has no tag. An empty sequence renders as `[]`.
pub fn render_node_list(nodes: &[Node]) -> String {
    let names: Vec<&str> = nodes.iter().map(|node| node.node_name()).collect();
    format!("[{}]", names.join(","))
}

/// Render a single candidate node
///
/// Tag nodes render as `<p class="y">` with attribute values quoted and
/// escaped. Text nodes render as `#text "value"` with long values
/// truncated. Anything else renders as its parenthesized node name.
pub fn render_node(node: &Node) -> String {
    if let Some(value) = node.value() {
        return format!("#text {}", render_text_value(value));
    }

    if let Some(tag_name) = node.tag_name() {
        let mut rendered = format!("<{}", tag_name);
        for attr in node.attrs() {
            rendered.push_str(&format!(" {}={:?}", attr.name, attr.value));
        }
        rendered.push('>');
        return rendered;
    }

    format!("({})", node.node_name())
}

/// Render a schema node label as `<Element name="p">`
///
/// Attribute values render verbatim, unlike candidate attributes.
pub fn render_schema_label(kind_name: &str, attrs: &IndexMap<String, String>) -> String {
    let mut label = format!("<{}", kind_name);
    for (name, value) in attrs {
        label.push_str(&format!(" {}=\"{}\"", name, value));
    }
    label.push('>');
    label
}

fn render_text_value(value: &str) -> String {
    let quoted = format!("{:?}", value);
    if quoted.chars().count() > MAX_TEXT_RENDERING {
        let prefix: String = quoted.chars().take(TRUNCATED_TEXT_PREFIX).collect();
        format!("{}…\"", prefix)
    } else {
        quoted
    }
}
