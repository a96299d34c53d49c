//! DOM-like node trees
//!
//! This module provides the lightweight document model that schema trees
//! validate: tag nodes with ordered attributes, text nodes, and document
//! fragments. The reserved node names `#text` and `#document-fragment`
//! mark the two non-tag kinds.

/// Node name reserved for text nodes
pub const TEXT_NODE_NAME: &str = "#text";

/// Node name reserved for document fragments
pub const FRAGMENT_NODE_NAME: &str = "#document-fragment";

/// A single attribute on an element node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name
    pub name: String,
    /// Attribute value
    pub value: String,
}

impl Attribute {
    /// Create a new attribute
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The kind of a node: exactly one of element, text, or fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Tag node
    Element {
        /// Tag name as supplied; the matcher compares it case-insensitively
        tag_name: String,
        /// Ordered attributes; irrelevant to matching, used in diagnostics
        attrs: Vec<Attribute>,
    },
    /// Text node
    Text {
        /// The textual content
        value: String,
    },
    /// Document fragment: a nameless container for a top-level sequence
    Fragment,
}

/// Node in a DOM-like tree
///
/// Child order is semantically significant: the structural matcher pairs
/// candidate nodes with schema children positionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// What the node is
    pub kind: NodeKind,
    /// Ordered child nodes
    pub children: Vec<Node>,
}

impl Node {
    /// Create an element node
    pub fn element(
        tag_name: impl Into<String>,
        attrs: Vec<Attribute>,
        children: Vec<Node>,
    ) -> Self {
        Self {
            kind: NodeKind::Element {
                tag_name: tag_name.into(),
                attrs,
            },
            children,
        }
    }

    /// Create a text node
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text {
                value: value.into(),
            },
            children: Vec::new(),
        }
    }

    /// Create a document fragment
    pub fn fragment(children: Vec<Node>) -> Self {
        Self {
            kind: NodeKind::Fragment,
            children,
        }
    }

    /// Get the node name: the tag name for elements, a sentinel otherwise
    pub fn node_name(&self) -> &str {
        match &self.kind {
            NodeKind::Element { tag_name, .. } => tag_name,
            NodeKind::Text { .. } => TEXT_NODE_NAME,
            NodeKind::Fragment => FRAGMENT_NODE_NAME,
        }
    }

    /// Get the tag name, present only for element nodes
    pub fn tag_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { tag_name, .. } => Some(tag_name),
            _ => None,
        }
    }

    /// Get the text content, present only for text nodes
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { value } => Some(value),
            _ => None,
        }
    }

    /// Get the ordered attributes (empty for non-element nodes)
    pub fn attrs(&self) -> &[Attribute] {
        match &self.kind {
            NodeKind::Element { attrs, .. } => attrs,
            _ => &[],
        }
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element { .. })
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text { .. })
    }

    /// Check if this is a fragment node
    pub fn is_fragment(&self) -> bool {
        matches!(self.kind, NodeKind::Fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_node() {
        let node = Node::element(
            "p",
            vec![Attribute::new("class", "y")],
            vec![Node::text("hello")],
        );

        assert_eq!(node.node_name(), "p");
        assert_eq!(node.tag_name(), Some("p"));
        assert!(node.value().is_none());
        assert_eq!(node.attrs().len(), 1);
        assert_eq!(node.attrs()[0].name, "class");
        assert_eq!(node.children.len(), 1);
        assert!(node.is_element());
    }

    #[test]
    fn test_text_node() {
        let node = Node::text("some content");

        assert_eq!(node.node_name(), TEXT_NODE_NAME);
        assert!(node.tag_name().is_none());
        assert_eq!(node.value(), Some("some content"));
        assert!(node.attrs().is_empty());
        assert!(node.children.is_empty());
        assert!(node.is_text());
    }

    #[test]
    fn test_fragment_node() {
        let node = Node::fragment(vec![Node::element("p", vec![], vec![])]);

        assert_eq!(node.node_name(), FRAGMENT_NODE_NAME);
        assert!(node.tag_name().is_none());
        assert!(node.value().is_none());
        assert_eq!(node.children.len(), 1);
        assert!(node.is_fragment());
    }

    #[test]
    fn test_add_child() {
        let mut node = Node::element("div", vec![], vec![]);
        node.add_child(Node::text("a"));
        node.add_child(Node::element("span", vec![], vec![]));

        assert_eq!(node.children.len(), 2);
        assert!(node.children[0].is_text());
        assert_eq!(node.children[1].node_name(), "span");
    }

    #[test]
    fn test_attribute_order_preserved() {
        let node = Node::element(
            "img",
            vec![
                Attribute::new("src", "a.png"),
                Attribute::new("alt", "a"),
                Attribute::new("width", "10"),
            ],
            vec![],
        );

        let names: Vec<&str> = node.attrs().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["src", "alt", "width"]);
    }
}
