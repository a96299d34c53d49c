//! Base schema-tag infrastructure
//!
//! This module provides the foundation shared by all schema node kinds:
//! the [`SchemaTag`] trait with the recursive structural matcher, and the
//! [`SchemaNode`] sum type that schema trees are built from.

use std::fmt;

use indexmap::IndexMap;

use crate::dom::Node;
use crate::error::ValidationFailure;
use crate::schema::elements::Element;
use crate::schema::format;
use crate::schema::schemas::Schema;

/// Result of matching candidate nodes against a schema tree
pub type Outcome = std::result::Result<(), ValidationFailure>;

/// Base trait for all schema node kinds
///
/// Every kind supplies its diagnostic name, its construction attributes,
/// its child matchers, and [`match_nodes`](SchemaTag::match_nodes), which
/// validates a candidate sequence WITHOUT descending into candidate
/// children. The provided
/// [`match_against_children`](SchemaTag::match_against_children) drives
/// the recursion.
pub trait SchemaTag: fmt::Debug {
    /// Kind name used in diagnostics, e.g. `Schema` or `Element`
    fn kind_name(&self) -> &'static str;

    /// Ordered attributes supplied at construction
    fn attrs(&self) -> &IndexMap<String, String>;

    /// Ordered child matchers
    fn children(&self) -> &[SchemaNode];

    /// Match a candidate sequence against this node alone
    ///
    /// Candidate children are not inspected here; the recursion over them
    /// belongs to [`match_against_children`](SchemaTag::match_against_children).
    fn match_nodes(&self, nodes: &[Node]) -> Outcome;

    /// Short label for failure messages, e.g. `<Element name="p">`
    fn label(&self) -> String {
        format::render_schema_label(self.kind_name(), self.attrs())
    }

    /// Build a failure citing a candidate sequence
    fn failure_for_nodes(&self, nodes: &[Node], message: String) -> ValidationFailure {
        ValidationFailure::new(self.label(), format::render_node_list(nodes), message)
    }

    /// Build a failure citing a single candidate node
    fn failure_for_node(&self, node: &Node, message: String) -> ValidationFailure {
        ValidationFailure::new(self.label(), format::render_node(node), message)
    }

    /// Match a candidate sequence against this node's children
    ///
    /// A lone schema child matches the entire sequence as a group before
    /// recursing into each candidate. Two or more schema children pair
    /// with candidates positionally, one each, with no backtracking: the
    /// first failure is returned as found, even when a different pairing
    /// could have succeeded.
    fn match_against_children(&self, nodes: &[Node]) -> Outcome {
        let children = self.children();

        // Degenerate case: 0 candidate nodes; 0 schema children
        if nodes.is_empty() && children.is_empty() {
            return Ok(());
        }

        // Degenerate case: 1+ candidate nodes; 0 schema children
        if !nodes.is_empty() && children.is_empty() {
            return Err(self.failure_for_nodes(
                nodes,
                "Schema element has no children, but child HTML elements found.".to_string(),
            ));
        }

        // Degenerate case: 1 schema child
        if children.len() == 1 {
            let child = children[0].as_tag();
            child.match_nodes(nodes)?;
            for node in nodes {
                child.match_against_children(&node.children)?;
            }
            return Ok(());
        }

        // Otherwise, expect 1 candidate node per schema child.
        if children.len() != nodes.len() {
            return Err(self.failure_for_nodes(
                nodes,
                format!(
                    "{} schema elements !== {} child nodes",
                    children.len(),
                    nodes.len()
                ),
            ));
        }

        for (child, node) in children.iter().zip(nodes) {
            let child = child.as_tag();
            child.match_nodes(std::slice::from_ref(node))?;
            child.match_against_children(&node.children)?;
        }

        Ok(())
    }
}

/// Node in a schema tree
///
/// The set of kinds is closed: schema trees are built from the registered
/// kinds only, via [`build_schema`](crate::schema::build_schema) or the
/// kind constructors directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    /// Validation entry point
    Schema(Schema),
    /// Tag-name matcher
    Element(Element),
}

impl SchemaNode {
    /// View this node through the common tag interface
    pub fn as_tag(&self) -> &dyn SchemaTag {
        match self {
            SchemaNode::Schema(schema) => schema,
            SchemaNode::Element(element) => element,
        }
    }

    /// Kind name used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        self.as_tag().kind_name()
    }

    /// Short label for failure messages
    pub fn label(&self) -> String {
        self.as_tag().label()
    }

    /// Match a candidate sequence against this node alone
    pub fn match_nodes(&self, nodes: &[Node]) -> Outcome {
        self.as_tag().match_nodes(nodes)
    }

    /// Match a candidate sequence against this node's children
    pub fn match_against_children(&self, nodes: &[Node]) -> Outcome {
        self.as_tag().match_against_children(nodes)
    }
}
