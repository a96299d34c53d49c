//! Schema root kind
//!
//! The root of every schema tree and the entry point for validation.

use indexmap::IndexMap;

use crate::dom::Node;
use crate::error::ConstructionError;
use crate::schema::base::{Outcome, SchemaNode, SchemaTag};

/// Validation entry point of a schema tree
///
/// A root carries no attributes and owns at least one child matcher. It
/// matches any candidate sequence itself; all structure checking happens
/// through its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    attrs: IndexMap<String, String>,
    children: Vec<SchemaNode>,
}

impl Schema {
    /// Create a schema root
    ///
    /// Fails if attributes are supplied (even an empty map) or if there
    /// are no children.
    pub fn new(
        attrs: Option<IndexMap<String, String>>,
        children: Vec<SchemaNode>,
    ) -> Result<Self, ConstructionError> {
        if attrs.is_some() {
            return Err(ConstructionError::new("<Schema> must not have attributes."));
        }

        if children.is_empty() {
            return Err(ConstructionError::new("<Schema> must have children."));
        }

        Ok(Self {
            attrs: IndexMap::new(),
            children,
        })
    }

    /// Validate a document fragment's children against this schema
    pub fn validate_fragment(&self, fragment: &Node) -> Outcome {
        self.match_against_children(&fragment.children)
    }

    /// Validate a sequence of nodes against this schema
    pub fn validate_nodes(&self, nodes: &[Node]) -> Outcome {
        self.match_against_children(nodes)
    }

    /// Validate a single node against this schema
    pub fn validate_node(&self, node: &Node) -> Outcome {
        self.validate_nodes(std::slice::from_ref(node))
    }
}

impl SchemaTag for Schema {
    fn kind_name(&self) -> &'static str {
        "Schema"
    }

    fn attrs(&self) -> &IndexMap<String, String> {
        &self.attrs
    }

    fn children(&self) -> &[SchemaNode] {
        &self.children
    }

    fn match_nodes(&self, _nodes: &[Node]) -> Outcome {
        Ok(())
    }
}
