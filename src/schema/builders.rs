//! Schema construction
//!
//! The registry-driven construction protocol: a tag identifier, an
//! optional attribute map, and already-built children produce either a
//! schema node or a construction failure. Failures are ordinary values,
//! so a whole schema literal can be built in one expression and checked
//! once at the root.

use indexmap::IndexMap;

use crate::error::ConstructionError;
use crate::schema::base::SchemaNode;
use crate::schema::elements::Element;
use crate::schema::schemas::Schema;

/// Result of building one schema node
pub type BuildResult = std::result::Result<SchemaNode, ConstructionError>;

/// Build a schema node from a tag identifier, attributes, and children
///
/// `Schema` and `Element` resolve to the registered kinds. An identifier
/// starting with a lowercase letter is shorthand for an `Element`
/// matching that tag name. Any other identifier is a construction
/// failure. A failed child is returned as the overall result before this
/// node's constructor runs, so the first failure propagates unchanged to
/// the root of a literal tree.
pub fn build_schema(
    tag: &str,
    attrs: Option<IndexMap<String, String>>,
    children: Vec<BuildResult>,
) -> BuildResult {
    if starts_lowercase(tag) {
        // Shorthand for an element matching this tag name. A supplied
        // `name` attribute overrides the preset value but keeps its slot.
        let mut merged = IndexMap::new();
        merged.insert("name".to_string(), tag.to_string());
        if let Some(attrs) = attrs {
            for (name, value) in attrs {
                merged.insert(name, value);
            }
        }
        return build_schema("Element", Some(merged), children);
    }

    if tag != "Schema" && tag != "Element" {
        return Err(ConstructionError::new(format!(
            "Invalid schema tag name: {}",
            tag
        )));
    }

    let mut nodes = Vec::with_capacity(children.len());
    for child in children {
        nodes.push(child?);
    }

    if tag == "Schema" {
        Ok(SchemaNode::Schema(Schema::new(attrs, nodes)?))
    } else {
        Ok(SchemaNode::Element(Element::new(attrs, nodes)?))
    }
}

fn starts_lowercase(tag: &str) -> bool {
    tag.chars().next().map_or(false, |c| c.is_ascii_lowercase())
}
