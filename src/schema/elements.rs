//! Element matcher kind
//!
//! Matches a single tag node whose tag name is one of a set of accepted
//! alternatives.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::dom::Node;
use crate::error::ConstructionError;
use crate::schema::base::{Outcome, SchemaNode, SchemaTag};

static NAME_ALTERNATIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]+$").unwrap());

/// Matcher for a single tag node
///
/// Carries exactly one attribute, `name`, whose value is a `|`-delimited
/// set of accepted tag names. Matching is case-insensitive on the
/// candidate's tag; candidate attributes are never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    attrs: IndexMap<String, String>,
    children: Vec<SchemaNode>,
    name_choices: Vec<String>,
}

impl Element {
    /// Create an element matcher
    ///
    /// Fails without a `name` attribute, with any other attribute, or
    /// when any `|`-separated alternative in `name` is not one or more
    /// lowercase letters.
    pub fn new(
        attrs: Option<IndexMap<String, String>>,
        children: Vec<SchemaNode>,
    ) -> Result<Self, ConstructionError> {
        let attrs = attrs.unwrap_or_default();

        let name = match attrs.get("name") {
            Some(name) => name.clone(),
            None => {
                return Err(ConstructionError::new(
                    "<Element> must have a 'name' attribute.",
                ))
            }
        };

        let bad_attrs: Vec<&str> = attrs
            .keys()
            .filter(|key| key.as_str() != "name")
            .map(|key| key.as_str())
            .collect();
        if !bad_attrs.is_empty() {
            return Err(ConstructionError::new(format!(
                "Invalid <Element> attribute(s): {}",
                bad_attrs.join(",")
            )));
        }

        let name_choices: Vec<String> = name.split('|').map(str::to_string).collect();
        for choice in &name_choices {
            if !NAME_ALTERNATIVE.is_match(choice) {
                return Err(ConstructionError::new(
                    "<Element> names must be one or more HTML tag names separated by '|'.",
                ));
            }
        }

        Ok(Self {
            attrs,
            children,
            name_choices,
        })
    }

    /// Accepted tag-name alternatives, in declaration order
    pub fn name_choices(&self) -> &[String] {
        &self.name_choices
    }
}

impl SchemaTag for Element {
    fn kind_name(&self) -> &'static str {
        "Element"
    }

    fn attrs(&self) -> &IndexMap<String, String> {
        &self.attrs
    }

    fn children(&self) -> &[SchemaNode] {
        &self.children
    }

    fn match_nodes(&self, nodes: &[Node]) -> Outcome {
        if nodes.len() != 1 {
            return Err(self.failure_for_nodes(
                nodes,
                format!("Expected a single HTML element but found {}.", nodes.len()),
            ));
        }

        let node = &nodes[0];
        let tag_name = match node.tag_name() {
            Some(tag_name) => tag_name.to_lowercase(),
            None => {
                return Err(self.failure_for_node(
                    node,
                    format!(
                        "Expected an HTML element with a tagName but found a '{}'.",
                        node.node_name()
                    ),
                ))
            }
        };

        if !self.name_choices.iter().any(|choice| *choice == tag_name) {
            let choices = self.name_choices.join("', '");
            let message = if self.name_choices.len() == 1 {
                format!("tagName is not '{}'", choices)
            } else {
                format!("tagName does not match one of '{}'", choices)
            };
            return Err(self.failure_for_node(node, message));
        }

        Ok(())
    }
}
