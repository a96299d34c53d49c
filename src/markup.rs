//! Markup parsing
//!
//! This module builds node trees and schema trees from well-formed
//! markup strings. Tags must be closed or self-closing;
//! whitespace-only text between tags is dropped. CDATA sections are
//! kept verbatim as text.

use indexmap::IndexMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::dom::{Attribute, Node};
use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::schema::{build_schema, Schema, SchemaNode};

/// Parse markup into a document fragment with default limits
pub fn parse_fragment(markup: &str) -> Result<Node> {
    parse_fragment_with_limits(markup, &Limits::default())
}

/// Parse markup into a document fragment
///
/// The fragment's children are the top-level sequence, in source order.
pub fn parse_fragment_with_limits(markup: &str, limits: &Limits) -> Result<Node> {
    limits.check_markup_size(markup.len())?;

    let mut reader = Reader::from_reader(markup.as_bytes());
    reader.trim_text(true);

    let mut fragment = Node::fragment(vec![]);
    let mut stack: Vec<Node> = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                limits.check_markup_depth(stack.len() + 1)?;
                let element = parse_element(&e, limits)?;
                stack.push(element);
            }
            Ok(Event::End(_)) => {
                if let Some(current) = stack.pop() {
                    if let Some(parent) = stack.last_mut() {
                        parent.add_child(current);
                    } else {
                        fragment.add_child(current);
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                limits.check_markup_depth(stack.len() + 1)?;
                let element = parse_element(&e, limits)?;
                if let Some(parent) = stack.last_mut() {
                    parent.add_child(element);
                } else {
                    fragment.add_child(element);
                }
            }
            Ok(Event::Text(e)) => {
                let text = e
                    .unescape()
                    .map_err(|e| Error::Markup(format!("Failed to unescape text: {}", e)))?
                    .to_string();
                if !text.trim().is_empty() {
                    let node = Node::text(text);
                    if let Some(parent) = stack.last_mut() {
                        parent.add_child(node);
                    } else {
                        fragment.add_child(node);
                    }
                }
            }
            Ok(Event::CData(e)) => {
                // Kept verbatim: no entity unescaping, no whitespace dropping.
                let text = std::str::from_utf8(&e)
                    .map_err(|e| Error::Markup(format!("Invalid CDATA content: {}", e)))?
                    .to_string();
                let node = Node::text(text);
                if let Some(parent) = stack.last_mut() {
                    parent.add_child(node);
                } else {
                    fragment.add_child(node);
                }
            }
            Ok(Event::Eof) => {
                if let Some(unclosed) = stack.first() {
                    return Err(Error::Markup(format!(
                        "Unclosed tag '{}' at end of markup.",
                        unclosed.node_name()
                    )));
                }
                break;
            }
            Err(e) => {
                return Err(Error::Markup(format!(
                    "Error parsing markup at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {} // Ignore other events (comments, processing instructions, etc.)
        }
        buf.clear();
    }

    Ok(fragment)
}

/// Parse a schema literal with default limits
pub fn parse_schema(markup: &str) -> Result<Schema> {
    parse_schema_with_limits(markup, &Limits::default())
}

/// Parse a schema literal such as `<Schema><Element name="p"/></Schema>`
///
/// The markup must contain a single root tag that constructs to the
/// schema root kind. Construction failures inside the literal surface
/// as [`Error::Construction`].
pub fn parse_schema_with_limits(markup: &str, limits: &Limits) -> Result<Schema> {
    let fragment = parse_fragment_with_limits(markup, limits)?;

    let root = match fragment.children.as_slice() {
        [root] => root,
        [] => return Err(Error::Markup("Schema markup is empty.".to_string())),
        _ => {
            return Err(Error::Markup(
                "Schema markup must have a single root tag.".to_string(),
            ))
        }
    };

    match build_from_node(root, 1, limits)? {
        SchemaNode::Schema(schema) => Ok(schema),
        other => Err(Error::Markup(format!(
            "Schema markup must be rooted in a <Schema> tag, found {}.",
            other.label()
        ))),
    }
}

/// Parse tag name and attributes from a start event
fn parse_element(start: &BytesStart, limits: &Limits) -> Result<Node> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| Error::Markup(format!("Invalid tag name: {}", e)))?
        .to_string();

    let mut attrs = Vec::new();
    for attr_result in start.attributes() {
        let attr =
            attr_result.map_err(|e| Error::Markup(format!("Failed to parse attribute: {}", e)))?;

        let attr_name = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| Error::Markup(format!("Invalid attribute name: {}", e)))?
            .to_string();

        let attr_value = attr
            .unescape_value()
            .map_err(|e| Error::Markup(format!("Failed to unescape attribute value: {}", e)))?
            .to_string();

        attrs.push(Attribute::new(attr_name, attr_value));
    }
    limits.check_attributes(attrs.len())?;

    Ok(Node::element(name, attrs, vec![]))
}

/// Convert a parsed tag tree into schema nodes, depth-first
fn build_from_node(node: &Node, depth: usize, limits: &Limits) -> Result<SchemaNode> {
    limits.check_schema_depth(depth)?;

    let tag = match node.tag_name() {
        Some(tag) => tag,
        None => {
            return Err(Error::Markup(format!(
                "Unexpected '{}' node in schema markup.",
                node.node_name()
            )))
        }
    };

    let mut children = Vec::with_capacity(node.children.len());
    for child in &node.children {
        children.push(Ok(build_from_node(child, depth + 1, limits)?));
    }

    let attrs = if node.attrs().is_empty() {
        None
    } else {
        let mut map = IndexMap::new();
        for attr in node.attrs() {
            map.insert(attr.name.clone(), attr.value.clone());
        }
        Some(map)
    };

    Ok(build_schema(tag, attrs, children)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_fragment() {
        let fragment = parse_fragment("").unwrap();
        assert!(fragment.is_fragment());
        assert!(fragment.children.is_empty());
    }

    #[test]
    fn test_parse_top_level_sequence() {
        let fragment = parse_fragment("<p/><div></div><span/>").unwrap();

        let names: Vec<&str> = fragment
            .children
            .iter()
            .map(|node| node.node_name())
            .collect();
        assert_eq!(names, vec!["p", "div", "span"]);
    }

    #[test]
    fn test_parse_nested_tags_and_text() {
        let fragment = parse_fragment("<p>some text<span>fancy</span></p>").unwrap();

        assert_eq!(fragment.children.len(), 1);
        let p = &fragment.children[0];
        assert_eq!(p.node_name(), "p");
        assert_eq!(p.children.len(), 2);
        assert_eq!(p.children[0].value(), Some("some text"));
        assert_eq!(p.children[1].node_name(), "span");
        assert_eq!(p.children[1].children[0].value(), Some("fancy"));
    }

    #[test]
    fn test_whitespace_between_tags_is_dropped() {
        let fragment = parse_fragment("<p>\n\t<span/>\n</p>").unwrap();

        let p = &fragment.children[0];
        assert_eq!(p.children.len(), 1);
        assert_eq!(p.children[0].node_name(), "span");
    }

    #[test]
    fn test_attributes_preserve_order() {
        let fragment = parse_fragment(r#"<img src="a.png" alt="a" width="10"/>"#).unwrap();

        let img = &fragment.children[0];
        let names: Vec<&str> = img.attrs().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["src", "alt", "width"]);
        assert_eq!(img.attrs()[0].value, "a.png");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let fragment = parse_fragment("<p>a &amp; b</p>").unwrap();
        assert_eq!(fragment.children[0].children[0].value(), Some("a & b"));
    }

    #[test]
    fn test_cdata_becomes_a_text_node() {
        let fragment = parse_fragment("<p><![CDATA[x + y]]></p>").unwrap();

        let p = &fragment.children[0];
        assert_eq!(p.children.len(), 1);
        assert_eq!(p.children[0].value(), Some("x + y"));
    }

    #[test]
    fn test_cdata_is_not_unescaped() {
        let fragment = parse_fragment("<p><![CDATA[a &amp; b]]></p>").unwrap();
        assert_eq!(fragment.children[0].children[0].value(), Some("a &amp; b"));
    }

    #[test]
    fn test_malformed_markup_is_an_error() {
        let err = parse_fragment("<p><div></p></div>").unwrap_err();
        assert!(matches!(err, Error::Markup(_)));
    }

    #[test]
    fn test_unclosed_tag_at_end_of_markup_is_an_error() {
        let err = parse_fragment("<p/><div>").unwrap_err();
        assert_eq!(
            err.to_string(),
            "markup error: Unclosed tag 'div' at end of markup."
        );

        let err = parse_fragment("<p>").unwrap_err();
        assert!(matches!(err, Error::Markup(_)));
    }

    #[test]
    fn test_unclosed_nested_tags_name_the_outermost() {
        let err = parse_fragment("<article><h1>").unwrap_err();
        assert_eq!(
            err.to_string(),
            "markup error: Unclosed tag 'article' at end of markup."
        );
    }

    #[test]
    fn test_markup_size_limit() {
        let limits = Limits {
            max_markup_size: 8,
            ..Limits::default()
        };

        let err = parse_fragment_with_limits("<p>overflowing</p>", &limits).unwrap_err();
        assert!(matches!(err, Error::LimitExceeded(_)));
    }

    #[test]
    fn test_markup_depth_limit() {
        let limits = Limits {
            max_markup_depth: 2,
            ..Limits::default()
        };

        assert!(parse_fragment_with_limits("<p><span/></p>", &limits).is_ok());

        let err = parse_fragment_with_limits("<p><span><em/></span></p>", &limits).unwrap_err();
        assert!(matches!(err, Error::LimitExceeded(_)));
    }

    #[test]
    fn test_parse_schema_literal() {
        let schema = parse_schema(r#"<Schema><Element name="p"/></Schema>"#).unwrap();
        let fragment = parse_fragment("<p/>").unwrap();

        assert!(schema.validate_fragment(&fragment).is_ok());
    }

    #[test]
    fn test_parse_nested_schema_literal() {
        let schema = parse_schema(
            r#"
            <Schema>
                <Element name="p">
                    <Element name="div|span"/>
                </Element>
            </Schema>
            "#,
        )
        .unwrap();

        let fragment = parse_fragment("<p><span/></p>").unwrap();
        assert!(schema.validate_fragment(&fragment).is_ok());
    }

    #[test]
    fn test_schema_literal_construction_errors_surface() {
        let err = parse_schema("<Schema></Schema>").unwrap_err();
        assert_eq!(
            err.to_string(),
            "construction error: <Schema> must have children."
        );
    }

    #[test]
    fn test_schema_literal_child_errors_surface_depth_first() {
        // The tag tree converts bottom-up, so a bad child is reported
        // before its parent's own tag is even looked up.
        let err = parse_schema(r#"<Widget><Element name="p2"/></Widget>"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "construction error: \
             <Element> names must be one or more HTML tag names separated by '|'."
        );
    }

    #[test]
    fn test_schema_literal_requires_a_schema_root() {
        let err = parse_schema(r#"<Element name="p"/>"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "markup error: Schema markup must be rooted in a <Schema> tag, \
             found <Element name=\"p\">."
        );
    }

    #[test]
    fn test_schema_literal_rejects_text() {
        let err = parse_schema(r#"<Schema>stray<Element name="p"/></Schema>"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "markup error: Unexpected '#text' node in schema markup."
        );
    }

    #[test]
    fn test_schema_literal_rejects_multiple_roots() {
        let err = parse_schema(r#"<Schema><Element name="p"/></Schema><p/>"#).unwrap_err();
        assert!(matches!(err, Error::Markup(_)));
    }

    #[test]
    fn test_schema_literal_rejects_empty_markup() {
        let err = parse_schema("  ").unwrap_err();
        assert!(matches!(err, Error::Markup(_)));
    }

    #[test]
    fn test_schema_depth_limit() {
        let limits = Limits {
            max_schema_depth: 2,
            ..Limits::default()
        };

        let markup = r#"
            <Schema>
                <Element name="p">
                    <Element name="span"/>
                </Element>
            </Schema>
        "#;
        let err = parse_schema_with_limits(markup, &limits).unwrap_err();
        assert!(matches!(err, Error::LimitExceeded(_)));
    }
}
