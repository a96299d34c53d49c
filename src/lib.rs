//! # domschema
//!
//! Declarative schema definitions and structural validation for DOM-like
//! node trees.
//!
//! A schema is an immutable tree of matchers built once from a literal.
//! Validating a candidate tree walks both trees together and reports the
//! first structural mismatch with a readable message naming the schema
//! node and the offending candidates. Construction failures are ordinary
//! values too, so a malformed schema literal is diagnosed at the point
//! the schema is built, not when it is used.
//!
//! ## Features
//!
//! - Schema trees built from literals, with construction failures as values
//! - Recursive structural matching with positional child pairing
//! - Tag-name alternatives (`name="p|div"`), matched case-insensitively
//! - Markup front end for candidate fragments and schema literals
//! - Protection against markup resource exhaustion
//!
//! ## Example
//!
//! ```rust
//! use domschema::markup;
//!
//! let schema = markup::parse_schema(
//!     r#"<Schema><Element name="p|div"/></Schema>"#,
//! ).unwrap();
//!
//! let fragment = markup::parse_fragment("<div/>").unwrap();
//! assert!(schema.validate_fragment(&fragment).is_ok());
//!
//! let fragment = markup::parse_fragment("<span/>").unwrap();
//! let failure = schema.validate_fragment(&fragment).unwrap_err();
//! assert_eq!(
//!     failure.to_string(),
//!     "<Element name=\"p|div\"> at <span>: tagName does not match one of 'p', 'div'",
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod dom;
pub mod error;
pub mod limits;

// Schema model and matching
pub mod schema;

// Markup front end
pub mod markup;

// Re-exports for convenience
pub use dom::{Attribute, Node, NodeKind, FRAGMENT_NODE_NAME, TEXT_NODE_NAME};
pub use error::{ConstructionError, Error, Result, ValidationFailure};
pub use limits::Limits;
pub use schema::{build_schema, BuildResult, Element, Outcome, Schema, SchemaNode, SchemaTag};

/// Version of the domschema library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
