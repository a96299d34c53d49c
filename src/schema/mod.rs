//! Schema model and structural matcher
//!
//! This module contains the schema node kinds, the construction
//! protocol, and the recursive matcher that validates node trees.

pub mod base;
pub mod builders;
pub mod elements;
pub mod format;
pub mod schemas;

// Re-exports
pub use base::{Outcome, SchemaNode, SchemaTag};
pub use builders::{build_schema, BuildResult};
pub use elements::Element;
pub use schemas::Schema;
