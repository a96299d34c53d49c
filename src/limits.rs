//! Limits and constraints for markup processing
//!
//! This module defines various limits to prevent resource exhaustion
//! when parsing untrusted markup into node trees.

use crate::error::{Error, Result};

/// Global limits configuration
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum nesting depth of a parsed node tree
    pub max_markup_depth: usize,

    /// Maximum markup input size in bytes
    pub max_markup_size: usize,

    /// Maximum number of attributes per element
    pub max_attributes: usize,

    /// Maximum nesting depth of a schema tree
    pub max_schema_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_markup_depth: 1000,
            max_markup_size: 100 * 1024 * 1024, // 100 MB
            max_attributes: 1000,
            max_schema_depth: 100,
        }
    }
}

impl Limits {
    /// Create a new Limits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create strict limits (more restrictive)
    pub fn strict() -> Self {
        Self {
            max_markup_depth: 100,
            max_markup_size: 10 * 1024 * 1024, // 10 MB
            max_attributes: 100,
            max_schema_depth: 20,
        }
    }

    /// Create permissive limits (less restrictive, use with caution)
    pub fn permissive() -> Self {
        Self {
            max_markup_depth: 10000,
            max_markup_size: 1024 * 1024 * 1024, // 1 GB
            max_attributes: 10000,
            max_schema_depth: 1000,
        }
    }

    /// Check if markup nesting depth is within limits
    pub fn check_markup_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_markup_depth {
            Err(Error::LimitExceeded(format!(
                "Markup depth {} exceeds maximum {}",
                depth, self.max_markup_depth
            )))
        } else {
            Ok(())
        }
    }

    /// Check if markup size is within limits
    pub fn check_markup_size(&self, size: usize) -> Result<()> {
        if size > self.max_markup_size {
            Err(Error::LimitExceeded(format!(
                "Markup size {} bytes exceeds maximum {} bytes",
                size, self.max_markup_size
            )))
        } else {
            Ok(())
        }
    }

    /// Check if number of attributes is within limits
    pub fn check_attributes(&self, count: usize) -> Result<()> {
        if count > self.max_attributes {
            Err(Error::LimitExceeded(format!(
                "Attribute count {} exceeds maximum {}",
                count, self.max_attributes
            )))
        } else {
            Ok(())
        }
    }

    /// Check if schema nesting depth is within limits
    pub fn check_schema_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_schema_depth {
            Err(Error::LimitExceeded(format!(
                "Schema depth {} exceeds maximum {}",
                depth, self.max_schema_depth
            )))
        } else {
            Ok(())
        }
    }
}
