//! Tree representations of arithmetic expressions.
//!
//! This crate defines the two trees produced by the parsing strategies: the
//! nested [`TermNode`] built by the term scanner and the strictly binary
//! [`BinaryExprNode`] folded from postfix tokens. It also provides a visitor
//! over term trees and the one-way [`Render`] transform used by diagram
//! front ends.

pub mod binary;
pub mod display;
pub mod term;
pub mod visit;

// Re-export commonly used types
pub use binary::BinaryExprNode;
pub use display::{DisplayNode, Render};
pub use term::{TermKind, TermNode, TermValue};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use std::error::Error;

/// A result type for AST operations.
#[cfg(feature = "serde")]
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// Serializes a tree to a JSON string.
///
/// # Example
///
/// ```
/// use exprtree_ast::{to_json, BinaryExprNode};
///
/// let tree = BinaryExprNode::apply("+", BinaryExprNode::leaf("1"), BinaryExprNode::leaf("2"));
/// let json = to_json(&tree).unwrap();
/// assert!(json.contains(r#""operator": "+""#));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes a tree from a JSON string.
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}
