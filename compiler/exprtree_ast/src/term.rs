//! The nested term tree built by the term scanner.

use std::fmt;

use exprtree_lexer::Operator;

/// Node category, without payload. Used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TermKind {
    /// A parenthesized group, or the implicit root
    Term,
    /// A numeric literal
    Number,
    /// A run of letters
    Identifier,
    /// One of `+ - * / =`
    Operator,
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TermKind::Term => "term",
            TermKind::Number => "number",
            TermKind::Identifier => "identifier",
            TermKind::Operator => "operator",
        };
        f.write_str(name)
    }
}

/// The payload carried by a term node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TermValue {
    /// Group node; its content lives in `children`
    Term,
    Number(f64),
    Identifier(String),
    Operator(Operator),
}

/// A node of the term tree.
///
/// Only `Term` nodes have children. A well-formed term alternates operands
/// and operators, starting and ending with an operand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TermNode {
    pub value: TermValue,
    /// Zero-based character offset of the node's first character
    pub position: usize,
    pub children: Vec<TermNode>,
}

impl TermNode {
    fn leaf(value: TermValue, position: usize) -> Self {
        Self {
            value,
            position,
            children: Vec::new(),
        }
    }

    /// An empty group starting at `position`
    pub fn term(position: usize) -> Self {
        Self::leaf(TermValue::Term, position)
    }

    pub fn number(value: f64, position: usize) -> Self {
        Self::leaf(TermValue::Number(value), position)
    }

    pub fn identifier(name: impl Into<String>, position: usize) -> Self {
        Self::leaf(TermValue::Identifier(name.into()), position)
    }

    pub fn operator(op: Operator, position: usize) -> Self {
        Self::leaf(TermValue::Operator(op), position)
    }

    /// Appends a child. Only meaningful on `Term` nodes.
    pub fn push(&mut self, child: TermNode) {
        debug_assert!(self.is_term(), "only term nodes own children");
        self.children.push(child);
    }

    pub fn kind(&self) -> TermKind {
        match self.value {
            TermValue::Term => TermKind::Term,
            TermValue::Number(_) => TermKind::Number,
            TermValue::Identifier(_) => TermKind::Identifier,
            TermValue::Operator(_) => TermKind::Operator,
        }
    }

    pub fn is_term(&self) -> bool {
        matches!(self.value, TermValue::Term)
    }

    pub fn is_operator(&self) -> bool {
        matches!(self.value, TermValue::Operator(_))
    }
}

impl fmt::Display for TermValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermValue::Term => f.write_str("()"),
            TermValue::Number(n) => write!(f, "{n}"),
            TermValue::Identifier(name) => f.write_str(name),
            TermValue::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// Writes the children of a group separated by spaces, nested groups in parentheses.
fn write_children(f: &mut fmt::Formatter<'_>, children: &[TermNode]) -> fmt::Result {
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        if child.is_term() {
            f.write_str("(")?;
            write_children(f, &child.children)?;
            f.write_str(")")?;
        } else {
            write!(f, "{}", child.value)?;
        }
    }
    Ok(())
}

/// Renders the node the way it would be written in source. The node itself is
/// treated as the root, so its own group gets no parentheses.
impl fmt::Display for TermNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_term() {
            write_children(f, &self.children)
        } else {
            write!(f, "{}", self.value)
        }
    }
}
