//! Strictly binary expression trees folded from postfix tokens.

use std::fmt;
use std::mem;

use exprtree_lexer::{Token, TokenType};

/// A node of a binary expression tree.
///
/// A node is either a numeric leaf or an operator applied to exactly two
/// subtrees. Unary and ternary shapes cannot be represented.
///
/// Flat input such as `1+1+...+1` folds into a chain as deep as the operand
/// count, so traversal, formatting and drop all use an explicit stack. The
/// derived `Clone`, `PartialEq`, `Hash` and serde impls still recurse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum BinaryExprNode {
    Leaf {
        value: String,
    },
    Apply {
        operator: String,
        left: Box<BinaryExprNode>,
        right: Box<BinaryExprNode>,
    },
}

impl BinaryExprNode {
    pub fn leaf(value: impl Into<String>) -> Self {
        BinaryExprNode::Leaf {
            value: value.into(),
        }
    }

    pub fn apply(operator: impl Into<String>, left: BinaryExprNode, right: BinaryExprNode) -> Self {
        BinaryExprNode::Apply {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The leaf's numeral or the operator text
    pub fn value(&self) -> &str {
        match self {
            BinaryExprNode::Leaf { value } => value,
            BinaryExprNode::Apply { operator, .. } => operator,
        }
    }

    pub fn node_type(&self) -> TokenType {
        match self {
            BinaryExprNode::Leaf { .. } => TokenType::Number,
            BinaryExprNode::Apply { .. } => TokenType::Operator,
        }
    }

    pub fn left(&self) -> Option<&BinaryExprNode> {
        match self {
            BinaryExprNode::Leaf { .. } => None,
            BinaryExprNode::Apply { left, .. } => Some(left),
        }
    }

    pub fn right(&self) -> Option<&BinaryExprNode> {
        match self {
            BinaryExprNode::Leaf { .. } => None,
            BinaryExprNode::Apply { right, .. } => Some(right),
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.postorder()
            .filter(|node| matches!(node, BinaryExprNode::Leaf { .. }))
            .count()
    }

    /// Nodes in postfix order: left subtree, right subtree, then the node.
    pub fn postorder(&self) -> impl Iterator<Item = &BinaryExprNode> + '_ {
        let mut pending = vec![(self, false)];
        std::iter::from_fn(move || {
            while let Some((node, expanded)) = pending.pop() {
                match node {
                    BinaryExprNode::Apply { left, right, .. } if !expanded => {
                        pending.push((node, true));
                        pending.push((&**right, false));
                        pending.push((&**left, false));
                    }
                    _ => return Some(node),
                }
            }
            None
        })
    }

    /// Re-emits the tree in postfix order: left subtree, right subtree, operator.
    pub fn postfix_tokens(&self) -> Vec<Token> {
        self.postorder()
            .map(|node| Token::new(node.value(), node.node_type()))
            .collect()
    }

    /// Moves non-leaf children into `detached`, leaving empty leaves behind.
    fn detach_children(&mut self, detached: &mut Vec<BinaryExprNode>) {
        if let BinaryExprNode::Apply { left, right, .. } = self {
            for child in [left, right] {
                if matches!(**child, BinaryExprNode::Apply { .. }) {
                    let subtree = mem::replace(&mut **child, BinaryExprNode::leaf(String::new()));
                    detached.push(subtree);
                }
            }
        }
    }
}

impl Drop for BinaryExprNode {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        self.detach_children(&mut detached);
        while let Some(mut node) = detached.pop() {
            node.detach_children(&mut detached);
        }
    }
}

enum Piece<'a> {
    Node(&'a BinaryExprNode),
    Operator(&'a str),
    Close,
}

/// Fully parenthesized infix form, e.g. `(3 + (4 * 2))`.
impl fmt::Display for BinaryExprNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Node(BinaryExprNode::Leaf { value }) => f.write_str(value)?,
                Piece::Node(BinaryExprNode::Apply {
                    operator,
                    left,
                    right,
                }) => {
                    f.write_str("(")?;
                    pending.push(Piece::Close);
                    pending.push(Piece::Node(&**right));
                    pending.push(Piece::Operator(operator));
                    pending.push(Piece::Node(&**left));
                }
                Piece::Operator(operator) => write!(f, " {operator} ")?,
                Piece::Close => f.write_str(")")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exprtree_lexer::join_tokens;
    use pretty_assertions::assert_eq;

    fn sample() -> BinaryExprNode {
        BinaryExprNode::apply(
            "+",
            BinaryExprNode::leaf("3"),
            BinaryExprNode::apply("*", BinaryExprNode::leaf("4"), BinaryExprNode::leaf("2")),
        )
    }

    #[test]
    fn test_accessors() {
        let tree = sample();
        assert_eq!(tree.value(), "+");
        assert_eq!(tree.node_type(), TokenType::Operator);
        assert_eq!(tree.left(), Some(&BinaryExprNode::leaf("3")));
        assert_eq!(tree.right().map(|r| r.value()), Some("*"));
        assert_eq!(BinaryExprNode::leaf("3").left(), None);
        assert_eq!(tree.leaf_count(), 3);
    }

    /// `1 + 1 + ... + 1` folded left to right.
    fn left_chain(operands: usize) -> BinaryExprNode {
        let mut tree = BinaryExprNode::leaf("1");
        for _ in 1..operands {
            tree = BinaryExprNode::apply("+", tree, BinaryExprNode::leaf("1"));
        }
        tree
    }

    #[test]
    fn test_deep_chain_traversals() {
        let tree = left_chain(200_000);
        assert_eq!(tree.leaf_count(), 200_000);
        assert_eq!(tree.postfix_tokens().len(), 399_999);

        let infix = tree.to_string();
        assert!(infix.starts_with("((((1 + 1) + 1)"));
        assert!(infix.ends_with(" + 1)"));
        drop(tree);
    }

    #[test]
    fn test_postorder_visits_root_last() {
        let tree = sample();
        let order: Vec<_> = tree.postorder().map(BinaryExprNode::value).collect();
        assert_eq!(order, vec!["3", "4", "2", "*", "+"]);
    }

    #[test]
    fn test_postfix_and_display() {
        let tree = sample();
        assert_eq!(join_tokens(&tree.postfix_tokens()), "3 4 2 * +");
        assert_eq!(tree.to_string(), "(3 + (4 * 2))");
    }
}
