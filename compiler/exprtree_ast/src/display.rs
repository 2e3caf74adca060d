//! One-way transform from trees to a diagram-friendly structure.
//!
//! Parsing never calls into this module; front ends that draw trees do.

use std::mem;

use crate::binary::BinaryExprNode;
use crate::term::{TermNode, TermValue};

/// Class given to operator nodes
pub const CLASS_OPERATOR: &str = "op";
/// Class given to numeric leaves
pub const CLASS_NUMBER: &str = "num";
/// Class given to identifier leaves
pub const CLASS_IDENTIFIER: &str = "ident";
/// Class given to group nodes
pub const CLASS_TERM: &str = "term";

/// A labelled node for a tree diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayNode {
    pub label: String,
    pub css_class: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub children: Vec<DisplayNode>,
}

impl DisplayNode {
    fn new(label: impl Into<String>, css_class: &str, children: Vec<DisplayNode>) -> Self {
        Self {
            label: label.into(),
            css_class: css_class.to_string(),
            children,
        }
    }
}

impl Drop for DisplayNode {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Types that can be drawn as a tree diagram.
pub trait Render {
    fn render(&self) -> DisplayNode;
}

impl Render for BinaryExprNode {
    /// Built bottom-up from the postfix walk, the way the reducer folds tokens.
    fn render(&self) -> DisplayNode {
        let mut shown: Vec<DisplayNode> = Vec::new();
        for node in self.postorder() {
            match node {
                BinaryExprNode::Leaf { value } => {
                    shown.push(DisplayNode::new(value.clone(), CLASS_NUMBER, vec![]))
                }
                BinaryExprNode::Apply { operator, .. } => {
                    let right = shown.pop();
                    let left = shown.pop();
                    let children = left.into_iter().chain(right).collect();
                    shown.push(DisplayNode::new(operator.clone(), CLASS_OPERATOR, children));
                }
            }
        }
        shown
            .pop()
            .unwrap_or_else(|| DisplayNode::new(self.value(), CLASS_NUMBER, vec![]))
    }
}

impl Render for TermNode {
    fn render(&self) -> DisplayNode {
        let class = match self.value {
            TermValue::Term => CLASS_TERM,
            TermValue::Number(_) => CLASS_NUMBER,
            TermValue::Identifier(_) => CLASS_IDENTIFIER,
            TermValue::Operator(_) => CLASS_OPERATOR,
        };
        let children = self.children.iter().map(Render::render).collect();
        DisplayNode::new(self.value.to_string(), class, children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exprtree_lexer::Operator;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_binary() {
        let tree = BinaryExprNode::apply("-", BinaryExprNode::leaf("7"), BinaryExprNode::leaf("1"));
        let shown = tree.render();
        assert_eq!(shown.label, "-");
        assert_eq!(shown.css_class, CLASS_OPERATOR);
        assert_eq!(
            shown.children,
            vec![
                DisplayNode::new("7", CLASS_NUMBER, vec![]),
                DisplayNode::new("1", CLASS_NUMBER, vec![]),
            ]
        );
    }

    #[test]
    fn test_render_deep_chain() {
        let mut tree = BinaryExprNode::leaf("1");
        for _ in 1..200_000 {
            tree = BinaryExprNode::apply("*", tree, BinaryExprNode::leaf("2"));
        }

        let shown = tree.render();
        assert_eq!(shown.label, "*");
        assert_eq!(shown.children[1], DisplayNode::new("2", CLASS_NUMBER, vec![]));

        let mut depth = 0;
        let mut node = &shown;
        while let Some(first) = node.children.first() {
            depth += 1;
            node = first;
        }
        assert_eq!(depth, 199_999);
        assert_eq!(node.label, "1");

        drop(shown);
        drop(tree);
    }

    #[test]
    fn test_render_term() {
        let mut root = TermNode::term(0);
        root.push(TermNode::identifier("x", 0));
        root.push(TermNode::operator(Operator::Assign, 2));
        root.push(TermNode::number(3.0, 4));

        let shown = root.render();
        assert_eq!(shown.css_class, CLASS_TERM);
        let labels: Vec<_> = shown.children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["x", "=", "3"]);
        assert_eq!(shown.children[0].css_class, CLASS_IDENTIFIER);
    }
}
