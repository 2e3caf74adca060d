//! Visitor pattern over term trees.
//!
//! Implement [`TermVisitor`] and override the callbacks of interest. The
//! default `visit_term` walks every child in order.

use exprtree_lexer::Operator;

use crate::term::{TermNode, TermValue};

/// A visitor for traversing a term tree.
pub trait TermVisitor {
    fn visit_term(&mut self, node: &TermNode) {
        walk_term(self, node);
    }

    fn visit_number(&mut self, _node: &TermNode, _value: f64) {}

    fn visit_identifier(&mut self, _node: &TermNode, _name: &str) {}

    fn visit_operator(&mut self, _node: &TermNode, _op: Operator) {}
}

/// Visits each child of a group node in order.
pub fn walk_term<V: TermVisitor + ?Sized>(visitor: &mut V, node: &TermNode) {
    for child in &node.children {
        child.accept(visitor);
    }
}

impl TermNode {
    /// Dispatches to the visitor callback for this node's kind.
    pub fn accept<V: TermVisitor + ?Sized>(&self, visitor: &mut V) {
        match &self.value {
            TermValue::Term => visitor.visit_term(self),
            TermValue::Number(n) => visitor.visit_number(self, *n),
            TermValue::Identifier(name) => visitor.visit_identifier(self, name),
            TermValue::Operator(op) => visitor.visit_operator(self, *op),
        }
    }

    /// Number of operand leaves (numbers and identifiers) at any depth.
    pub fn operand_count(&self) -> usize {
        let mut counter = OperandCounter::default();
        self.accept(&mut counter);
        counter.count
    }

    /// Deepest group nesting below this node; a flat root is 0.
    pub fn nesting_depth(&self) -> usize {
        let mut depth = DepthTracker::default();
        walk_term(&mut depth, self);
        depth.max
    }
}

#[derive(Default)]
struct OperandCounter {
    count: usize,
}

impl TermVisitor for OperandCounter {
    fn visit_number(&mut self, _node: &TermNode, _value: f64) {
        self.count += 1;
    }

    fn visit_identifier(&mut self, _node: &TermNode, _name: &str) {
        self.count += 1;
    }
}

#[derive(Default)]
struct DepthTracker {
    current: usize,
    max: usize,
}

impl TermVisitor for DepthTracker {
    fn visit_term(&mut self, node: &TermNode) {
        self.current += 1;
        self.max = self.max.max(self.current);
        walk_term(self, node);
        self.current -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collects identifier names in visiting order
    struct Names(Vec<String>);

    impl TermVisitor for Names {
        fn visit_identifier(&mut self, _node: &TermNode, name: &str) {
            self.0.push(name.to_string());
        }
    }

    fn sample() -> TermNode {
        let mut inner = TermNode::term(4);
        inner.push(TermNode::identifier("b", 5));
        inner.push(TermNode::operator(Operator::Sub, 7));
        inner.push(TermNode::number(2.0, 9));

        let mut root = TermNode::term(0);
        root.push(TermNode::identifier("a", 0));
        root.push(TermNode::operator(Operator::Add, 2));
        root.push(inner);
        root
    }

    #[test]
    fn test_operand_count_and_depth() {
        let root = sample();
        assert_eq!(root.operand_count(), 3);
        assert_eq!(root.nesting_depth(), 1);
        assert_eq!(TermNode::term(0).nesting_depth(), 0);
    }

    #[test]
    fn test_custom_visitor_order() {
        let mut names = Names(Vec::new());
        sample().accept(&mut names);
        assert_eq!(names.0, vec!["a", "b"]);
    }
}
