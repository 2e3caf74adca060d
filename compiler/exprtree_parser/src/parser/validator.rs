//! Structural validation of term trees.
//!
//! Every group must read `operand (operator operand)*`: no empty groups, no
//! leading or trailing operator, no two operators or two operands in a row.
//! Implicit multiplication and unary operators are therefore rejected.

use exprtree_ast::TermNode;
use log::{debug, trace};

use super::error::{ErrorKind, PositionedError};
use super::scanner::{Scanner, ScannerConfig};

/// Checks the alternation rules on `root` and every nested group.
pub fn validate(root: &TermNode) -> Result<(), PositionedError> {
    debug!("validating term tree");
    validate_term(root)
}

fn validate_term(term: &TermNode) -> Result<(), PositionedError> {
    let children = &term.children;
    trace!("group at {} with {} children", term.position, children.len());

    let first = children
        .first()
        .ok_or_else(|| PositionedError::new(ErrorKind::EmptyBody, term.position))?;
    if first.is_operator() {
        return Err(PositionedError::new(ErrorKind::LeadingOperator, term.position));
    }

    for (i, node) in children.iter().enumerate() {
        let next = children.get(i + 1);

        // Nested groups are checked before the sibling that follows them.
        if node.is_term() {
            validate_term(node)?;
        }

        if node.is_operator() {
            let next = next
                .ok_or_else(|| PositionedError::new(ErrorKind::UnexpectedEndOfTerm, node.position))?;
            if next.is_operator() {
                return Err(PositionedError::new(ErrorKind::UnexpectedOperator, next.position));
            }
        } else if let Some(next) = next.filter(|n| !n.is_operator()) {
            return Err(PositionedError::new(
                ErrorKind::UnexpectedNodeType { found: next.kind() },
                next.position,
            ));
        }
    }

    Ok(())
}

/// Scans and validates in one step.
pub fn parse_terms(input: &str, config: ScannerConfig) -> Result<TermNode, PositionedError> {
    let root = Scanner::with_config(input, config).scan()?;
    validate(&root)?;
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::scanner::scan;
    use exprtree_ast::TermKind;
    use pretty_assertions::assert_eq;

    fn check(input: &str) -> Result<(), PositionedError> {
        validate(&scan(input).expect("input should scan"))
    }

    #[test]
    fn test_validate_accepts_alternation() {
        crate::tests::init_test_logger();
        assert_eq!(check("1"), Ok(()));
        assert_eq!(check("a = 1 + 2 * (b - 3) / c"), Ok(()));
        assert_eq!(check("((x))"), Ok(()));
    }

    #[test]
    fn test_validate_empty_bodies() {
        assert_eq!(check(""), Err(PositionedError::new(ErrorKind::EmptyBody, 0)));
        assert_eq!(check("   "), Err(PositionedError::new(ErrorKind::EmptyBody, 0)));
        assert_eq!(check("1 + ()"), Err(PositionedError::new(ErrorKind::EmptyBody, 4)));
    }

    #[test]
    fn test_validate_leading_operator() {
        assert_eq!(
            check("+ 1"),
            Err(PositionedError::new(ErrorKind::LeadingOperator, 0))
        );
        assert_eq!(
            check("2 * (- 1)"),
            Err(PositionedError::new(ErrorKind::LeadingOperator, 4))
        );
    }

    #[test]
    fn test_validate_adjacent_operands() {
        assert_eq!(
            check("2 x"),
            Err(PositionedError::new(
                ErrorKind::UnexpectedNodeType {
                    found: TermKind::Identifier
                },
                2
            ))
        );
        assert_eq!(
            check("2 (3)"),
            Err(PositionedError::new(
                ErrorKind::UnexpectedNodeType {
                    found: TermKind::Term
                },
                2
            ))
        );
    }

    #[test]
    fn test_validate_operator_sequences() {
        assert_eq!(
            check("1 +"),
            Err(PositionedError::new(ErrorKind::UnexpectedEndOfTerm, 2))
        );
        assert_eq!(
            check("1 + * 2"),
            Err(PositionedError::new(ErrorKind::UnexpectedOperator, 4))
        );
    }

    #[test]
    fn test_validate_nested_error_reported_first() {
        // The nested group is broken and is followed by a second operand.
        assert_eq!(
            check("(1 +) 2"),
            Err(PositionedError::new(ErrorKind::UnexpectedEndOfTerm, 3))
        );
    }

    #[test]
    fn test_parse_terms_combines_both_steps() {
        let root = parse_terms("1 + (2)", ScannerConfig::default()).unwrap();
        assert_eq!(root.operand_count(), 2);
        let err = parse_terms("1 + ", ScannerConfig::default()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedEndOfTerm);
    }
}
