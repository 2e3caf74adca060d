//! The fixed operator set and the shunting-yard precedence table.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

/// Every character the term scanner accepts as an operator.
pub const OPERATOR_CHARS: [char; 5] = ['+', '-', '*', '/', '='];

/// The operators in the order of [`OPERATOR_CHARS`].
const OPERATORS: [Operator; 5] = [
    Operator::Add,
    Operator::Sub,
    Operator::Mul,
    Operator::Div,
    Operator::Assign,
];

lazy_static! {
    /// Binding strength of the binary operators known to the shunting-yard
    /// converter. Higher binds tighter. `=` has no entry.
    static ref PRECEDENCE: HashMap<char, u8> = {
        let mut table = HashMap::new();
        table.insert('+', 1);
        table.insert('-', 1);
        table.insert('*', 2);
        table.insert('/', 2);
        table
    };
}

/// Looks up the precedence of an operator character.
///
/// Returns `None` for characters outside the table, including `=` and `(`.
pub fn precedence(op: char) -> Option<u8> {
    PRECEDENCE.get(&op).copied()
}

/// One of the operator characters in [`OPERATOR_CHARS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `=`
    Assign,
}

impl Operator {
    /// Maps a source character onto an operator, if it is one.
    pub fn from_char(c: char) -> Option<Self> {
        OPERATOR_CHARS
            .iter()
            .zip(OPERATORS)
            .find_map(|(&op_char, op)| (op_char == c).then_some(op))
    }

    /// The source character for this operator.
    pub fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Assign => '=',
        }
    }

    /// Precedence in the shunting-yard table. `Assign` has none.
    pub fn precedence(self) -> Option<u8> {
        precedence(self.as_char())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_precedence_table() {
        assert_eq!(precedence('+'), Some(1));
        assert_eq!(precedence('-'), Some(1));
        assert_eq!(precedence('*'), Some(2));
        assert_eq!(precedence('/'), Some(2));
        assert_eq!(precedence('='), None);
        assert_eq!(precedence('('), None);
    }

    #[test]
    fn test_operator_chars_round_trip() {
        for c in OPERATOR_CHARS {
            let op = Operator::from_char(c).unwrap();
            assert_eq!(op.as_char(), c);
        }
        assert_eq!(Operator::from_char('%'), None);
        assert!(Operator::Mul.precedence() > Operator::Sub.precedence());
    }
}
