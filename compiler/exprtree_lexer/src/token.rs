//! Postfix tokens exchanged between the shunting-yard converter and the reducer.

use std::fmt;

/// Whether a postfix token is an operand or an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TokenType {
    /// A numeric operand
    Number,
    /// A binary operator
    Operator,
}

/// A token in postfix order, produced by the shunting-yard converter and
/// consumed by the tree reducer.
///
/// `value` is the source text the token came from: a single character in the
/// character-wise mode, a whole numeral in lexeme mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Source text of the token
    pub value: String,
    /// Operand or operator
    pub token_type: TokenType,
}

impl Token {
    /// Create a new token
    pub fn new(value: impl Into<String>, token_type: TokenType) -> Self {
        Self {
            value: value.into(),
            token_type,
        }
    }

    /// Create a number token
    pub fn number(value: impl Into<String>) -> Self {
        Self::new(value, TokenType::Number)
    }

    /// Create an operator token
    pub fn operator(value: impl Into<String>) -> Self {
        Self::new(value, TokenType::Operator)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Joins tokens with single spaces, e.g. `3 4 2 * +`.
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.value.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_constructors() {
        let n = Token::number("42");
        assert_eq!(n.token_type, TokenType::Number);
        assert_eq!(n.to_string(), "42");

        let op = Token::operator("*");
        assert_eq!(op, Token::new("*", TokenType::Operator));
    }

    #[test]
    fn test_join_tokens() {
        let tokens = vec![
            Token::number("3"),
            Token::number("4"),
            Token::operator("+"),
        ];
        assert_eq!(join_tokens(&tokens), "3 4 +");
    }
}
