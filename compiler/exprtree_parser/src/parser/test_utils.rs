//! Helpers for building token sequences in tests

use exprtree_lexer::{Operator, Token};

/// Splits a space separated postfix string into tokens.
///
/// Words made of a single operator character (or `(`) become operator
/// tokens. Everything else is a number.
pub fn postfix(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if Operator::from_char(c).is_some() || c == '(' => {
                    Token::operator(word)
                }
                _ => Token::number(word),
            }
        })
        .collect()
}
