//! Lexical layer for arithmetic expression trees
//!
//! This crate holds the pieces shared by both parsing strategies: the fixed
//! operator set with its precedence table, the postfix [`Token`] consumed by the
//! tree reducer, and a lexeme-based [`Lexer`] built on `logos`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lexer;
pub mod operator;
pub mod token;

// Re-export the main types for convenience
pub use lexer::{Lexeme, LexemeKind, Lexer};
pub use operator::{precedence, Operator, OPERATOR_CHARS};
pub use token::{join_tokens, Token, TokenType};
