//! Infix to postfix conversion with the shunting-yard algorithm.
//!
//! Two tokenizers feed the same operator stack:
//!
//! - [`TokenizerMode::CharWise`] looks at one character at a time. Only the
//!   digits `1` to `9` count as numbers, so `0` and multi-digit numerals are
//!   not converted faithfully, and unknown characters are silently dropped.
//!   Unbalanced parentheses are not reported.
//! - [`TokenizerMode::Lexeme`] is a corrected tokenizer built on
//!   [`exprtree_lexer::Lexer`]. Numerals are whole lexemes and malformed input
//!   is reported with a [`PositionedError`].

use exprtree_lexer::{precedence, LexemeKind, Lexer, Token};
use log::{debug, trace};

use super::error::{ErrorKind, PositionedError};

/// Which tokenizer feeds the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenizerMode {
    /// One character per token, without error reporting
    #[default]
    CharWise,
    /// Whole lexemes, with error reporting
    Lexeme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackEntry {
    Operator(char),
    OpenParen { position: usize },
}

/// The operator stack and output queue of the algorithm.
#[derive(Default)]
struct Converter {
    stack: Vec<StackEntry>,
    output: Vec<Token>,
}

impl Converter {
    fn emit_number(&mut self, text: &str) {
        self.output.push(Token::number(text));
    }

    /// Pops every stacked operator that binds at least as tightly, then pushes `op`.
    fn push_operator(&mut self, op: char, op_precedence: u8) {
        while let Some(&StackEntry::Operator(top)) = self.stack.last() {
            match precedence(top) {
                Some(top_precedence) if top_precedence >= op_precedence => {
                    self.stack.pop();
                    self.output.push(Token::operator(top.to_string()));
                }
                _ => break,
            }
        }
        self.stack.push(StackEntry::Operator(op));
    }

    fn open_paren(&mut self, position: usize) {
        self.stack.push(StackEntry::OpenParen { position });
    }

    /// Emits operators down to the nearest `(` and discards it.
    /// Returns false if no `(` was on the stack.
    fn close_paren(&mut self) -> bool {
        while let Some(entry) = self.stack.pop() {
            match entry {
                StackEntry::Operator(op) => self.output.push(Token::operator(op.to_string())),
                StackEntry::OpenParen { .. } => return true,
            }
        }
        false
    }

    /// Position of the innermost `(` still open, if any.
    fn unclosed_paren(&self) -> Option<usize> {
        self.stack.iter().rev().find_map(|entry| match entry {
            StackEntry::OpenParen { position } => Some(*position),
            StackEntry::Operator(_) => None,
        })
    }

    /// Drains the stack top first. A leftover `(` is emitted as an operator token.
    fn finish(mut self) -> Vec<Token> {
        while let Some(entry) = self.stack.pop() {
            let text = match entry {
                StackEntry::Operator(op) => op.to_string(),
                StackEntry::OpenParen { .. } => "(".to_string(),
            };
            self.output.push(Token::operator(text));
        }
        self.output
    }
}

/// Converts infix text to postfix tokens one character at a time.
///
/// This never fails; input it cannot interpret is skipped.
pub fn to_postfix(input: &str) -> Vec<Token> {
    debug!("converting {input:?} to postfix (character-wise)");
    let mut converter = Converter::default();

    for (position, c) in input.chars().enumerate() {
        if c.is_ascii_digit() && c != '0' {
            converter.emit_number(c.encode_utf8(&mut [0; 4]));
        } else if let Some(p) = precedence(c) {
            converter.push_operator(c, p);
        } else if c == '(' {
            converter.open_paren(position);
        } else if c == ')' {
            if !converter.close_paren() {
                trace!("unmatched ')' at {position} ignored");
            }
        } else {
            trace!("skipping {c:?} at {position}");
        }
    }

    converter.finish()
}

/// Converts infix text to postfix tokens using the lexeme tokenizer.
///
/// Fails on symbols the converter cannot place (identifiers, `=`, unknown
/// characters) and on unbalanced parentheses.
pub fn to_postfix_lexemes(input: &str) -> Result<Vec<Token>, PositionedError> {
    debug!("converting {input:?} to postfix (lexemes)");
    let mut converter = Converter::default();

    for lexeme in Lexer::new(input) {
        match lexeme.kind {
            LexemeKind::Number => converter.emit_number(lexeme.text),
            LexemeKind::Operator(op) => {
                let p = op.precedence().ok_or_else(|| {
                    PositionedError::new(ErrorKind::UnexpectedSymbol, lexeme.offset)
                })?;
                converter.push_operator(op.as_char(), p);
            }
            LexemeKind::LeftParen => converter.open_paren(lexeme.offset),
            LexemeKind::RightParen => {
                if !converter.close_paren() {
                    return Err(PositionedError::new(
                        ErrorKind::UnexpectedCharacter,
                        lexeme.offset,
                    ));
                }
            }
            LexemeKind::Identifier | LexemeKind::Error => {
                return Err(PositionedError::new(
                    ErrorKind::UnexpectedSymbol,
                    lexeme.offset,
                ));
            }
        }
    }

    if let Some(position) = converter.unclosed_paren() {
        trace!("unclosed '(' at {position}");
        return Err(PositionedError::new(
            ErrorKind::UnexpectedEndOfInput,
            input.chars().count(),
        ));
    }

    Ok(converter.finish())
}

/// Converts with the selected tokenizer.
pub fn to_postfix_with(input: &str, mode: TokenizerMode) -> Result<Vec<Token>, PositionedError> {
    match mode {
        TokenizerMode::CharWise => Ok(to_postfix(input)),
        TokenizerMode::Lexeme => to_postfix_lexemes(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exprtree_lexer::join_tokens;
    use pretty_assertions::assert_eq;

    fn postfix(input: &str) -> String {
        join_tokens(&to_postfix(input))
    }

    fn postfix_lexemes(input: &str) -> String {
        join_tokens(&to_postfix_lexemes(input).unwrap())
    }

    #[test]
    fn test_precedence_ordering() {
        crate::tests::init_test_logger();
        assert_eq!(postfix("3+4*2"), "3 4 2 * +");
        assert_eq!(postfix("3*4+2"), "3 4 * 2 +");
        assert_eq!(postfix("8-4-2"), "8 4 - 2 -");
        assert_eq!(postfix("(3+4)*2"), "3 4 + 2 *");
    }

    #[test]
    fn test_token_types() {
        let tokens = to_postfix("1+2");
        assert_eq!(
            tokens,
            vec![Token::number("1"), Token::number("2"), Token::operator("+")]
        );
    }

    #[test]
    fn test_char_wise_limitations() {
        // Multi-digit numbers split into digits, zeros vanish
        assert_eq!(postfix("12+3"), "1 2 3 +");
        assert_eq!(postfix("10*2"), "1 2 *");
        // Spaces, letters and '=' are skipped
        assert_eq!(postfix(" 1 + x = 2"), "1 2 +");
        // Unbalanced parens are not reported
        assert_eq!(postfix("(1+2"), "1 2 + (");
        assert_eq!(postfix("1+2)"), "1 2 +");
    }

    #[test]
    fn test_lexemes_multi_digit() {
        assert_eq!(postfix_lexemes("12 + 3.5 * 40"), "12 3.5 40 * +");
        assert_eq!(postfix_lexemes("(10 - 0) / 2"), "10 0 - 2 /");
    }

    #[test]
    fn test_lexemes_errors() {
        assert_eq!(
            to_postfix_lexemes("1 + x"),
            Err(PositionedError::new(ErrorKind::UnexpectedSymbol, 4))
        );
        assert_eq!(
            to_postfix_lexemes("a = 1"),
            Err(PositionedError::new(ErrorKind::UnexpectedSymbol, 0))
        );
        assert_eq!(
            to_postfix_lexemes("1 = 2"),
            Err(PositionedError::new(ErrorKind::UnexpectedSymbol, 2))
        );
        assert_eq!(
            to_postfix_lexemes("1 + 2)"),
            Err(PositionedError::new(ErrorKind::UnexpectedCharacter, 5))
        );
        assert_eq!(
            to_postfix_lexemes("(1 + 2"),
            Err(PositionedError::new(ErrorKind::UnexpectedEndOfInput, 6))
        );
        assert_eq!(
            to_postfix_lexemes("1 % 2"),
            Err(PositionedError::new(ErrorKind::UnexpectedSymbol, 2))
        );
    }

    #[test]
    fn test_mode_dispatch() {
        assert_eq!(
            to_postfix_with("12", TokenizerMode::CharWise).unwrap().len(),
            2
        );
        assert_eq!(
            to_postfix_with("12", TokenizerMode::Lexeme).unwrap(),
            vec![Token::number("12")]
        );
    }
}
