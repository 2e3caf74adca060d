//! Lexeme-based tokenizer using the `logos` crate.
//!
//! Unlike the character-wise splitting of the parity converter, this lexer
//! groups multi-digit and decimal numerals into a single lexeme.

use logos::Logos;

use crate::operator::Operator;

/// Raw token type used by the logos lexer
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n]+")]
enum LogosToken {
    // --- Literals ---
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,
    #[regex(r"\p{L}+")]
    Identifier,

    // --- Operators ---
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Assign,

    // --- Delimiters ---
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// Semantic category of a [`Lexeme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexemeKind {
    /// Digits with an optional single decimal point
    Number,
    /// A run of letters
    Identifier,
    /// One of the operator characters
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Input the lexer does not recognise
    Error,
}

/// A lexeme with its position in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'source> {
    /// What was recognised
    pub kind: LexemeKind,
    /// The matched source text
    pub text: &'source str,
    /// Zero-based character offset of the first character
    pub offset: usize,
}

/// Expression lexer
pub struct Lexer<'source> {
    /// The logos lexer instance
    logos_lexer: logos::Lexer<'source, LogosToken>,
    /// The source being lexed
    source: &'source str,
    /// Byte offset up to which `char_offset` has been counted
    byte_cursor: usize,
    /// Character offset matching `byte_cursor`
    char_offset: usize,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given source text
    pub fn new(source: &'source str) -> Self {
        Self {
            logos_lexer: LogosToken::lexer(source),
            source,
            byte_cursor: 0,
            char_offset: 0,
        }
    }

    fn convert_token(logos_token: LogosToken) -> LexemeKind {
        match logos_token {
            LogosToken::Number => LexemeKind::Number,
            LogosToken::Identifier => LexemeKind::Identifier,
            LogosToken::Plus => LexemeKind::Operator(Operator::Add),
            LogosToken::Minus => LexemeKind::Operator(Operator::Sub),
            LogosToken::Star => LexemeKind::Operator(Operator::Mul),
            LogosToken::Slash => LexemeKind::Operator(Operator::Div),
            LogosToken::Assign => LexemeKind::Operator(Operator::Assign),
            LogosToken::LParen => LexemeKind::LeftParen,
            LogosToken::RParen => LexemeKind::RightParen,
        }
    }

    /// Translate a byte offset into a character offset. Offsets only move forward.
    fn char_offset_of(&mut self, byte_offset: usize) -> usize {
        self.char_offset += self.source[self.byte_cursor..byte_offset].chars().count();
        self.byte_cursor = byte_offset;
        self.char_offset
    }
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Lexeme<'source>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.logos_lexer.next()?;
        let span = self.logos_lexer.span();
        let text = self.logos_lexer.slice();
        let kind = match logos_token {
            Ok(token) => Self::convert_token(token),
            Err(_) => LexemeKind::Error,
        };
        let offset = self.char_offset_of(span.start);

        #[cfg(feature = "logging")]
        log::trace!("lexeme {:?} {:?} at {}", kind, text, offset);

        Some(Lexeme { kind, text, offset })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<LexemeKind> {
        Lexer::new(source).map(|l| l.kind).collect()
    }

    #[test]
    fn test_lexer_basic() {
        let lexemes: Vec<_> = Lexer::new("12 + 3.5*(x)").collect();
        let texts: Vec<_> = lexemes.iter().map(|l| l.text).collect();
        assert_eq!(texts, vec!["12", "+", "3.5", "*", "(", "x", ")"]);
        assert_eq!(lexemes[0].kind, LexemeKind::Number);
        assert_eq!(lexemes[1].kind, LexemeKind::Operator(Operator::Add));
        assert_eq!(lexemes[5].kind, LexemeKind::Identifier);
    }

    #[test]
    fn test_lexer_offsets_are_character_based() {
        let offsets: Vec<_> = Lexer::new("é + 10").map(|l| l.offset).collect();
        assert_eq!(offsets, vec![0, 2, 4]);
    }

    #[test]
    fn test_every_raw_token_is_mapped() {
        let raw: Vec<_> = LogosToken::lexer("7 ab + - * / = ( )")
            .filter_map(Result::ok)
            .collect();
        assert_eq!(raw.len(), 9);
        assert_eq!(
            raw.into_iter().map(Lexer::convert_token).collect::<Vec<_>>(),
            vec![
                LexemeKind::Number,
                LexemeKind::Identifier,
                LexemeKind::Operator(Operator::Add),
                LexemeKind::Operator(Operator::Sub),
                LexemeKind::Operator(Operator::Mul),
                LexemeKind::Operator(Operator::Div),
                LexemeKind::Operator(Operator::Assign),
                LexemeKind::LeftParen,
                LexemeKind::RightParen,
            ]
        );
    }

    #[test]
    fn test_lexer_error() {
        assert_eq!(
            kinds("1 % 2"),
            vec![LexemeKind::Number, LexemeKind::Error, LexemeKind::Number]
        );
    }
}
