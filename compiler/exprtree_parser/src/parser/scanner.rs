//! Single-pass scanner that builds the term tree while reading characters.
//!
//! The scanner keeps one character of lookahead and an explicit stack of the
//! groups enclosing the one currently being filled. There is no backtracking.

use std::str::Chars;

use exprtree_ast::TermNode;
use exprtree_lexer::Operator;
use log::{debug, trace};

use super::error::{ErrorKind, PositionedError};

/// Default limit on parenthesis nesting
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration for the term scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Maximum number of simultaneously open groups
    pub max_depth: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Scanner state over a borrowed input.
pub struct Scanner<'a> {
    chars: Chars<'a>,
    /// Character under the cursor, `None` at end of input
    current: Option<char>,
    /// Zero-based character offset of `current`
    position: usize,
    config: ScannerConfig,
}

impl<'a> Scanner<'a> {
    /// Create a scanner with the default configuration
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, ScannerConfig::default())
    }

    /// Create a scanner with a custom configuration
    pub fn with_config(input: &'a str, config: ScannerConfig) -> Self {
        let mut chars = input.chars();
        let current = chars.next();
        Self {
            chars,
            current,
            position: 0,
            config,
        }
    }

    fn error(&self, kind: ErrorKind) -> PositionedError {
        PositionedError::new(kind, self.position)
    }

    /// Move to the next character. Moving past the end is an error.
    fn advance(&mut self) -> Result<(), PositionedError> {
        if self.current.is_none() {
            return Err(self.error(ErrorKind::UnexpectedEndOfInput));
        }
        self.current = self.chars.next();
        self.position += 1;
        Ok(())
    }

    fn skip_spaces(&mut self) -> Result<(), PositionedError> {
        while self.current == Some(' ') {
            self.advance()?;
        }
        Ok(())
    }

    /// Digits with at most one decimal point.
    fn scan_number(&mut self) -> Result<f64, PositionedError> {
        let start = self.position;
        let mut text = String::new();
        let mut seen_point = false;

        while let Some(c) = self.current.filter(|c| c.is_ascii_digit() || *c == '.') {
            if c == '.' {
                if seen_point {
                    return Err(self.error(ErrorKind::MalformedNumber));
                }
                seen_point = true;
            }
            text.push(c);
            self.advance()?;
        }

        text.parse()
            .map_err(|_| PositionedError::new(ErrorKind::MalformedNumber, start))
    }

    /// A run of letters, ended by a space, `)` or end of input.
    fn scan_identifier(&mut self) -> Result<String, PositionedError> {
        let mut name = String::new();

        while let Some(c) = self.current {
            if c == ' ' || c == ')' {
                break;
            }
            if !c.is_alphabetic() {
                return Err(self.error(ErrorKind::UnexpectedCharacter));
            }
            name.push(c);
            self.advance()?;
        }

        Ok(name)
    }

    /// Scan the whole input and return the implicit root group.
    pub fn scan(mut self) -> Result<TermNode, PositionedError> {
        debug!("scanning term tree (max depth {})", self.config.max_depth);

        let mut current = TermNode::term(0);
        let mut enclosing: Vec<TermNode> = Vec::new();

        while let Some(c) = self.current {
            match c {
                ' ' => self.skip_spaces()?,
                '(' => {
                    if enclosing.len() >= self.config.max_depth {
                        return Err(self.error(ErrorKind::NestingTooDeep {
                            limit: self.config.max_depth,
                        }));
                    }
                    trace!("open group at {}", self.position);
                    let group = TermNode::term(self.position);
                    enclosing.push(std::mem::replace(&mut current, group));
                    self.advance()?;
                }
                ')' => {
                    let Some(parent) = enclosing.pop() else {
                        return Err(self.error(ErrorKind::UnexpectedCharacter));
                    };
                    trace!("close group at {}", self.position);
                    self.advance()?;
                    let group = std::mem::replace(&mut current, parent);
                    current.push(group);
                }
                c if c.is_ascii_digit() => {
                    let start = self.position;
                    let value = self.scan_number()?;
                    trace!("number {value} at {start}");
                    current.push(TermNode::number(value, start));
                }
                c if c.is_alphabetic() => {
                    let start = self.position;
                    let name = self.scan_identifier()?;
                    trace!("identifier {name:?} at {start}");
                    current.push(TermNode::identifier(name, start));
                }
                c => match Operator::from_char(c) {
                    Some(op) => {
                        trace!("operator {op} at {}", self.position);
                        current.push(TermNode::operator(op, self.position));
                        self.advance()?;
                    }
                    None => return Err(self.error(ErrorKind::UnexpectedSymbol)),
                },
            }
        }

        if !enclosing.is_empty() {
            return Err(self.error(ErrorKind::UnexpectedEndOfInput));
        }

        debug!("scanned {} top-level nodes", current.children.len());
        Ok(current)
    }
}

/// Scan `input` into a term tree with the default configuration.
pub fn scan(input: &str) -> Result<TermNode, PositionedError> {
    Scanner::new(input).scan()
}
