use exprtree_ast::TermKind;
use thiserror::Error;

/// What went wrong while scanning or validating a term tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    // Scanner
    #[error("unexpected character")]
    UnexpectedCharacter,
    #[error("malformed number: more than one decimal point")]
    MalformedNumber,
    #[error("unexpected symbol")]
    UnexpectedSymbol,
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("groups nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    // Validator
    #[error("unexpected empty body")]
    EmptyBody,
    #[error("term cannot start with an operator")]
    LeadingOperator,
    #[error("unexpected {found}, expected an operator")]
    UnexpectedNodeType { found: TermKind },
    #[error("unexpected end of term after operator")]
    UnexpectedEndOfTerm,
    #[error("unexpected operator")]
    UnexpectedOperator,
}

/// An error anchored at a zero-based character offset of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at offset {position}")]
pub struct PositionedError {
    pub kind: ErrorKind,
    pub position: usize,
}

impl PositionedError {
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

/// The reducer could not fold its input into a single tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReduceError {
    /// `index` is the token index at which the defect was detected; for
    /// defects found after the last token it equals the token count.
    #[error("invalid postfix expression at token {index}: {defect}")]
    InvalidPostfixExpression { index: usize, defect: PostfixDefect },
}

/// Why a postfix sequence is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostfixDefect {
    #[error("operator `{operator}` needs two operands, found {available}")]
    MissingOperands { operator: String, available: usize },
    #[error("{count} operands left over without an operator")]
    LeftoverOperands { count: usize },
    #[error("no tokens")]
    Empty,
    #[error("tree deeper than {limit} operators")]
    TooDeep { limit: usize },
}
