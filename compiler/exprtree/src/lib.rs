//! Reports produced by the `exprtree` driver.
//!
//! Each report runs one parsing strategy end to end and packages the result
//! in a form that prints as text or serializes as JSON.

use std::fmt;

use exprtree_ast::{DisplayNode, Render};
use exprtree_lexer::{join_tokens, Token};
use exprtree_parser::{
    parse_terms, reduce_with, render_snippet, to_postfix_with, PositionedError, ReduceConfig,
    ReduceError, ScannerConfig, TokenizerMode,
};
use serde::Serialize;
use thiserror::Error;

/// The expression the driver analyzes when asked for a demonstration.
pub const DEMO_EXPRESSION: &str = "1 + ( 2 + sdsds + asd )";

/// Any failure of a parsing strategy.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Syntax(#[from] PositionedError),
    #[error(transparent)]
    Reduce(#[from] ReduceError),
}

impl AnalyzeError {
    /// Human readable report, with a caret snippet for positioned errors.
    pub fn render(&self, source: &str) -> String {
        match self {
            AnalyzeError::Syntax(err) => render_snippet(err, source),
            AnalyzeError::Reduce(err) => format!("error: {err}"),
        }
    }

    /// Character offset of the error in the source, when it has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            AnalyzeError::Syntax(err) => Some(err.position),
            AnalyzeError::Reduce(_) => None,
        }
    }
}

/// JSON shape of a failure
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

impl From<&AnalyzeError> for ErrorReport {
    fn from(err: &AnalyzeError) -> Self {
        Self {
            error: err.to_string(),
            position: err.position(),
        }
    }
}

/// Result of scanning and validating a term tree.
#[derive(Debug, Serialize)]
pub struct TermReport {
    pub source: String,
    /// The tree written back as source
    pub canonical: String,
    pub operands: usize,
    pub depth: usize,
    pub tree: DisplayNode,
}

/// Result of converting to postfix and reducing to a binary tree.
#[derive(Debug, Serialize)]
pub struct PostfixReport {
    pub source: String,
    pub postfix: Vec<Token>,
    /// Fully parenthesized infix form of the tree
    pub infix: String,
    pub tree: DisplayNode,
}

/// Runs the scanner and validator over `source`.
pub fn analyze_terms(source: &str, config: ScannerConfig) -> Result<TermReport, AnalyzeError> {
    let root = parse_terms(source, config)?;
    Ok(TermReport {
        source: source.to_string(),
        canonical: root.to_string(),
        operands: root.operand_count(),
        depth: root.nesting_depth(),
        tree: root.render(),
    })
}

/// Runs the shunting-yard converter and the reducer over `source`.
///
/// The JSON report serializes the tree recursively, so reports are bounded by
/// `config.max_depth`.
pub fn analyze_postfix(
    source: &str,
    mode: TokenizerMode,
    config: ReduceConfig,
) -> Result<PostfixReport, AnalyzeError> {
    let postfix = to_postfix_with(source, mode)?;
    let tree = reduce_with(postfix.iter().cloned(), config)?;
    Ok(PostfixReport {
        source: source.to_string(),
        postfix,
        infix: tree.to_string(),
        tree: tree.render(),
    })
}

/// Writes a display tree as an indented outline, one node per line.
pub fn outline(node: &DisplayNode) -> String {
    let mut out = String::new();
    let mut pending = vec![(node, 0)];
    while let Some((node, depth)) = pending.pop() {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&format!("{} [{}]\n", node.label, node.css_class));
        pending.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }
    out
}

impl fmt::Display for TermReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "expression: {}", self.canonical)?;
        writeln!(f, "operands: {}, nesting depth: {}", self.operands, self.depth)?;
        write!(f, "{}", outline(&self.tree))
    }
}

impl fmt::Display for PostfixReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "postfix: {}", join_tokens(&self.postfix))?;
        writeln!(f, "infix: {}", self.infix)?;
        write!(f, "{}", outline(&self.tree))
    }
}
