//! Folds a postfix token sequence into a binary expression tree.

use exprtree_ast::BinaryExprNode;
use exprtree_lexer::{Token, TokenType};
use log::{debug, trace};

use super::error::{PostfixDefect, ReduceError};

/// Default limit on operator nesting in a reduced tree
pub const DEFAULT_MAX_TREE_DEPTH: usize = 1024;

/// Configuration for the postfix reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReduceConfig {
    /// Maximum number of operators on any root-to-leaf path
    pub max_depth: usize,
}

impl ReduceConfig {
    /// No depth limit.
    pub fn unbounded() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_TREE_DEPTH,
        }
    }
}

/// A subtree on the reducer stack with its operator depth.
struct Subtree {
    node: BinaryExprNode,
    depth: usize,
}

/// Pops the top two subtrees as `(left, right)`.
fn pop_operands(stack: &mut Vec<Subtree>) -> Option<(Subtree, Subtree)> {
    if stack.len() < 2 {
        return None;
    }
    let right = stack.pop()?;
    let left = stack.pop()?;
    Some((left, right))
}

/// Reduces postfix tokens, left to right, with a stack of subtrees.
///
/// Succeeds only if exactly one tree remains once every token is consumed.
/// The tree may be arbitrarily deep; see [`reduce_with`] to bound it.
pub fn reduce<I>(tokens: I) -> Result<BinaryExprNode, ReduceError>
where
    I: IntoIterator<Item = Token>,
{
    reduce_with(tokens, ReduceConfig::unbounded())
}

/// Like [`reduce`], but fails with [`PostfixDefect::TooDeep`] as soon as a
/// subtree would exceed `config.max_depth` operators.
pub fn reduce_with<I>(tokens: I, config: ReduceConfig) -> Result<BinaryExprNode, ReduceError>
where
    I: IntoIterator<Item = Token>,
{
    let mut stack: Vec<Subtree> = Vec::new();
    let mut consumed = 0;

    for (index, token) in tokens.into_iter().enumerate() {
        consumed = index + 1;
        match token.token_type {
            TokenType::Number => {
                trace!("push leaf {}", token.value);
                stack.push(Subtree {
                    node: BinaryExprNode::leaf(token.value),
                    depth: 0,
                });
            }
            TokenType::Operator => {
                let available = stack.len();
                let (left, right) = pop_operands(&mut stack).ok_or_else(|| {
                    ReduceError::InvalidPostfixExpression {
                        index,
                        defect: PostfixDefect::MissingOperands {
                            operator: token.value.clone(),
                            available,
                        },
                    }
                })?;
                let depth = left.depth.max(right.depth) + 1;
                if depth > config.max_depth {
                    return Err(ReduceError::InvalidPostfixExpression {
                        index,
                        defect: PostfixDefect::TooDeep {
                            limit: config.max_depth,
                        },
                    });
                }
                trace!("apply {} at depth {depth}", token.value);
                stack.push(Subtree {
                    node: BinaryExprNode::apply(token.value, left.node, right.node),
                    depth,
                });
            }
        }
    }

    if stack.len() == 1 {
        if let Some(tree) = stack.pop() {
            debug!("reduced {consumed} tokens, depth {}", tree.depth);
            return Ok(tree.node);
        }
    }

    let defect = if stack.is_empty() {
        PostfixDefect::Empty
    } else {
        PostfixDefect::LeftoverOperands { count: stack.len() }
    };
    Err(ReduceError::InvalidPostfixExpression {
        index: consumed,
        defect,
    })
}
