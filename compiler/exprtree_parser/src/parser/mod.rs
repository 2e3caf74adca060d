//! Both parsing strategies for arithmetic expressions.
//!
//! - Term strategy: [`scanner`] builds a nested term tree, then [`validator`]
//!   checks operand/operator alternation at every nesting level.
//! - Postfix strategy: [`shunting_yard`] rewrites infix into postfix tokens,
//!   then [`reducer`] folds them into a binary expression tree.
//!
//! The two strategies share no state. Every entry point is a pure function of
//! its input and returns typed errors; none of them print or exit.

pub mod diagnostics;
pub mod error;
pub mod reducer;
pub mod scanner;
pub mod shunting_yard;
pub mod test_utils;
pub mod validator;
