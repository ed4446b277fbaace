#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::non_ascii_literal,
    clippy::cast_precision_loss,
    clippy::missing_errors_doc
)]

//! Treecalc, a crate turning a textual arithmetic expression into a single
//! `f64`.
//!
//! The easiest way to use this crate is with the
//! [`calculate`](fn.calculate.html) function:
//!
//! ```
//! assert_eq!(treecalc::calculate("3+5*2"), Ok(13.0));
//! assert_eq!(treecalc::calculate("2(3+4)"), Ok(14.0));
//! assert_eq!(treecalc::calculate("median(1,2,3,4)"), Ok(2.5));
//! ```
//!
//! Building the tree and evaluating it can be separated with the
//! [`Expr`](struct.Expr.html) type, which also gives access to the tree:
//!
//! ```
//! use treecalc::Expr;
//!
//! let expr = Expr::parse("sin(0)+1").unwrap();
//! assert_eq!(expr.eval(), Ok(1.0));
//! println!("{}", expr.ast());
//! ```
//!
//! # Language definition
//!
//! An expression can contain the following elements:
//!
//! - number literals made of digits and at most one decimal point: `12`,
//!   `0.5`, `.5`. There are no exponents and no signed literals, a leading
//!   `-` is the unary minus operator;
//! - mathematical operators: `+` for addition, `-` for subtraction and
//!   negation, `*` for multiplication, `/` for division and `^` for
//!   exponentiation;
//! - left and right parenthesis. An unclosed group is closed at the end of the
//!   input, and an unmatched `)` closes a group around everything before it;
//! - function calls, with comma separated arguments: `sin(1)`, `mean(1,2,3)`.
//!   The aggregates `sum`, `mean`, `median` and `stdev` (sample standard
//!   deviation) take any number of arguments. The trigonometric functions
//!   `sin`, `cos`, `tan`, `csc`, `sec`, `cot`, their inverses (`asin` or
//!   `arcsin`, ...) and the hyperbolic functions and their inverses take one.
//!   Names are case insensitive;
//! - implied multiplication: a number or a closed group directly followed by a
//!   group or a function call is multiplied with it, `2(1+1)` is `2*(1+1)`
//!   and `(1+1)sin(1)` is `(1+1)*sin(1)`.
//!
//! Whitespace is ignored between tokens, which is more lenient than the
//! reference calculator this crate reproduces, where a space is a token of its
//! own and rejected. Any other symbol is an error.
//!
//! Operators of equal precedence group from left to right. This includes
//! exponentiation: `2^3^2` is `(2^3)^2 = 64`, not `2^9`.
//!
//! An operator following a function call takes the call as its left operand,
//! but never climbs above the call: `2*cos(0)+1` is `2*(cos(0)+1) = 4`. Both
//! behaviours are kept on purpose and pending confirmation.
//!
//! Results carry the floating point properties: `1/0` is infinity and
//! `asin(2)` is NaN, neither is an error.
//!
//! # Technical details
//!
//! The tree is built in a single pass over the tokens. A cursor stays on the
//! node of the last token, and each operator is placed by walking up from the
//! cursor to the first ancestor binding less tightly, then inserting the
//! operator above the node reached. Nodes live in an arena and refer to each
//! other by index.

#[macro_use]
extern crate lazy_static;

mod ast;
mod builder;
mod error;
mod expr;
mod functions;
mod lexer;
mod token;

pub use ast::{Ast, Node, NodeId};
pub use error::Error;
pub use expr::{calculate, Expr};
pub use functions::{call, AGGREGATES, FUNCTIONS};
pub use lexer::{tokenize, Lexer};
pub use token::{Op, TokenKind};
