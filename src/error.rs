use thiserror::Error;

/// Error type for the treecalc crate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input did not contain a single token
    #[error("empty expression")]
    EmptyExpression,
    /// A token that is neither a number, an operator, a parenthesis, a comma
    /// nor a word
    #[error("invalid token: '{0}'")]
    InvalidToken(String),
    /// Two adjacent tokens that can not follow each other
    #[error("invalid tokens together: '{previous}' and '{token}'")]
    InvalidTokenSequence {
        /// The token the tree builder was positioned on
        previous: String,
        /// The incoming token
        token: String,
    },
    /// A function name unknown for the given number of arguments
    #[error("function not recognized: '{name}' with {arity} argument(s)")]
    UnrecognizedFunction {
        /// Name of the function, lowercased
        name: String,
        /// Number of arguments in the call
        arity: usize,
    },
    /// A node of the expression tree with the wrong shape
    #[error("malformed tree: {0}")]
    MalformedTree(String),
}
