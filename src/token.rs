/// The kinds a token string can be classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Digits with at most one decimal point
    Number,
    /// One of `+ - * / ^`
    Operator(Op),
    /// `(`, a group still waiting for its content
    Open,
    /// `)`
    Close,
    /// `()`, a group whose closing parenthesis has been consumed
    ClosedParen,
    /// Letters only: a function name
    Word,
    /// `,`
    Comma,
}

/// Allowed operators in the algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `+`
    Plus,
    /// `-`, binary or unary
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Exp,
}

impl TokenKind {
    /// Classify a token string, returning `None` for strings that fit no kind.
    ///
    /// # Examples
    ///
    /// ```
    /// # use treecalc::{Op, TokenKind};
    /// assert_eq!(TokenKind::classify("3.14"), Some(TokenKind::Number));
    /// assert_eq!(TokenKind::classify("^"), Some(TokenKind::Operator(Op::Exp)));
    /// assert_eq!(TokenKind::classify("()"), Some(TokenKind::ClosedParen));
    /// assert_eq!(TokenKind::classify("."), None);
    /// ```
    #[must_use]
    pub fn classify(token: &str) -> Option<Self> {
        if is_number(token) {
            return Some(Self::Number);
        }
        if let Some(op) = Op::from_token(token) {
            return Some(Self::Operator(op));
        }
        match token {
            "(" => Some(Self::Open),
            ")" => Some(Self::Close),
            "()" => Some(Self::ClosedParen),
            "," => Some(Self::Comma),
            _ if is_word(token) => Some(Self::Word),
            _ => None,
        }
    }

    /// Operator precedence of this kind, `0` for everything but operators
    pub fn precedence(self) -> u8 {
        match self {
            Self::Operator(op) => op.precedence(),
            _ => 0,
        }
    }

    /// Check if this kind is a parenthesis group, open or closed
    pub fn is_group(self) -> bool {
        matches!(self, Self::Open | Self::ClosedParen)
    }
}

impl Op {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Plus),
            "-" => Some(Self::Minus),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "^" => Some(Self::Exp),
            _ => None,
        }
    }

    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first. Equal precedence groups from left to right, `^`
    /// included.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::Div => 2,
            Self::Exp => 3,
        }
    }

    /// Combine two operands. Division by zero and `pow` domain errors give
    /// infinities and NaN.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Plus => left + right,
            Self::Minus => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Exp => libm::pow(left, right),
        }
    }
}

/// Check if `token` is a number literal. Only digits and `.` are accepted, so
/// `inf` or `1e5` are not numbers here.
fn is_number(token: &str) -> bool {
    !token.is_empty()
        && token.chars().all(|c| c.is_ascii_digit() || c == '.')
        && token.parse::<f64>().is_ok()
}

/// Check if `token` is made of ASCII letters only
fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic())
}
