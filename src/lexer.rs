use log::debug;
use std::str::Chars;

/// Split `input` into token strings.
///
/// Runs of digits (and `.`) and runs of letters form a single token, every
/// other character is a token of its own. Whitespace ends a run and is
/// dropped. Tokenizing never fails: invalid tokens are reported when the tree
/// is built.
///
/// # Examples
///
/// ```
/// # use treecalc::tokenize;
/// assert_eq!(tokenize("2sin(3.5)"), vec!["2", "sin", "(", "3.5", ")"]);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    Lexer::new(input).tokenize()
}

/// An helper struct for lexing the input
pub struct Lexer<'a> {
    input: Chars<'a>,
    current: String,
    tokens: Vec<String>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `string`
    #[must_use]
    pub fn new(string: &'a str) -> Self {
        Lexer {
            input: string.chars(),
            current: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Consume the lexer, producing the ordered token strings
    #[must_use]
    pub fn tokenize(mut self) -> Vec<String> {
        let mut previous = None;
        while let Some(c) = self.input.next() {
            if !previous.map_or(false, |p| same_run(p, c)) {
                self.flush();
            }
            if !c.is_whitespace() {
                self.current.push(c);
            }
            previous = Some(c);
        }
        self.flush();
        debug!("tokens: {:?}", self.tokens);
        self.tokens
    }

    /// Emit the accumulated run. The accumulator is empty before the first
    /// character and after whitespace, and empty runs are never tokens.
    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.tokens.push(std::mem::take(&mut self.current));
        }
    }
}

/// Check if `previous` and `c` belong to the same multi-character run
fn same_run(previous: char, c: char) -> bool {
    (is_number_part(previous) && is_number_part(c)) || (is_word_part(previous) && is_word_part(c))
}

/// Check if `c` can appear inside a number
fn is_number_part(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Check if `c` can appear inside a word
fn is_word_part(c: char) -> bool {
    c.is_alphabetic()
}
