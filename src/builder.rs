use crate::ast::{Ast, NodeId};
use crate::error::Error;
use crate::token::{Op, TokenKind};
use log::trace;

/// Builds an [`Ast`] in a single pass over the tokens.
///
/// The builder keeps one cursor on the node matching the last consumed token,
/// and decides where the next token goes from the kinds of the cursor and of
/// the incoming token. Operators are placed by walking up from the cursor
/// (precedence climbing), so no operator stack is needed.
pub(crate) struct Builder {
    ast: Ast,
    cursor: NodeId,
}

impl Builder {
    pub fn build(tokens: Vec<String>) -> Result<Ast, Error> {
        let mut tokens = tokens.into_iter();
        let first = tokens.next().ok_or(Error::EmptyExpression)?;
        let kind = classify(&first)?;

        let ast = Ast::new(first, kind);
        let cursor = ast.root();
        let mut builder = Self { ast, cursor };
        for token in tokens {
            builder.step(token)?;
        }
        Ok(builder.finish())
    }

    fn step(&mut self, token: String) -> Result<(), Error> {
        let incoming = classify(&token)?;
        let previous = self.ast.node(self.cursor).kind();
        trace!("'{}' after '{}'", token, self.ast.node(self.cursor).value());

        self.cursor = match (previous, incoming) {
            (TokenKind::Number | TokenKind::ClosedParen, TokenKind::Operator(op)) => {
                self.place_operator(op, token)
            }
            (TokenKind::Number, TokenKind::Open | TokenKind::Word)
            | (TokenKind::ClosedParen, TokenKind::Word) => self.implied_multiply(token, incoming),
            (TokenKind::Number | TokenKind::ClosedParen, TokenKind::Close) => {
                self.close_parentheses()
            }
            (TokenKind::Number | TokenKind::ClosedParen, TokenKind::Comma) => {
                self.up_to_parentheses()
            }
            (
                TokenKind::Operator(_) | TokenKind::Open,
                TokenKind::Number
                | TokenKind::Open
                | TokenKind::Word
                | TokenKind::Operator(Op::Minus),
            )
            | (TokenKind::Word, TokenKind::Open) => self.adopt(token, incoming),
            _ => {
                return Err(Error::InvalidTokenSequence {
                    previous: self.ast.node(self.cursor).value().to_owned(),
                    token,
                })
            }
        };
        Ok(())
    }

    fn finish(mut self) -> Ast {
        let root = self.ast.top(self.cursor);
        self.ast.set_root(root);
        trace!("expression tree:\n{}", self.ast);
        self.ast
    }

    /// Attach the token as the last child of the cursor
    fn adopt(&mut self, token: String, kind: TokenKind) -> NodeId {
        let node = self.ast.push(token, kind);
        self.ast.add_child(self.cursor, node)
    }

    /// Walk up from the cursor while the parent binds at least as tightly as
    /// `op`, then insert the operator above the node reached. The reached node
    /// becomes the left operand.
    ///
    /// A function name has precedence 0, so the walk never climbs past a
    /// call: `2*cos(0)+1` is `2*(cos(0)+1)`.
    fn place_operator(&mut self, op: Op, token: String) -> NodeId {
        let mut pointer = self.cursor;
        while let Some(parent) = self.ast.node(pointer).parent() {
            if op.precedence() > self.ast.node(parent).kind().precedence() {
                break;
            }
            pointer = parent;
        }
        let pointer = self.whole_call(pointer);
        let node = self.ast.push(token, TokenKind::Operator(op));
        self.ast.insert_above(pointer, node)
    }

    /// A closed argument list stands for its whole function call
    fn whole_call(&self, id: NodeId) -> NodeId {
        let node = self.ast.node(id);
        match node.parent() {
            Some(parent)
                if node.kind() == TokenKind::ClosedParen
                    && self.ast.node(parent).kind() == TokenKind::Word =>
            {
                parent
            }
            _ => id,
        }
    }

    /// Walk up to the innermost open group. At the top of the tree without
    /// finding one, a new group is opened above everything.
    fn up_to_parentheses(&mut self) -> NodeId {
        let mut pointer = self.cursor;
        while self.ast.node(pointer).kind() != TokenKind::Open {
            match self.ast.node(pointer).parent() {
                Some(parent) => pointer = parent,
                None => {
                    let open = self.ast.push("(".into(), TokenKind::Open);
                    return self.ast.insert_above(pointer, open);
                }
            }
        }
        pointer
    }

    fn close_parentheses(&mut self) -> NodeId {
        let open = self.up_to_parentheses();
        self.ast.close(open);
        open
    }

    /// `2(…)`, `2sin(…)` and `(…)sin(…)`: multiply the cursor with the
    /// incoming token, which becomes the new cursor
    fn implied_multiply(&mut self, token: String, kind: TokenKind) -> NodeId {
        let times = self.ast.push("*".into(), TokenKind::Operator(Op::Mul));
        self.cursor = self.ast.insert_above(self.cursor, times);
        self.adopt(token, kind)
    }
}

fn classify(token: &str) -> Result<TokenKind, Error> {
    TokenKind::classify(token).ok_or_else(|| Error::InvalidToken(token.to_owned()))
}
