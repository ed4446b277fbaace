use crate::builder::Builder;
use crate::error::Error;
use crate::token::TokenKind;
use std::fmt::{self, Display, Formatter};

/// Index of a node in its [`Ast`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A single token placed in the expression tree
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    value: String,
    kind: TokenKind,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Node {
    /// The token string of this node
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The classification of the token string
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Operands or call arguments, left to right
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The node this one is attached under, `None` for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Expression tree stored as an arena of nodes.
///
/// Children own nothing: every node lives in the arena and refers to its
/// children and parent by [`NodeId`], so re-attaching a node is a matter of
/// rewriting two indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Ast {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Ast {
    /// Build the tree for a sequence of token strings, as produced by
    /// [`tokenize`](fn.tokenize.html).
    pub fn from_tokens(tokens: Vec<String>) -> Result<Self, Error> {
        Builder::build(tokens)
    }

    /// Create a tree holding a single root node
    pub(crate) fn new(value: String, kind: TokenKind) -> Self {
        let mut ast = Self {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        ast.root = ast.push(value, kind);
        ast
    }

    /// The root node of the tree
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get the node behind `id`
    ///
    /// # Panics
    ///
    /// If `id` belongs to another tree with more nodes.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Add a detached node to the arena
    pub(crate) fn push(&mut self, value: String, kind: TokenKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value,
            kind,
            children: Vec::new(),
            parent: None,
        });
        id
    }

    /// Append `child` to the children of `parent`, returning `child`
    pub(crate) fn add_child(&mut self, parent: NodeId, child: NodeId) -> NodeId {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        child
    }

    /// Put `node` in the place of `below`, and attach `below` as the first
    /// child of `node`. Returns `node`.
    pub(crate) fn insert_above(&mut self, below: NodeId, node: NodeId) -> NodeId {
        if let Some(parent) = self.nodes[below.0].parent {
            let siblings = &mut self.nodes[parent.0].children;
            if let Some(slot) = siblings.iter().position(|&child| child == below) {
                siblings[slot] = node;
            }
            self.nodes[node.0].parent = Some(parent);
        }
        self.add_child(node, below);
        node
    }

    /// Mark the open group `id` as closed, turning `(` into `()`
    pub(crate) fn close(&mut self, id: NodeId) {
        let node = &mut self.nodes[id.0];
        node.value.push(')');
        node.kind = TokenKind::ClosedParen;
    }

    /// Follow parents from `id` up to the node without one
    pub(crate) fn top(&self, mut id: NodeId) -> NodeId {
        while let Some(parent) = self.nodes[id.0].parent {
            id = parent;
        }
        id
    }

    pub(crate) fn set_root(&mut self, id: NodeId) {
        self.root = id;
    }

    fn fmt_children(&self, fmt: &mut Formatter, id: NodeId, padding: &str) -> fmt::Result {
        let children = self.node(id).children();
        for (i, &child) in children.iter().enumerate() {
            let has_next = i + 1 < children.len();
            let pointer = if has_next { "├──" } else { "└──" };
            write!(fmt, "\n{}{}{}", padding, pointer, self.node(child).value())?;
            let padding = format!("{}{}", padding, if has_next { "│  " } else { "   " });
            self.fmt_children(fmt, child, &padding)?;
        }
        Ok(())
    }
}

/// Draw the tree, one node per line
impl Display for Ast {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "{}", self.node(self.root).value())?;
        self.fmt_children(fmt, self.root, "")
    }
}
