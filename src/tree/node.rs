// Syntax tree definitions for the TINY front end

use crate::errors::TreeError;
use crate::listing::Listing;
use crate::scanner::TokenKind;

/// Index of a node inside its [`SyntaxTree`].
pub type NodeId = usize;

/// Number of child slots every node has.
pub const MAX_CHILDREN: usize = 3;

/// Type inferred for an expression by a later checking pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpType {
    #[default]
    Void,
    Integer,
    Boolean,
}

/// Statement variants.
///
/// Slot use: `If` is condition / then / else, `Repeat` is body / condition,
/// `Assign` and `PlusEq` hold their value in slot 0, `Write` its operand,
/// `For` is start / end / body, `Reg` is target / pattern. `Read` has no
/// children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StmtKind {
    If,
    Repeat,
    Assign { name: String },
    Read { name: String },
    Write,
    For { name: String },
    PlusEq { name: String },
    Reg,
}

/// Expression variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpKind {
    Op(TokenKind),
    Const(i32),
    Id(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Stmt(StmtKind),
    Exp(ExpKind),
}

impl NodeKind {
    /// Number of leading child slots this kind uses. Operators take one or two
    /// operands; constants and identifiers are leaves.
    pub fn slots_used(&self) -> usize {
        match self {
            NodeKind::Stmt(StmtKind::If | StmtKind::For { .. }) => 3,
            NodeKind::Stmt(StmtKind::Repeat | StmtKind::Reg) => 2,
            NodeKind::Stmt(
                StmtKind::Assign { .. } | StmtKind::PlusEq { .. } | StmtKind::Write,
            ) => 1,
            NodeKind::Stmt(StmtKind::Read { .. }) => 0,
            NodeKind::Exp(ExpKind::Op(_)) => 2,
            NodeKind::Exp(ExpKind::Const(_) | ExpKind::Id(_)) => 0,
        }
    }
}

/// Where a node sits: a slot of a parent, or the top-level sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Link {
    parent: Option<NodeId>,
    slot: usize,
    index: usize,
}

/// A single tree node. Its kind never changes after creation.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    line: usize,
    exp_type: Option<ExpType>,
    slots: [Vec<NodeId>; MAX_CHILDREN],
    link: Option<Link>,
}

impl Node {
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Scanner line active when the node was created.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Inferred type; `None` for statements.
    pub fn exp_type(&self) -> Option<ExpType> {
        self.exp_type
    }

    pub fn is_statement(&self) -> bool {
        matches!(self.kind, NodeKind::Stmt(_))
    }
}

/// Arena owning every node built for one compilation unit.
///
/// Each child slot holds an ordered statement sequence: its first element is
/// the slot's child and the rest are that child's siblings. The top-level
/// sequence is the tree's roots. A node can be placed only once, which keeps
/// the structure a forest.
#[derive(Debug, Clone, Default)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl SyntaxTree {
    pub fn new() -> Self {
        SyntaxTree::default()
    }

    /// Create an unattached statement node.
    ///
    /// Returns `None` if the arena cannot grow; the failure is written to
    /// `listing`.
    pub fn new_statement(&mut self, kind: StmtKind, line: usize, listing: &mut Listing) -> Option<NodeId> {
        self.alloc(NodeKind::Stmt(kind), None, line, listing)
    }

    /// Create an unattached expression node with type [`ExpType::Void`].
    /// Returns `None` if the arena cannot grow.
    pub fn new_expression(&mut self, kind: ExpKind, line: usize, listing: &mut Listing) -> Option<NodeId> {
        self.alloc(NodeKind::Exp(kind), Some(ExpType::Void), line, listing)
    }

    fn alloc(
        &mut self,
        kind: NodeKind,
        exp_type: Option<ExpType>,
        line: usize,
        listing: &mut Listing,
    ) -> Option<NodeId> {
        if self.nodes.try_reserve(1).is_err() {
            log::error!("node arena exhausted at line {}", line);
            listing.out_of_memory(line);
            return None;
        }
        let id = self.nodes.len();
        self.nodes.push(Node {
            kind,
            line,
            exp_type,
            slots: Default::default(),
            link: None,
        });
        Some(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Record the inferred type of an expression. Statements have no type and
    /// are left untouched; returns whether the type was stored.
    pub fn set_type(&mut self, id: NodeId, ty: ExpType) -> bool {
        match self.nodes.get_mut(id).and_then(|n| n.exp_type.as_mut()) {
            Some(slot) => {
                *slot = ty;
                true
            }
            None => false,
        }
    }

    /// Append `child` to the sequence in `slot` of `parent`.
    ///
    /// Only the slots the parent's kind uses accept children; see
    /// [`NodeKind::slots_used`].
    pub fn attach(&mut self, parent: NodeId, slot: usize, child: NodeId) -> Result<(), TreeError> {
        let Some(node) = self.nodes.get(parent) else {
            return Err(TreeError::UnknownNode(parent));
        };
        if slot >= MAX_CHILDREN {
            return Err(TreeError::SlotOutOfRange(slot));
        }
        if slot >= node.kind.slots_used() {
            return Err(TreeError::SlotNotUsed { parent, slot });
        }
        self.check_detached(child)?;
        if self.ancestors_and_self(parent).any(|id| id == child) {
            return Err(TreeError::WouldCycle { parent, child });
        }

        let seq = &mut self.nodes[parent].slots[slot];
        let index = seq.len();
        seq.push(child);
        self.nodes[child].link = Some(Link {
            parent: Some(parent),
            slot,
            index,
        });
        Ok(())
    }

    /// Append `child` to the top-level statement sequence.
    pub fn push_root(&mut self, child: NodeId) -> Result<(), TreeError> {
        self.check_detached(child)?;
        let index = self.roots.len();
        self.roots.push(child);
        self.nodes[child].link = Some(Link {
            parent: None,
            slot: 0,
            index,
        });
        Ok(())
    }

    fn check_detached(&self, id: NodeId) -> Result<(), TreeError> {
        match self.nodes.get(id) {
            None => Err(TreeError::UnknownNode(id)),
            Some(node) if node.link.is_some() => Err(TreeError::AlreadyAttached(id)),
            Some(_) => Ok(()),
        }
    }

    fn ancestors_and_self(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |&n| self.parent(n))
    }

    /// Top-level statement sequence.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Whole sequence stored in `slot` of `id`.
    pub fn children(&self, id: NodeId, slot: usize) -> &[NodeId] {
        self.nodes
            .get(id)
            .and_then(|n| n.slots.get(slot))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First node in `slot` of `id`.
    pub fn child(&self, id: NodeId, slot: usize) -> Option<NodeId> {
        self.children(id, slot).first().copied()
    }

    /// Next node in the same sequence as `id`.
    pub fn sibling(&self, id: NodeId) -> Option<NodeId> {
        let link = self.nodes.get(id)?.link?;
        let seq = match link.parent {
            Some(parent) => self.children(parent, link.slot),
            None => self.roots.as_slice(),
        };
        seq.get(link.index + 1).copied()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id)?.link?.parent
    }
}
