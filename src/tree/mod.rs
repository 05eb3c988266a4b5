//! Huffman coding assigns each symbol a code, more commonly used symbols get
//! shorter codes and less commonly used symbols get longer codes. Codes are
//! prefix free, meaning no code is the start of another code.
//!
//! The code is held as a binary tree of [`Node`]s. Walking from the root, a `0` bit
//! descends into the zero child and a `1` bit into the one child. The bits taken to reach
//! a leaf are that leaf's code.
mod builder;
mod frequency;

pub use builder::*;
pub use frequency::*;

use alloc::boxed::Box;
use alloc::vec::Vec;

/// Identifies one element of the alphabet. Byte oriented alphabets use 0..=255 but
/// nothing in the tree depends on that bound.
pub type Symbol = u32;

/// Aggregate frequency of the symbols below a node.
pub type Weight = u64;

/// A node of a prefix code tree.
///
/// Internal nodes always own exactly two children, so a node is a leaf iff it has no
/// children. Trees are never changed after they have been built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: Symbol,
        weight: Weight,
    },
    Internal {
        weight: Weight,
        zero: Box<Node>,
        one: Box<Node>,
    },
}

impl Node {
    pub fn leaf(symbol: Symbol, weight: Weight) -> Self {
        Node::Leaf { symbol, weight }
    }

    /// Joins two subtrees under a new internal node, `zero` is reached with a `0` bit.
    ///
    /// The weight saturates at `Weight::MAX`, [`TreeBuilder`] reports such sums as
    /// [`BuildError::WeightOverflow`] before merging.
    pub fn merge(zero: Node, one: Node) -> Self {
        Node::Internal {
            weight: zero.weight().saturating_add(one.weight()),
            zero: Box::new(zero),
            one: Box::new(one),
        }
    }

    pub fn weight(&self) -> Weight {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// The symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The (zero, one) children of an internal node.
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { zero, one, .. } => Some((&**zero, &**one)),
        }
    }

    /// The child reached by consuming `bit` at this node.
    pub fn child(&self, bit: bool) -> Option<&Node> {
        self.children()
            .map(|(zero, one)| if bit { one } else { zero })
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { zero, one, .. } => zero.leaf_count() + one.leaf_count(),
        }
    }

    /// Length of the longest code in the tree. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { zero, one, .. } => 1 + usize::max(zero.depth(), one.depth()),
        }
    }

    /// (symbol, code length) for every leaf, in pre-order.
    pub fn code_lengths(&self) -> Vec<(Symbol, usize)> {
        let mut lengths = Vec::with_capacity(self.leaf_count());
        self.collect_lengths(0, &mut lengths);
        lengths
    }

    fn collect_lengths(&self, depth: usize, lengths: &mut Vec<(Symbol, usize)>) {
        match self {
            Node::Leaf { symbol, .. } => lengths.push((*symbol, depth)),
            Node::Internal { zero, one, .. } => {
                zero.collect_lengths(depth + 1, lengths);
                one.collect_lengths(depth + 1, lengths);
            }
        }
    }
}
