//! The code table is the persisted form of a prefix code: one `(symbol, path)` pair per
//! leaf, where the path is the string of `'0'`/`'1'` branch choices leading from the
//! root to that leaf.
//!
//! [`serialize`] lists the leaves of a tree, [`deserialize`] rebuilds a tree from such a
//! listing. [`to_text`] and [`from_text`] handle the textual file format.
mod text;

pub use text::*;

use crate::tree::{Node, Symbol};
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

/// Longest path [`deserialize`] accepts. Trees rebuilt from a table are walked
/// recursively, this keeps the recursion shallow for any input.
///
/// Huffman trees built from [`Weight`](crate::Weight)s never get this deep, the depth of
/// such a tree grows with the logarithm of its total weight.
pub const MAX_CODE_LENGTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    pub symbol: Symbol,
    /// Branch choices from the root, `'0'` for the zero child and `'1'` for the one child.
    /// Empty when the root itself is the leaf.
    pub path: String,
}

impl CodeEntry {
    pub fn new(symbol: Symbol, path: impl Into<String>) -> Self {
        CodeEntry {
            symbol,
            path: path.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CodeTableError {
    #[error("Code table has no entries")]
    EmptyAlphabet,
    #[error("Path {path:?} contains {found:?}, paths may only contain '0' and '1'")]
    InvalidPathCharacter { path: String, found: char },
    #[error("Path {path:?} of symbol {symbol} collides with the path of another symbol")]
    PathCollision { symbol: Symbol, path: String },
    #[error("Path {path:?} is longer than {limit} bits, the limit for a code with {entries} symbols")]
    PathTooLong {
        path: String,
        entries: usize,
        limit: usize,
    },
    #[error("No symbol has a path starting with {path:?}, the code is incomplete")]
    IncompleteCode { path: String },
    #[error("Line {line} of the code table is malformed: {content:?}")]
    MalformedCodeTable { line: usize, content: String },
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Lists every leaf of the tree with its path, in pre-order with zero children first.
pub fn serialize(root: &Node) -> Vec<CodeEntry> {
    let mut entries = Vec::with_capacity(root.leaf_count());
    let mut path = String::new();
    collect_entries(root, &mut path, &mut entries);
    entries
}

fn collect_entries(node: &Node, path: &mut String, entries: &mut Vec<CodeEntry>) {
    match node {
        Node::Leaf { symbol, .. } => entries.push(CodeEntry::new(*symbol, path.clone())),
        Node::Internal { zero, one, .. } => {
            path.push('0');
            collect_entries(zero, path, entries);
            path.pop();
            path.push('1');
            collect_entries(one, path, entries);
            path.pop();
        }
    }
}

/// A position in a tree that is still being rebuilt from its entries.
enum Slot {
    /// No entry has reached this position yet
    Vacant,
    Leaf(Symbol),
    Branch(Box<[Slot; 2]>),
}

impl Slot {
    /// Steps into the child for `bit`, turning a vacant slot into a branch on the way.
    /// Fails with the symbol of the leaf occupying this slot.
    fn child(&mut self, bit: usize) -> Result<&mut Slot, Symbol> {
        if matches!(self, Slot::Vacant) {
            *self = Slot::Branch(Box::new([Slot::Vacant, Slot::Vacant]));
        }
        match self {
            Slot::Branch(children) => Ok(&mut children[bit]),
            Slot::Leaf(symbol) => Err(*symbol),
            Slot::Vacant => unreachable!("vacant slots were just turned into branches"),
        }
    }

    fn into_node(self, path: &mut String) -> Result<Node, CodeTableError> {
        match self {
            Slot::Vacant => Err(CodeTableError::IncompleteCode { path: path.clone() }),
            // weights are not part of the code table
            Slot::Leaf(symbol) => Ok(Node::leaf(symbol, 0)),
            Slot::Branch(children) => {
                let [zero, one] = *children;
                path.push('0');
                let zero = zero.into_node(path)?;
                path.pop();
                path.push('1');
                let one = one.into_node(path)?;
                path.pop();
                Ok(Node::merge(zero, one))
            }
        }
    }
}

/// Rebuilds a tree from its code table entries. The order of the entries does not matter.
///
/// Every path must lead to its own leaf: a path that repeats another path or is a prefix
/// of another path is a [`CodeTableError::PathCollision`]. Each internal position needs
/// both children, otherwise this fails with [`CodeTableError::IncompleteCode`]. Paths longer
/// than [`MAX_CODE_LENGTH`] fail with [`CodeTableError::PathTooLong`].
pub fn deserialize<'e, I>(entries: I) -> Result<Node, CodeTableError>
where
    I: IntoIterator<Item = &'e CodeEntry>,
{
    use CodeTableError as err;

    let entries: Vec<&CodeEntry> = entries.into_iter().collect();
    if entries.is_empty() {
        return Err(err::EmptyAlphabet);
    }

    // a complete code with n leaves is at most n - 1 deep
    let limit = usize::min(entries.len() - 1, MAX_CODE_LENGTH);
    for entry in &entries {
        if let Some(found) = entry.path.chars().find(|c| *c != '0' && *c != '1') {
            return Err(err::InvalidPathCharacter {
                path: entry.path.clone(),
                found,
            });
        }
        if entry.path.len() > limit {
            return Err(err::PathTooLong {
                path: entry.path.clone(),
                entries: entries.len(),
                limit,
            });
        }
    }

    let mut root = Slot::Vacant;
    for entry in &entries {
        let collision = || err::PathCollision {
            symbol: entry.symbol,
            path: entry.path.clone(),
        };

        let mut slot = &mut root;
        for bit in entry.path.bytes() {
            slot = slot.child(usize::from(bit - b'0')).map_err(|_| collision())?;
        }
        if !matches!(slot, Slot::Vacant) {
            return Err(collision());
        }
        *slot = Slot::Leaf(entry.symbol);
    }

    let root = root.into_node(&mut String::new())?;
    vprintln!(
        "Loaded code table with {} entries, depth: {}",
        entries.len(),
        root.depth()
    );
    Ok(root)
}
