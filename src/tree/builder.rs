use super::{Node, Symbol, Weight};
use alloc::collections::{BTreeMap, BinaryHeap};
use alloc::vec::Vec;
use core::cmp::Ordering;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    #[error("Can't build a huffman tree without any symbol of nonzero weight")]
    EmptyAlphabet,
    #[error("Sum of the weights {zero} and {one} does not fit into a u64")]
    WeightOverflow { zero: Weight, one: Weight },
}

/// A node waiting in the merge queue.
struct Queued {
    node: Node,
    /// Position in which the node entered the queue, breaks ties between equal weights
    order: usize,
}

impl Queued {
    fn key(&self) -> (Weight, usize) {
        (self.node.weight(), self.order)
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the greatest element, reverse to pop the lowest weight first
        other.key().cmp(&self.key())
    }
}

/// Builds a huffman tree by repeatedly merging the two lightest nodes.
///
/// Nodes of equal weight leave the queue in the order they entered it. Leaves enter in
/// ascending symbol order, merged nodes enter after all leaves in the order they were
/// created. Other tie-breaks give different trees with the same total code length.
pub struct TreeBuilder {
    queue: BinaryHeap<Queued>,
    next_order: usize,
}

impl TreeBuilder {
    /// Index is the symbol, values are the frequencies. Zero frequencies are skipped.
    pub fn new(frequencies: &[Weight]) -> Self {
        let mut builder = TreeBuilder {
            queue: BinaryHeap::with_capacity(frequencies.len()),
            next_order: 0,
        };
        for (symbol, weight) in frequencies.iter().copied().enumerate() {
            if weight > 0 {
                builder.push(Node::leaf(symbol as Symbol, weight));
            }
        }
        builder
    }

    /// Like [`TreeBuilder::new`] for sparse alphabets. Weights of repeated symbols are added up.
    pub fn from_pairs<I: IntoIterator<Item = (Symbol, Weight)>>(
        pairs: I,
    ) -> Result<Self, BuildError> {
        let mut frequencies = BTreeMap::new();
        for (symbol, weight) in pairs {
            let total: &mut Weight = frequencies.entry(symbol).or_insert(0);
            *total = total
                .checked_add(weight)
                .ok_or(BuildError::WeightOverflow {
                    zero: *total,
                    one: weight,
                })?;
        }

        let mut builder = TreeBuilder {
            queue: BinaryHeap::with_capacity(frequencies.len()),
            next_order: 0,
        };
        for (symbol, weight) in frequencies {
            if weight > 0 {
                builder.push(Node::leaf(symbol, weight));
            }
        }
        Ok(builder)
    }

    fn push(&mut self, node: Node) {
        self.queue.push(Queued {
            node,
            order: self.next_order,
        });
        self.next_order += 1;
    }

    /// Amount of subtrees that still have to be merged into the root
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Weights of the subtrees still in the queue, in no particular order
    pub fn remaining_weights(&self) -> Vec<Weight> {
        self.queue.iter().map(|queued| queued.node.weight()).collect()
    }

    /// Merges the two lightest subtrees and returns their weights as (zero, one).
    ///
    /// Returns `None` once at most one subtree is left. If the merged weight would not fit
    /// into a [`Weight`] nothing is merged and [`BuildError::WeightOverflow`] is returned.
    pub fn merge_step(&mut self) -> Result<Option<(Weight, Weight)>, BuildError> {
        if self.queue.len() < 2 {
            return Ok(None);
        }
        let (Some(zero), Some(one)) = (self.queue.pop(), self.queue.pop()) else {
            unreachable!("queue holds at least two nodes");
        };
        let weights = (zero.node.weight(), one.node.weight());
        if weights.0.checked_add(weights.1).is_none() {
            self.queue.push(zero);
            self.queue.push(one);
            return Err(BuildError::WeightOverflow {
                zero: weights.0,
                one: weights.1,
            });
        }
        self.push(Node::merge(zero.node, one.node));
        Ok(Some(weights))
    }

    /// Runs the remaining merges and returns the root
    pub fn finish(mut self) -> Result<Node, BuildError> {
        let leaves = self.queue.len();
        while self.merge_step()?.is_some() {}

        let root = self.queue.pop().ok_or(BuildError::EmptyAlphabet)?.node;
        vprintln!(
            "Built huffman tree with {} leaves, total weight: {}, depth: {}",
            leaves,
            root.weight(),
            root.depth()
        );
        Ok(root)
    }
}

/// Builds the huffman tree for a frequency table where the index is the symbol.
pub fn build(frequencies: &[Weight]) -> Result<Node, BuildError> {
    TreeBuilder::new(frequencies).finish()
}
