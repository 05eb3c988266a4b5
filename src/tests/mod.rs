#[cfg(test)]
mod random_tables;

#[cfg(test)]
use crate::{code_table, Node, Symbol};
#[cfg(test)]
use alloc::{collections::BTreeMap, vec::Vec};

/// Writes the codes of `symbols` one after another, the way an encoder for `root` would.
/// Symbols of a single leaf tree are written as one bit each.
#[cfg(test)]
fn encode(root: &Node, symbols: &[Symbol]) -> Vec<bool> {
    let codes: BTreeMap<Symbol, Vec<bool>> = code_table::serialize(root)
        .into_iter()
        .map(|entry| {
            let code = if entry.path.is_empty() {
                alloc::vec![false]
            } else {
                entry.path.chars().map(|c| c == '1').collect()
            };
            (entry.symbol, code)
        })
        .collect();

    symbols
        .iter()
        .flat_map(|symbol| codes[symbol].iter().copied())
        .collect()
}

/// Total encoded length of the input the frequencies were counted on
#[cfg(test)]
fn encoded_len(root: &Node, frequencies: &[u64]) -> u64 {
    root.code_lengths()
        .into_iter()
        .map(|(symbol, len)| frequencies[symbol as usize] * len as u64)
        .sum()
}
