//! A Huffman prefix-code engine.
//!
//! The crate builds an optimal prefix code from symbol frequencies ([`build`]),
//! persists it as a textual code table ([`code_table`]) and decodes bitstreams
//! written with that code ([`translate`]).
//!
//! ```
//! use huffcode::{build, code_table, count_bytes, decode_all, TextBits};
//!
//! let root = build(&count_bytes(b"abracadabra")).unwrap();
//! let text = code_table::to_text(&root);
//! let reloaded = code_table::from_text(&text).unwrap();
//! assert_eq!(code_table::serialize(&root), code_table::serialize(&reloaded));
//!
//! // 'a' is the most frequent byte and gets the one bit code "0"
//! let bits = TextBits::new("000").unwrap();
//! assert_eq!(decode_all(&reloaded, bits).unwrap(), vec![97, 97, 97]);
//! ```
#![no_std]
#![deny(trivial_casts, trivial_numeric_casts, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[cfg(feature = "std")]
pub const VERBOSE: bool = false;

macro_rules! vprintln {
    ($($x:expr),*) => {
        #[cfg(feature = "std")]
        if crate::VERBOSE {
            std::println!($($x),*);
        }
    }
}

pub mod code_table;
pub mod decoding;
pub mod tree;
mod tests;

pub use code_table::{CodeEntry, CodeTableError};
pub use decoding::{decode_all, translate, BitReader, DecodeError, TextBits, Translate};
pub use tree::{build, count_bytes, BuildError, Node, Symbol, TreeBuilder, Weight};

/// Builds a code from the byte frequencies of `data`, persists and reloads it
/// and checks that the reloaded code is the same.
///
/// Panics on any mismatch, this is meant to be driven by a fuzzer.
#[cfg(any(test, feature = "fuzz_exports"))]
pub fn round_trip(data: &[u8]) {
    let root = match build(&count_bytes(data)) {
        Ok(root) => root,
        Err(BuildError::EmptyAlphabet) => {
            assert!(data.is_empty());
            return;
        }
        Err(err @ BuildError::WeightOverflow { .. }) => panic!("{}", err),
    };
    assert_eq!(root.weight(), data.len() as u64);

    let text = code_table::to_text(&root);
    let reloaded = code_table::from_text(&text).unwrap();
    let entries = code_table::serialize(&root);
    assert_eq!(entries, code_table::serialize(&reloaded));

    // feed the decoder the concatenated paths of the input bytes
    let mut bits = alloc::vec::Vec::new();
    for byte in data {
        let entry = entries
            .iter()
            .find(|entry| entry.symbol == Symbol::from(*byte))
            .unwrap();
        if entry.path.is_empty() {
            bits.push(false);
        }
        bits.extend(entry.path.chars().map(|c| c == '1'));
    }
    let decoded = decode_all(&reloaded, bits).unwrap();
    assert_eq!(decoded.len(), data.len());
    for (symbol, byte) in decoded.iter().zip(data) {
        assert_eq!(*symbol, Symbol::from(*byte));
    }
}
