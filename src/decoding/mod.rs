//! Decoding turns a stream of bits back into the symbols they encode.
//!
//! Any `Iterator<Item = bool>` can serve as the bit source. [`BitReader`] reads packed
//! bytes, [`TextBits`] reads text made of `'0'` and `'1'` characters.

pub mod bit_reader;
mod text_bits;
mod translate;

pub use bit_reader::{BitReader, GetBitsError};
pub use text_bits::TextBits;
pub use translate::{decode_all, translate, Translate};

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("Bitstream ended after {bits_read} bits, {depth} bits into a code. Stream is probably truncated")]
    TruncatedStream { bits_read: usize, depth: usize },
    #[error("Character {found:?} at byte {position} is not a bit, only '0' and '1' are allowed")]
    InvalidBitCharacter { position: usize, found: char },
}
