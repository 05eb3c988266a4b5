use super::DecodeError;
use crate::tree::{Node, Symbol};
use alloc::vec::Vec;
use core::iter::FusedIterator;

/// Lazily decodes symbols by walking the tree once per symbol.
///
/// Every walk starts at the root and consumes one bit per internal node until it reaches
/// a leaf. The source running dry at the root ends the stream. Running dry in the middle
/// of a walk yields [`DecodeError::TruncatedStream`]. Either way the source is not polled
/// again afterwards.
///
/// A tree that is a single leaf has a zero length code, which can't be told apart from
/// an empty stream. Such a tree is decoded as if its code was a single bit of any value,
/// every bit of the source yields the symbol once.
pub struct Translate<'t, I> {
    root: &'t Node,
    bits: I,
    bits_read: usize,
    done: bool,
}

impl<'t, I: Iterator<Item = bool>> Translate<'t, I> {
    /// Bits consumed from the source so far
    pub fn bits_read(&self) -> usize {
        self.bits_read
    }

    fn next_bit(&mut self) -> Option<bool> {
        let Some(bit) = self.bits.next() else {
            self.done = true;
            return None;
        };
        self.bits_read += 1;
        Some(bit)
    }
}

impl<'t, I: Iterator<Item = bool>> Iterator for Translate<'t, I> {
    type Item = Result<Symbol, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let root = self.root;
        if let Node::Leaf { symbol, .. } = root {
            self.next_bit()?;
            return Some(Ok(*symbol));
        }

        let mut node = root;
        let mut depth = 0;
        while let Node::Internal { zero, one, .. } = node {
            let bit = match self.next_bit() {
                Some(bit) => bit,
                None if depth == 0 => return None,
                None => {
                    return Some(Err(DecodeError::TruncatedStream {
                        bits_read: self.bits_read,
                        depth,
                    }));
                }
            };
            node = if bit { &**one } else { &**zero };
            depth += 1;
        }
        node.symbol().map(Ok)
    }
}

impl<'t, I: Iterator<Item = bool>> FusedIterator for Translate<'t, I> {}

/// Decodes the bits with the code of `root`, see [`Translate`].
pub fn translate<I: IntoIterator<Item = bool>>(root: &Node, bits: I) -> Translate<'_, I::IntoIter> {
    Translate {
        root,
        bits: bits.into_iter(),
        bits_read: 0,
        done: false,
    }
}

/// Decodes all bits, failing if the source ends in the middle of a code.
pub fn decode_all<I: IntoIterator<Item = bool>>(
    root: &Node,
    bits: I,
) -> Result<Vec<Symbol>, DecodeError> {
    translate(root, bits).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoding::{BitReader, TextBits};
    use core::cell::Cell;

    /// 0 -> 'a', 10 -> 'b', 110 -> 'c', 111 -> 'd'
    fn abcd() -> Node {
        Node::merge(
            Node::leaf(97, 8),
            Node::merge(
                Node::leaf(98, 4),
                Node::merge(Node::leaf(99, 2), Node::leaf(100, 2)),
            ),
        )
    }

    #[test]
    fn decodes_in_order() {
        let root = abcd();
        let bits = TextBits::new("0 10 110 111 0").unwrap();
        assert_eq!(decode_all(&root, bits).unwrap(), [97, 98, 99, 100, 97]);
    }

    #[test]
    fn empty_stream() {
        let root = abcd();
        assert!(decode_all(&root, Vec::<bool>::new()).unwrap().is_empty());
        assert!(decode_all(&Node::leaf(5, 1), Vec::<bool>::new()).unwrap().is_empty());
    }

    #[test]
    fn truncated_mid_symbol() {
        let root = abcd();
        let mut decoded = translate(&root, TextBits::new("0 11").unwrap());
        assert_eq!(decoded.next().unwrap().unwrap(), 97);
        assert!(matches!(
            decoded.next(),
            Some(Err(DecodeError::TruncatedStream {
                bits_read: 3,
                depth: 2
            }))
        ));
        assert!(decoded.next().is_none());

        assert!(matches!(
            decode_all(&root, TextBits::new("11").unwrap()),
            Err(DecodeError::TruncatedStream { depth: 2, .. })
        ));
    }

    /// Runs dry on the second poll, then yields `true` again
    fn gap_on_second_poll(polls: &Cell<usize>) -> impl Iterator<Item = bool> + '_ {
        core::iter::from_fn(move || {
            polls.set(polls.get() + 1);
            if polls.get() == 2 {
                None
            } else {
                Some(true)
            }
        })
    }

    #[test]
    fn source_not_polled_after_end() {
        let polls = Cell::new(0);
        let root = abcd();
        let mut decoded = translate(&root, gap_on_second_poll(&polls));
        assert!(matches!(
            decoded.next(),
            Some(Err(DecodeError::TruncatedStream { depth: 1, .. }))
        ));
        assert!(decoded.next().is_none());
        assert!(decoded.next().is_none());
        assert_eq!(polls.get(), 2);

        let polls = Cell::new(0);
        let root = Node::leaf(7, 1);
        let mut decoded = translate(&root, gap_on_second_poll(&polls));
        assert_eq!(decoded.next().unwrap().unwrap(), 7);
        assert!(decoded.next().is_none());
        assert!(decoded.next().is_none());
        assert_eq!(polls.get(), 2);
    }

    #[test]
    fn lazy_decoding() {
        let root = abcd();
        let mut decoded = translate(&root, TextBits::new("10 0 111").unwrap());
        assert_eq!(decoded.next().unwrap().unwrap(), 98);
        assert_eq!(decoded.bits_read(), 2);
        assert_eq!(decoded.next().unwrap().unwrap(), 97);
        assert_eq!(decoded.bits_read(), 3);
    }

    #[test]
    fn single_symbol_tree() {
        let root = Node::leaf(42, 3);
        assert_eq!(
            decode_all(&root, [false, true, false]).unwrap(),
            [42, 42, 42]
        );
    }

    #[test]
    fn packed_source() {
        // 10 0 111 110, lowest bit first
        let packed = [0b1111_1001, 0b0000_0000];
        let bits = BitReader::with_bit_len(&packed, 9).unwrap();
        assert_eq!(decode_all(&abcd(), bits).unwrap(), [98, 97, 100, 99]);
    }
}
