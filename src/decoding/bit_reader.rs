/// Reads bits from packed bytes, starting at the least significant bit of each byte.
///
/// As an iterator it yields one bit at a time, which makes it a bit source for
/// [`translate`](crate::translate).
pub struct BitReader<'s> {
    idx: usize, //index counts bits already read
    len: usize, //bits of source that carry data, the rest is padding
    source: &'s [u8],
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GetBitsError {
    #[error("Can't read {requested} bits, only have {remaining} bits left")]
    NotEnoughRemainingBits { requested: usize, remaining: usize },
}

impl<'s> BitReader<'s> {
    pub fn new(source: &'s [u8]) -> BitReader<'s> {
        BitReader {
            idx: 0,
            len: source.len() * 8,
            source,
        }
    }

    /// Only the first `bit_len` bits of `source` are read, the rest of the last byte is padding.
    pub fn with_bit_len(source: &'s [u8], bit_len: usize) -> Result<BitReader<'s>, GetBitsError> {
        if bit_len > source.len() * 8 {
            return Err(GetBitsError::NotEnoughRemainingBits {
                requested: bit_len,
                remaining: source.len() * 8,
            });
        }
        Ok(BitReader {
            idx: 0,
            len: bit_len,
            source,
        })
    }

    pub fn bits_left(&self) -> usize {
        self.len - self.idx
    }

    pub fn bits_read(&self) -> usize {
        self.idx
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.bits_left() == 0 {
            return None;
        }
        let byte = self.source[self.idx / 8];
        let bit = (byte >> (self.idx % 8)) & 1 == 1;
        self.idx += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.bits_left(), Some(self.bits_left()))
    }
}

impl ExactSizeIterator for BitReader<'_> {}
