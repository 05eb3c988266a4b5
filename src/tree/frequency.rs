//! Contains `count_bytes`, which produces the frequency table
//! a byte oriented code is built from.

use super::Weight;

/// Counts how often each byte value occurs in `data`. The index is the byte value.
pub fn count_bytes(data: &[u8]) -> [Weight; 256] {
    let mut counts = [0; 256];
    add_byte_counts(&mut counts, data);
    counts
}

/// Adds the byte counts of another chunk of input to an existing table.
pub fn add_byte_counts(counts: &mut [Weight; 256], data: &[u8]) {
    for byte in data {
        counts[*byte as usize] += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{add_byte_counts, count_bytes};

    #[test]
    fn dead_beef() {
        let counts = count_bytes(&[0xde, 0xad, 0xbe, 0xef, 0xde, 0xad]);
        assert_eq!(counts[0xde], 2);
        assert_eq!(counts[0xad], 2);
        assert_eq!(counts[0xbe], 1);
        assert_eq!(counts[0xef], 1);
        assert_eq!(counts.iter().sum::<u64>(), 6);
    }

    #[test]
    fn chunks_add_up() {
        let mut counts = count_bytes(b"hello ");
        add_byte_counts(&mut counts, b"world");
        assert_eq!(counts, count_bytes(b"hello world"));
        assert_eq!(counts[b'l' as usize], 3);
    }
}
